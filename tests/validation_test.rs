//! End-to-end tests for the validation pipeline.
//!
//! These tests exercise `validate` through the public API with the
//! numbers a sign-up or profile form would actually receive.

use kr_phone::{
    get_formatted_phone_number, get_normalized_phone_number, is_landline_number,
    is_mobile_number, validate, validate_batch, IssueKind, PhoneClass, PhoneValidator,
};

mod common;
use common::*;

mod mobile {
    use super::*;

    #[test]
    fn test_canonical_mobile() {
        let result = assert_valid("010-1234-5678", PhoneClass::Mobile);
        assert_eq!(result.normalized, "01012345678");
        assert_eq!(result.formatted, "010-1234-5678");
        assert_eq!(result.carrier.as_deref(), Some("Mobile (All Carriers)"));
        assert!(!result.international);
    }

    #[test]
    fn test_all_fixture_mobiles_validate() {
        for raw in VALID_MOBILE {
            let result = assert_valid(raw, PhoneClass::Mobile);
            assert_eq!(&result.formatted, raw);
        }
    }

    #[test]
    fn test_unformatted_input() {
        let inputs = [
            "01028461937",
            "010 2846 1937",
            "010.2846.1937",
            "(010) 2846-1937",
            "  010-2846-1937  ",
        ];
        for raw in inputs {
            let result = assert_valid(raw, PhoneClass::Mobile);
            assert_eq!(result.normalized, "01028461937");
            assert_eq!(result.formatted, "010-2846-1937");
        }
    }

    #[test]
    fn test_legacy_prefix_formats() {
        let result = assert_valid("0162846193", PhoneClass::Mobile);
        assert_eq!(result.formatted, "016-284-6193");
        assert_eq!(result.carrier.as_deref(), Some("KT"));
    }

    #[test]
    fn test_short_010_is_length_error() {
        let result = assert_rejected("010-1234-567", IssueKind::Length);
        assert_eq!(result.class, PhoneClass::Mobile);
    }

    #[test]
    fn test_long_legacy_prefix_is_length_error() {
        assert_rejected("011-2846-1937", IssueKind::Length);
    }

    #[test]
    fn test_unissued_mobile_prefix() {
        let result = assert_rejected("012-284-6193", IssueKind::Heuristic);
        assert_eq!(result.class, PhoneClass::Mobile);
        assert!(result.messages().iter().any(|m| m.contains("012")));
    }
}

mod landline {
    use super::*;

    #[test]
    fn test_seoul_landline() {
        let result = assert_valid("02-1234-5678", PhoneClass::Landline);
        assert_eq!(result.carrier.as_deref(), Some("Seoul"));
        assert_eq!(result.normalized, "0212345678");
        assert_eq!(result.formatted, "02-1234-5678");
    }

    #[test]
    fn test_fixture_landlines_resolve_region() {
        for (raw, region) in VALID_LANDLINE {
            let result = assert_valid(raw, PhoneClass::Landline);
            assert_eq!(result.carrier.as_deref(), Some(*region), "{}", raw);
            assert_eq!(&result.formatted, raw);
        }
    }

    #[test]
    fn test_unassigned_area_code_has_no_region() {
        let result = assert_valid("035-284-6193", PhoneClass::Landline);
        assert!(result.carrier.is_none());
    }

    #[test]
    fn test_nine_digit_non_seoul_rejected() {
        assert_rejected("031-284-619", IssueKind::Length);
    }

    #[test]
    fn test_non_geographic_prefix_rejected() {
        assert_rejected("070-2846-1937", IssueKind::Format);
        assert_rejected("080-284-6193", IssueKind::Format);
    }
}

mod international {
    use super::*;

    #[test]
    fn test_international_mobile() {
        let result = assert_valid("+82-10-1234-5678", PhoneClass::Mobile);
        assert_eq!(result.normalized, "01012345678");
        assert_eq!(result.formatted, "+82-10-1234-5678");
        assert!(result.international);
    }

    #[test]
    fn test_international_spacing_variants() {
        for raw in ["+82 10 2846 1937", "+821028461937", "+82 (10) 2846-1937"] {
            let result = assert_valid(raw, PhoneClass::Mobile);
            assert_eq!(result.formatted, "+82-10-2846-1937");
        }
    }

    #[test]
    fn test_international_landline() {
        let result = assert_valid("+82-2-2846-1937", PhoneClass::Landline);
        assert_eq!(result.formatted, "+82-2-2846-1937");
        assert_eq!(result.carrier.as_deref(), Some("Seoul"));
    }

    #[test]
    fn test_space_inside_country_code_keeps_international_form() {
        let result = assert_valid("+ 82 10 2846 1937", PhoneClass::Mobile);
        assert!(result.international);
        assert_eq!(result.formatted, "+82-10-2846-1937");
    }

    #[test]
    fn test_international_short_seoul_number() {
        let result = assert_valid("+82 2 739 2846", PhoneClass::Landline);
        assert_eq!(result.normalized, "027392846");
        assert_eq!(result.formatted, "+82-2-739-2846");

        // Only Seoul has 8 digits after the country code.
        assert_rejected("+82 31 739 284", IssueKind::Format);
    }

    #[test]
    fn test_trunk_zero_after_country_code_rejected() {
        let result = assert_rejected("+82-010-2846-1937", IssueKind::Format);
        assert_eq!(result.class, PhoneClass::Unknown);
    }

    #[test]
    fn test_letters_in_international_rejected() {
        assert_rejected("+82-10-ABCD-1937", IssueKind::Format);
    }

    #[test]
    fn test_other_country_codes_rejected() {
        assert_rejected("+1 415 555 1212", IssueKind::Format);
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_required() {
        for result in [validate(""), validate(None), validate(" \t ")] {
            assert_failure_shape(&result);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].kind, IssueKind::Required);
        }
    }

    #[test]
    fn test_placeholders_rejected() {
        for raw in PLACEHOLDER_NUMBERS {
            assert_rejected(raw, IssueKind::Heuristic);
        }
    }

    #[test]
    fn test_repeated_digits_detected_despite_format_match() {
        let result = assert_rejected("010-1111-1111", IssueKind::Heuristic);
        assert_eq!(result.class, PhoneClass::Mobile);
        assert!(result.errors.len() >= 2, "repeated and known test number");
    }

    #[test]
    fn test_invalid_characters() {
        assert_rejected("010-abcd-5678", IssueKind::Format);
        assert_rejected("010#2846#1937", IssueKind::Format);
        assert_rejected("---", IssueKind::Format);
    }

    #[test]
    fn test_errors_accumulate() {
        let result = validate("12345");
        assert_failure_shape(&result);
        assert!(result.has_issue(IssueKind::Length));
        assert!(result.has_issue(IssueKind::Format));
        assert!(result.errors.len() >= 3);
    }

    #[test]
    fn test_missing_trunk_prefix() {
        let result = assert_rejected("10-2846-1937", IssueKind::Format);
        assert!(result
            .messages()
            .iter()
            .any(|m| m.contains("must start with 0")));
    }
}

mod wrappers {
    use super::*;

    #[test]
    fn test_class_predicates() {
        assert!(is_mobile_number("010-2846-1937"));
        assert!(!is_mobile_number("010-1111-1111"));
        assert!(is_landline_number("051-739-2846"));
        assert!(!is_landline_number("010-2846-1937"));
    }

    #[test]
    fn test_normalized_and_formatted() {
        assert_eq!(
            get_normalized_phone_number("+82 10 2846 1937").as_deref(),
            Some("01028461937")
        );
        assert_eq!(
            get_formatted_phone_number("0312846193").as_deref(),
            Some("031-284-6193")
        );
        assert_eq!(get_normalized_phone_number("010-1111-1111"), None);
        assert_eq!(get_formatted_phone_number(""), None);
    }

    #[test]
    fn test_batch_preserves_order() {
        let results = validate_batch(["010-2846-1937", "", "02-123-4567"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_valid);
        assert!(results[1].has_issue(IssueKind::Required));
        assert!(results[2].is_valid);
    }

    #[test]
    fn test_batch_accepts_owned_strings() {
        let inputs = vec!["010-2846-1937".to_string(), "nope".to_string()];
        let results = PhoneValidator::new().validate_batch(&inputs);
        assert_eq!(results.iter().filter(|r| r.is_valid).count(), 1);
    }
}

mod scanning {
    use super::*;

    #[test]
    fn test_scan_shop_description() {
        let text = "예약: 010-2846-1937\n매장: (02) 739-2846\n해외: +82 10 9182 7364";
        let results = PhoneValidator::new().scan(text);

        let formatted: Vec<&str> = results.iter().map(|r| r.formatted.as_str()).collect();
        assert_eq!(
            formatted,
            vec!["010-2846-1937", "02-739-2846", "+82-10-9182-7364"]
        );
    }

    #[test]
    fn test_scan_numbers_attached_to_korean_words() {
        let text = "연락처010-2846-1937로 연락주세요. 매장02-739-2846번, 부산051-739-2846";
        let results = PhoneValidator::new().scan(text);

        let formatted: Vec<&str> = results.iter().map(|r| r.formatted.as_str()).collect();
        assert_eq!(
            formatted,
            vec!["010-2846-1937", "02-739-2846", "051-739-2846"]
        );
        assert!(results.iter().all(|r| r.is_valid));
    }

    #[test]
    fn test_scan_ignores_longer_digit_strings() {
        let results = PhoneValidator::new().scan("order 1234501028461937999");
        assert!(results.is_empty());
    }

    #[test]
    fn test_scan_empty_text() {
        assert!(PhoneValidator::new().scan("").is_empty());
    }
}

mod files {
    use super::*;
    use kr_phone::PhoneError;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = InputFileBuilder::new()
            .with_line("010-2846-1937")
            .with_line("")
            .with_line("  02-739-2846  ")
            .build(&temp_dir.path().join("numbers.txt"))
            .unwrap();

        let results = PhoneValidator::new().validate_file(&path).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_valid));
        assert_eq!(results[1].raw, "02-739-2846");
    }

    #[test]
    fn test_validate_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        match PhoneValidator::new().validate_file(&path) {
            Err(PhoneError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_file_without_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = InputFileBuilder::new()
            .with_line("\t")
            .build(&temp_dir.path().join("blank.txt"))
            .unwrap();

        let err = PhoneValidator::new().validate_file(&path).unwrap_err();
        assert!(matches!(err, PhoneError::InvalidInput { .. }));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(validate("02-1234-5678")).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["normalized"], "0212345678");
        assert_eq!(json["formatted"], "02-1234-5678");
        assert_eq!(json["carrier"], "Seoul");
        assert_eq!(json["class"], "landline");
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_failure_json_omits_carrier() {
        let json = serde_json::to_value(validate("010-1234-567")).unwrap();
        assert_eq!(json["isValid"], false);
        assert!(json.get("carrier").is_none());
        assert_eq!(json["errors"][0]["kind"], "length");
    }
}
