//! Korean phone number validation, normalization and formatting.
//!
//! This library checks user-supplied phone numbers before they are stored
//! by the reservation backend: consumer and shop-owner sign-up, profile
//! updates and shop imports.
//!
//! # Features
//!
//! - **Normalization**: strips hyphens, spaces, dots and parentheses, and
//!   converts `+82` input into domestic digits
//! - **Classification**: mobile (`01X`) or landline (Seoul `02`, regional `0XX`)
//! - **Carrier/Region Labels**: advisory lookup by prefix
//! - **Fraud Heuristics**: keypad runs, repeated digits and placeholder numbers
//! - **Formatting**: canonical hyphenated display form, domestic or `+82-`
//!
//! # Architecture
//!
//! - [`domain`]: Leaf rules (normalizer, matchers, heuristics, formatter)
//! - [`validation`]: The validation pipeline and convenience functions
//! - [`input`]: Reading numbers from files
//! - [`error`]: Errors for failures that are not a bad number
//!
//! # Quick Start
//!
//! ```
//! use kr_phone::{validate, PhoneClass};
//!
//! let result = validate("010-1234-5678");
//! assert!(result.is_valid);
//! assert_eq!(result.normalized, "01012345678");
//! assert_eq!(result.class, PhoneClass::Mobile);
//!
//! let result = validate("02-1234-5678");
//! assert_eq!(result.carrier.as_deref(), Some("Seoul"));
//! ```
//!
//! # Examples
//!
//! ## Reject placeholder numbers
//!
//! ```
//! use kr_phone::{validate, IssueKind};
//!
//! let result = validate("010-1111-1111");
//! assert!(!result.is_valid);
//! assert!(result.has_issue(IssueKind::Heuristic));
//! ```
//!
//! ## Import data without heuristics
//!
//! ```
//! use kr_phone::PhoneValidator;
//!
//! let validator = PhoneValidator::new()
//!     .with_heuristics(false)
//!     .with_trunk_prefix_repair(true);
//!
//! let result = validator.validate("2-1111-1111");
//! assert_eq!(result.formatted, "02-1111-1111");
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod input;
pub mod validation;

// Re-exports for convenient access
pub use domain::{IssueKind, PatternMatcher, PhoneClass, ValidationIssue};
pub use error::{PhoneError, PhoneResult};
pub use validation::{
    get_formatted_phone_number, get_normalized_phone_number, is_landline_number,
    is_mobile_number, validate, validate_batch, InvalidPhoneNumber, PhoneNumber, PhoneValidator,
    ValidationResult,
};
