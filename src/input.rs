//! Reading phone numbers from files.

use crate::error::{PhoneError, PhoneResult};
use std::fs;
use std::path::Path;

/// Reads a UTF-8 text file, attaching the path to any IO error.
pub fn read_input(path: &Path) -> PhoneResult<String> {
    fs::read_to_string(path).map_err(|source| PhoneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank lines with surrounding whitespace removed.
pub fn number_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Reads a file with one phone number per line.
///
/// A file without any non-blank line is rejected.
pub fn read_number_lines(path: &Path) -> PhoneResult<Vec<String>> {
    let text = read_input(path)?;
    let lines: Vec<String> = number_lines(&text).into_iter().map(String::from).collect();

    if lines.is_empty() {
        return Err(PhoneError::InvalidInput {
            parameter: path.display().to_string(),
            reason: "file contains no phone numbers".to_string(),
        });
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_lines() {
        let text = " 010-1234-5678 \r\n\n\t\n02-123-4567\n";
        assert_eq!(number_lines(text), vec!["010-1234-5678", "02-123-4567"]);
    }

    #[test]
    fn test_missing_file_keeps_path() {
        let err = read_input(Path::new("/nonexistent/numbers.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/numbers.txt"));
    }
}
