//! Sample numbers and input file builders.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Valid mobile numbers in domestic display form.
pub const VALID_MOBILE: &[&str] = &[
    "010-1234-5678",
    "010-2846-1937",
    "010-9182-7364",
    "011-284-1937",
    "016-739-2846",
    "017-284-6193",
    "018-562-9471",
    "019-845-2716",
];

/// Valid landline numbers with their expected region.
pub const VALID_LANDLINE: &[(&str, &str)] = &[
    ("02-123-4567", "Seoul"),
    ("02-1234-5678", "Seoul"),
    ("031-284-6193", "Gyeonggi"),
    ("032-2846-1937", "Incheon"),
    ("044-862-1937", "Sejong"),
    ("051-739-2846", "Busan"),
    ("064-728-1935", "Jeju"),
];

/// Well-formed numbers that the fraud heuristics reject.
pub const PLACEHOLDER_NUMBERS: &[&str] = &[
    "010-1111-1111",
    "010-0000-0000",
    "010-1234-1234",
    "010-9876-5432",
    "010-0123-4567",
    "02-2222-2222",
    "010-5555-1937",
];

/// Builder for input files used by batch and scan tests.
#[derive(Debug, Clone, Default)]
pub struct InputFileBuilder {
    lines: Vec<String>,
}

impl InputFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one line of text.
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Adds one line per number.
    pub fn with_numbers(mut self, numbers: &[&str]) -> Self {
        self.lines.extend(numbers.iter().map(|n| n.to_string()));
        self
    }

    /// Writes the file and returns its path.
    pub fn build(&self, path: &Path) -> Result<PathBuf> {
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(path, content)?;
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_writes_lines() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = InputFileBuilder::new()
            .with_line("a")
            .with_numbers(&["b", "c"])
            .build(&temp_dir.path().join("in.txt"))?;
        assert_eq!(fs::read_to_string(path)?, "a\nb\nc\n");
        Ok(())
    }
}
