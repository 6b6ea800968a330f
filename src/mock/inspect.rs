// src/mock/inspect.rs
//! Existing-content inspection.
//!
//! The only structural claim made about a pre-existing file is "an exported
//! binding or class named exactly `<MockName>` is declared here". Matches
//! inside line or block comments do not count.

use crate::error::{MockError, Result};
use crate::mock::ExportForm;
use regex::Regex;
use std::fs;
use std::path::Path;

/// What inspection found in a target file.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Full prior file content; None when the file does not exist.
    pub existing: Option<String>,
    /// The mock's declaration, if present.
    pub found: Option<ExportForm>,
}

impl Inspection {
    #[must_use]
    pub fn mock_exists(&self) -> bool {
        self.found.is_some()
    }
}

/// Reads the target file (if any) and looks for the mock's declaration.
pub fn inspect(target: &Path, mock_class_name: &str) -> Result<Inspection> {
    if !target.exists() {
        return Ok(Inspection {
            existing: None,
            found: None,
        });
    }
    let existing =
        fs::read_to_string(target).map_err(|e| MockError::io(e, target.to_path_buf()))?;
    let found = find_declaration(&existing, mock_class_name);
    Ok(Inspection {
        existing: Some(existing),
        found,
    })
}

/// Scans for `export const|class <name>` outside comments and reports the
/// export form of the first hit.
#[must_use]
pub fn find_declaration(content: &str, mock_class_name: &str) -> Option<ExportForm> {
    let pattern = format!(
        r"export\s+(const|class)\s+{}\s",
        regex::escape(mock_class_name)
    );
    let re = Regex::new(&pattern).ok()?;

    let mut in_block_comment = false;
    for line in content.lines() {
        let code = strip_comments(line, &mut in_block_comment);
        if let Some(captures) = re.captures(&code) {
            return Some(match &captures[1] {
                "class" => ExportForm::ClassAlias,
                _ => ExportForm::Value,
            });
        }
    }
    None
}

/// Returns the non-comment portion of a line, tracking block-comment state
/// across lines. String literals are not interpreted; generated files do
/// not put declarations inside strings.
fn strip_comments(line: &str, in_block_comment: &mut bool) -> String {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < bytes.len() {
        if *in_block_comment {
            if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                *in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'/') {
            break;
        }
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*') {
            *in_block_comment = true;
            i += 2;
            continue;
        }
        out.push(bytes[i] as char);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_const_declaration() {
        let content = "export const MockFoo = {};\n";
        assert_eq!(
            find_declaration(content, "MockFoo"),
            Some(ExportForm::Value)
        );
    }

    #[test]
    fn test_finds_class_declaration() {
        let content = "export class MockFoo {\n}\n";
        assert_eq!(
            find_declaration(content, "MockFoo"),
            Some(ExportForm::ClassAlias)
        );
    }

    #[test]
    fn test_name_must_match_exactly() {
        let content = "export const MockFooBar = {};\n";
        assert_eq!(find_declaration(content, "MockFoo"), None);
    }

    #[test]
    fn test_line_comment_does_not_count() {
        let content = "// export const MockFoo = {};\n";
        assert_eq!(find_declaration(content, "MockFoo"), None);
    }

    #[test]
    fn test_block_comment_does_not_count() {
        let content = "/*\nexport const MockFoo = {};\n*/\n";
        assert_eq!(find_declaration(content, "MockFoo"), None);
        let after = "/* x */ export const MockFoo = {};\n";
        assert_eq!(find_declaration(after, "MockFoo"), Some(ExportForm::Value));
    }

    #[test]
    fn test_missing_file_reports_nothing() {
        let inspection = inspect(Path::new("definitely/not/here.mock.ts"), "MockX").unwrap();
        assert!(inspection.existing.is_none());
        assert!(!inspection.mock_exists());
    }
}
