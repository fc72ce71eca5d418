//! Source location of an inspected component.

use std::fmt;

/// A resolved position in original source: file, 1-based line, 1-based column.
///
/// Only resolved locations exist as values. Anything the source mapping
/// could not pin down is carried as `None` by the snapshot, which reports
/// the unresolved sentinels instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file_name: String,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Resolves raw collaborator output into a location.
    ///
    /// Returns `None` when the file name is empty or the line or column is
    /// not a positive number.
    pub fn resolve(file_name: impl Into<String>, line: i32, column: i32) -> Option<Self> {
        let file_name = file_name.into();
        if file_name.is_empty() {
            return None;
        }
        let line = u32::try_from(line).ok().filter(|l| *l > 0)?;
        let column = u32::try_from(column).ok().filter(|c| *c > 0)?;

        Some(Self {
            file_name,
            line,
            column,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_valid() {
        let loc = SourceLocation::resolve("Button.src", 10, 3).unwrap();
        assert_eq!(loc.file_name(), "Button.src");
        assert_eq!(loc.line(), 10);
        assert_eq!(loc.column(), 3);
        assert_eq!(loc.to_string(), "Button.src:10:3");
    }

    #[test]
    fn test_resolve_rejects_unmapped_input() {
        assert!(SourceLocation::resolve("", 10, 3).is_none());
        assert!(SourceLocation::resolve("Button.src", 0, 3).is_none());
        assert!(SourceLocation::resolve("Button.src", 10, 0).is_none());
        assert!(SourceLocation::resolve("Button.src", -1, -1).is_none());
    }
}
