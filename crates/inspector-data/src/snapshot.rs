//! The inspection snapshot: the answer to one inspector query.
//!
//! A snapshot records the component hierarchy under the inspector selection
//! (root first, inspected node last), which entry of that hierarchy is
//! selected, and where in source the selected component is defined.
//!
//! Snapshots are validated once, at construction, and never change
//! afterwards. A new query produces a new snapshot.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::diagnostic::{InspectorError, Result, SourceLocation};
use crate::wire::WireSnapshot;

/// `selectedIndex` reported when nothing is selected (empty hierarchy).
pub const NO_SELECTION: i32 = -1;

/// `fileName` reported when the selected node has no source mapping.
pub const UNRESOLVED_FILE: &str = "";

/// `lineNumber` reported when the selected node has no source mapping.
pub const UNRESOLVED_LINE: i32 = -1;

/// `columnNumber` reported when the selected node has no source mapping.
pub const UNRESOLVED_COLUMN: i32 = -1;

/// Immutable result of an inspector query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireSnapshot", into = "WireSnapshot")]
pub struct InspectionSnapshot {
    hierarchy: Vec<String>,
    selection: Option<usize>,
    source: Option<SourceLocation>,
}

impl InspectionSnapshot {
    /// Builds a snapshot, checking `selected_index` against `hierarchy`.
    ///
    /// For a non-empty hierarchy the index must lie in `0..len`. For an empty
    /// hierarchy only [`NO_SELECTION`] is accepted. A missing `source` is not
    /// an error: the snapshot reports the unresolved sentinels instead.
    pub fn new(
        hierarchy: Vec<String>,
        selected_index: i32,
        source: Option<SourceLocation>,
    ) -> Result<Self> {
        let selection = match check_selection(hierarchy.len(), selected_index) {
            Ok(selection) => selection,
            Err(err) => {
                debug!(
                    index = selected_index,
                    len = hierarchy.len(),
                    "rejected inspection snapshot"
                );
                return Err(err);
            }
        };

        trace!(
            depth = hierarchy.len(),
            selected = selected_index,
            resolved = source.is_some(),
            "built inspection snapshot"
        );

        Ok(Self {
            hierarchy,
            selection,
            source,
        })
    }

    /// Snapshot of a query that hit nothing.
    pub fn empty() -> Self {
        Self {
            hierarchy: Vec::new(),
            selection: None,
            source: None,
        }
    }

    /// Snapshot selecting the innermost entry of `hierarchy`, the usual shape
    /// of a hit-test answer. An empty hierarchy yields no selection.
    pub fn innermost(hierarchy: Vec<String>, source: Option<SourceLocation>) -> Self {
        let selection = hierarchy.len().checked_sub(1);
        Self {
            hierarchy,
            selection,
            source,
        }
    }

    /// Ancestor chain, outermost first. Order is significant.
    pub fn hierarchy(&self) -> &[String] {
        &self.hierarchy
    }

    /// Selected index as reported on the wire, [`NO_SELECTION`] when empty.
    pub fn selected_index(&self) -> i32 {
        match self.selection {
            Some(index) => i32::try_from(index).unwrap_or(i32::MAX),
            None => NO_SELECTION,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Display name of the selected entry.
    pub fn selected_name(&self) -> Option<&str> {
        self.selection
            .and_then(|index| self.hierarchy.get(index))
            .map(String::as_str)
    }

    pub fn file_name(&self) -> &str {
        self.source
            .as_ref()
            .map(SourceLocation::file_name)
            .unwrap_or(UNRESOLVED_FILE)
    }

    pub fn line_number(&self) -> i32 {
        self.source
            .as_ref()
            .map(|s| s.line() as i32)
            .unwrap_or(UNRESOLVED_LINE)
    }

    pub fn column_number(&self) -> i32 {
        self.source
            .as_ref()
            .map(|s| s.column() as i32)
            .unwrap_or(UNRESOLVED_COLUMN)
    }

    pub fn source_location(&self) -> Option<&SourceLocation> {
        self.source.as_ref()
    }

    pub fn is_source_resolved(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.hierarchy.is_empty()
    }

    /// Number of entries in the hierarchy.
    pub fn depth(&self) -> usize {
        self.hierarchy.len()
    }

    /// Hands the parts back to the owner, ending the snapshot's life.
    pub fn into_parts(self) -> (Vec<String>, Option<usize>, Option<SourceLocation>) {
        (self.hierarchy, self.selection, self.source)
    }
}

impl Default for InspectionSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_selection(len: usize, index: i32) -> Result<Option<usize>> {
    if len == 0 {
        return if index == NO_SELECTION {
            Ok(None)
        } else {
            Err(InspectorError::invalid_selection(index.into(), len))
        };
    }

    match usize::try_from(index) {
        Ok(i) if i < len => Ok(Some(i)),
        _ => Err(InspectorError::invalid_selection(index.into(), len)),
    }
}
