//! Inspector error types.
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectorError>;

/// Errors that can occur while building or exchanging inspection snapshots.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    // =========================================================================
    // Snapshot Errors
    // =========================================================================
    #[error("Selected index {index} is out of bounds for a hierarchy of {len} entries")]
    #[diagnostic(
        code(inspector::snapshot::invalid_selection_index),
        help("Use an index in 0..len, or -1 when the hierarchy is empty. Recompute the index before retrying.")
    )]
    InvalidSelectionIndex {
        index: i64,
        len: usize,
    },

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    #[error("Unknown component node: {id}")]
    #[diagnostic(code(inspector::tree::unknown_node))]
    UnknownNode {
        id: usize,
    },

    // =========================================================================
    // Wire Errors
    // =========================================================================
    #[error("Failed to decode inspection snapshot: {message}")]
    #[diagnostic(
        code(inspector::wire::decode_failed),
        help("Expected an object with keys hierarchy, selectedIndex, fileName, lineNumber, columnNumber")
    )]
    Decode {
        message: String,
    },

    #[error("Failed to encode inspection snapshot: {message}")]
    #[diagnostic(code(inspector::wire::encode_failed))]
    Encode {
        message: String,
    },
}

impl InspectorError {
    /// Creates a selection bounds error.
    pub fn invalid_selection(index: i64, len: usize) -> Self {
        Self::InvalidSelectionIndex { index, len }
    }

    /// Returns true for the one error snapshot construction can raise.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelectionIndex { .. })
    }
}
