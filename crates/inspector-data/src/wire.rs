//! JSON mapping of inspection snapshots for debugging-protocol consumers.
//!
//! The object is field-for-field:
//!
//! ```json
//! {
//!   "hierarchy": ["App", "Screen", "Button"],
//!   "selectedIndex": 2,
//!   "fileName": "Button.src",
//!   "lineNumber": 10,
//!   "columnNumber": 3
//! }
//! ```
//!
//! Decoding goes through the same validation as `InspectionSnapshot::new`.

use serde::{Deserialize, Serialize};

use crate::config::InspectorConfig;
use crate::diagnostic::{InspectorError, Result, SourceLocation};
use crate::snapshot::{InspectionSnapshot, UNRESOLVED_COLUMN, UNRESOLVED_FILE, UNRESOLVED_LINE};

/// Wire shape of a snapshot. Source fields may be omitted and then read as
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSnapshot {
    pub hierarchy: Vec<String>,
    pub selected_index: i64,
    #[serde(default)]
    pub file_name: String,
    #[serde(default = "unresolved_line")]
    pub line_number: i32,
    #[serde(default = "unresolved_column")]
    pub column_number: i32,
}

fn unresolved_line() -> i32 {
    UNRESOLVED_LINE
}

fn unresolved_column() -> i32 {
    UNRESOLVED_COLUMN
}

impl From<InspectionSnapshot> for WireSnapshot {
    fn from(snapshot: InspectionSnapshot) -> Self {
        let selected_index = i64::from(snapshot.selected_index());
        let (file_name, line_number, column_number) = match snapshot.source_location() {
            Some(loc) => (loc.file_name().to_string(), loc.line() as i32, loc.column() as i32),
            None => (UNRESOLVED_FILE.to_string(), UNRESOLVED_LINE, UNRESOLVED_COLUMN),
        };
        let (hierarchy, _, _) = snapshot.into_parts();

        Self {
            hierarchy,
            selected_index,
            file_name,
            line_number,
            column_number,
        }
    }
}

impl TryFrom<WireSnapshot> for InspectionSnapshot {
    type Error = InspectorError;

    fn try_from(wire: WireSnapshot) -> Result<Self> {
        let selected_index = i32::try_from(wire.selected_index).map_err(|_| {
            InspectorError::invalid_selection(wire.selected_index, wire.hierarchy.len())
        })?;
        let source = SourceLocation::resolve(wire.file_name, wire.line_number, wire.column_number);
        InspectionSnapshot::new(wire.hierarchy, selected_index, source)
    }
}

/// Encodes a snapshot, pretty-printed when `config.pretty` is set.
pub fn to_json(snapshot: &InspectionSnapshot, config: &InspectorConfig) -> Result<String> {
    let encoded = if config.pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    encoded.map_err(|e| InspectorError::Encode {
        message: e.to_string(),
    })
}

/// Encodes a snapshot as a JSON value, for embedding in a larger message.
pub fn to_value(snapshot: &InspectionSnapshot) -> Result<serde_json::Value> {
    serde_json::to_value(snapshot).map_err(|e| InspectorError::Encode {
        message: e.to_string(),
    })
}

/// Decodes and validates a snapshot.
///
/// Malformed JSON fails with `Decode`; a well-formed object whose
/// `selectedIndex` does not fit its hierarchy (including indices wider than
/// `i32`) fails with `InvalidSelectionIndex`. A source location that does not
/// fully resolve is dropped as a whole and decodes as unresolved.
pub fn from_json(input: &str) -> Result<InspectionSnapshot> {
    let wire: WireSnapshot = serde_json::from_str(input).map_err(|e| InspectorError::Decode {
        message: e.to_string(),
    })?;
    InspectionSnapshot::try_from(wire)
}
