//! # Inspector Data
//!
//! Immutable snapshots answering UI inspector queries: which chain of
//! components sits under the inspector selection, which entry of that chain
//! is highlighted, and where in source the highlighted component is defined.
//!
//! ## Architecture
//!
//! ```text
//!  Component tree (renderer)
//!        │
//!        ▼
//! ┌──────────────┐
//! │  Inspector   │  Walk ancestry, resolve source location
//! │ (node → snap)│
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Snapshot   │  Validated once, immutable afterwards
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │     Wire     │  JSON for devtools / remote debuggers
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use inspector_data::{wire, InspectionSnapshot, InspectorConfig, SourceLocation};
//!
//! let snapshot = InspectionSnapshot::new(
//!     vec!["App".into(), "Screen".into(), "Button".into()],
//!     2,
//!     SourceLocation::resolve("Button.src", 10, 3),
//! )?;
//!
//! assert_eq!(snapshot.selected_name(), Some("Button"));
//! let json = wire::to_json(&snapshot, &InspectorConfig::default())?;
//! assert!(json.contains("\"selectedIndex\":2"));
//! # Ok::<(), inspector_data::InspectorError>(())
//! ```

pub mod config;
pub mod diagnostic;
pub mod inspector;
pub mod snapshot;
pub mod wire;

pub use config::InspectorConfig;
pub use diagnostic::{InspectorError, SourceLocation};
pub use inspector::{ComponentTree, Inspector, NodeId};
pub use snapshot::{
    InspectionSnapshot, NO_SELECTION, UNRESOLVED_COLUMN, UNRESOLVED_FILE, UNRESOLVED_LINE,
};
