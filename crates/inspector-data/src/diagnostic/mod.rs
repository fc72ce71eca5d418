//! Diagnostic types for error reporting and source locations.

mod error;
mod location;

pub use error::{InspectorError, Result};
pub use location::SourceLocation;
