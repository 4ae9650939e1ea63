//! Snapshot loading adapters
//!
//! Everything that turns outside data (JSON text, saved HTML reports, files
//! on disk) into the `Vec<SizeRecord>` the comparator consumes. Failures
//! stay on this side of the boundary; the comparator never sees partial or
//! malformed data.

mod error;
mod html;
mod json;
mod loader;

pub use error::SnapshotError;
pub use html::{extract_chart_data, extract_chart_data_or_empty};
pub use json::parse_snapshot;
pub use loader::load_snapshot;
