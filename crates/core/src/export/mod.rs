//! iCalendar export of snapshots.

mod error;
mod ics;

pub use error::{ExportError, Result};
pub use ics::{export_ics, export_ics_at, parse_timezone, IcsDocument, ICS_CONTENT_TYPE, PRODUCT_ID};
