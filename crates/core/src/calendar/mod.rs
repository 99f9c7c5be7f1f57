mod error;
mod hash;
mod http_mapping;
mod requests;
mod types;

pub use error::{CalendarError, Result};
pub(crate) use hash::CanonicalHasher;
pub use hash::snapshot_hash;
pub use http_mapping::calendar_error_to_status_code;
pub use requests::{CalendarRequest, ModeusEventsBody, NetologyCookies, DEFAULT_EVENTS_PAGE_SIZE};
pub use types::{
    CalendarSnapshot, EventSource, ModeusEvent, NetologyEvent, NetologySchedule,
    RefreshedCalendarSnapshot,
};
