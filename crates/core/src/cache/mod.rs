mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{calendar_key, readiness_key, request_digest};
pub use serialization::{deserialize_snapshot, serialize_snapshot, SerializationError};
pub use traits::Cache;
