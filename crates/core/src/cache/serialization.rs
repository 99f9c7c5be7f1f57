//! Pure functions for serializing/deserializing snapshots to/from cache bytes.
//!
//! JSON keeps cached values readable from `redis-cli`.

use crate::calendar::CalendarSnapshot;
use thiserror::Error;

use super::CacheError;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

impl From<SerializationError> for CacheError {
    fn from(error: SerializationError) -> Self {
        CacheError::Serialization(error.to_string())
    }
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a snapshot to JSON bytes.
pub fn serialize_snapshot(snapshot: &CalendarSnapshot) -> Result<Vec<u8>> {
    serde_json::to_vec(snapshot).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a snapshot.
pub fn deserialize_snapshot(bytes: &[u8]) -> Result<CalendarSnapshot> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{ModeusEvent, NetologyEvent, NetologySchedule};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn snapshot() -> CalendarSnapshot {
        CalendarSnapshot::new(
            NetologySchedule::new(vec![
                NetologyEvent::new(1, "Math").with_times(
                    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
                ),
                NetologyEvent::new(2, "Unscheduled"),
            ]),
            vec![ModeusEvent::new(
                Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
                "Physics",
                Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap(),
            )
            .with_description("Lab")],
        )
    }

    #[test]
    fn test_cached_snapshot_keeps_hash() {
        let original = snapshot();

        let bytes = serialize_snapshot(&original).expect("serialize should succeed");
        let cached = deserialize_snapshot(&bytes).expect("deserialize should succeed");

        assert_eq!(cached, original);
        assert_eq!(cached.content_hash(), original.content_hash());
    }

    #[test]
    fn test_serialized_layout() {
        let bytes = serialize_snapshot(&CalendarSnapshot::default()).unwrap();
        assert_eq!(bytes, br#"{"netology":{"webinars":[]},"modeus":[]}"#);
    }

    #[test]
    fn test_deserialize_malformed() {
        let result = deserialize_snapshot(b"{ not json");

        let err = result.unwrap_err();
        assert!(matches!(err, SerializationError::DeserializeFailed(_)));
    }

    #[test]
    fn test_serialization_error_into_cache_error() {
        let error: CacheError = SerializationError::SerializeFailed("boom".to_string()).into();
        assert_eq!(
            error,
            CacheError::Serialization("Failed to serialize: boom".to_string())
        );
    }
}
