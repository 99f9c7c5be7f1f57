//! Canonical hashing of snapshots.
//!
//! Digests are computed over an explicit field encoding rather than over a
//! serialized form, so reordering struct fields or changing the JSON layout
//! leaves existing hashes (and cache keys) untouched.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use super::CalendarSnapshot;

const SNAPSHOT_DOMAIN: &[u8] = b"yacal:snapshot:v1";

/// SHA-256 over length-prefixed, tagged fields.
pub(crate) struct CanonicalHasher(Sha256);

impl CanonicalHasher {
    /// Starts a digest separated from other uses by `domain`.
    pub(crate) fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((domain.len() as u64).to_le_bytes());
        hasher.update(domain);
        Self(hasher)
    }

    pub(crate) fn len(&mut self, tag: u8, len: usize) {
        self.0.update([tag]);
        self.0.update((len as u64).to_le_bytes());
    }

    pub(crate) fn bytes(&mut self, tag: u8, value: &[u8]) {
        self.len(tag, value.len());
        self.0.update(value);
    }

    pub(crate) fn str(&mut self, tag: u8, value: &str) {
        self.bytes(tag, value.as_bytes());
    }

    pub(crate) fn opt_str(&mut self, tag: u8, value: Option<&str>) {
        match value {
            Some(value) => {
                self.0.update([1]);
                self.str(tag, value);
            }
            None => self.0.update([0, tag]),
        }
    }

    pub(crate) fn i64(&mut self, tag: u8, value: i64) {
        self.0.update([tag]);
        self.0.update(value.to_le_bytes());
    }

    pub(crate) fn datetime(&mut self, tag: u8, value: &DateTime<Utc>) {
        self.i64(tag, value.timestamp());
        self.0.update(value.timestamp_subsec_nanos().to_le_bytes());
    }

    pub(crate) fn opt_datetime(&mut self, tag: u8, value: Option<&DateTime<Utc>>) {
        match value {
            Some(value) => {
                self.0.update([1]);
                self.datetime(tag, value);
            }
            None => self.0.update([0, tag]),
        }
    }

    /// Finishes the digest as lowercase hex.
    pub(crate) fn finish(self) -> String {
        format!("{:x}", self.0.finalize())
    }
}

/// Computes the content hash of a snapshot.
///
/// Field order is fixed here: webinars (id, title, starts_at, ends_at,
/// webinar_url) followed by lessons (id, name, start_time, end_time,
/// description). Event order is significant.
pub fn snapshot_hash(snapshot: &CalendarSnapshot) -> String {
    let mut hasher = CanonicalHasher::new(SNAPSHOT_DOMAIN);

    hasher.len(b'N', snapshot.netology.webinars.len());
    for webinar in &snapshot.netology.webinars {
        hasher.i64(1, webinar.id);
        hasher.str(2, &webinar.title);
        hasher.opt_datetime(3, webinar.starts_at.as_ref());
        hasher.opt_datetime(4, webinar.ends_at.as_ref());
        hasher.opt_str(5, webinar.webinar_url.as_deref());
    }

    hasher.len(b'M', snapshot.modeus.len());
    for lesson in &snapshot.modeus {
        hasher.bytes(1, lesson.id.as_bytes());
        hasher.str(2, &lesson.name);
        hasher.datetime(3, &lesson.start_time);
        hasher.datetime(4, &lesson.end_time);
        hasher.opt_str(5, lesson.description.as_deref());
    }

    hasher.finish()
}
