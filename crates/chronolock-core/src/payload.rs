//! Payload and blob types.

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content bound to the instant it may be released.
///
/// `unlock_at` is encoded as milliseconds since the Unix epoch so that the
/// gate never depends on a time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLockedPayload {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub unlock_at: DateTime<Utc>,
    pub content: String,
}

impl TimeLockedPayload {
    pub fn new(unlock_at: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            unlock_at,
            content: content.into(),
        }
    }
}

/// Opaque, tamper-evident output of sealing a [`TimeLockedPayload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlob(Vec<u8>);

impl SealedBlob {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for SealedBlob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Deref for SealedBlob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SealedBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unlock_at_serialized_as_epoch_millis() {
        let unlock_at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let payload = TimeLockedPayload::new(unlock_at, "secret");

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["unlock_at"], serde_json::json!(1_748_772_000_000_i64));
        assert_eq!(json["content"], "secret");
    }

    #[test]
    fn test_payload_json_round_trip_keeps_millis() {
        let unlock_at = Utc.timestamp_millis_opt(1_748_772_000_123).unwrap();
        let payload = TimeLockedPayload::new(unlock_at, "secret");

        let bytes = serde_json::to_vec(&payload).unwrap();
        let decoded: TimeLockedPayload = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_sealed_blob_derefs_to_bytes() {
        let blob = SealedBlob::from(vec![1, 2, 3]);
        assert_eq!(blob.len(), 3);
        assert_eq!(&blob[..], &[1, 2, 3]);
        assert_eq!(blob.into_bytes(), vec![1, 2, 3]);
    }
}
