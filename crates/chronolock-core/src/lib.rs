//! # ChronoLock Core
//!
//! Core library for ChronoLock - time-locked symmetric encryption.
//!
//! Content is sealed together with an unlock instant. Opening the sealed blob
//! is refused until the injected clock reaches that instant.
//!
//! This crate provides the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Passphrase key derivation and the AES-256-GCM sealed-box codec
//! - **payload**: The sealed payload and blob types
//! - **clock**: Injectable "current time" capability
//! - **store**: Byte source/sink capabilities (filesystem, in-memory)
//! - **lock**: The time-gated coordinator
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use chronolock_core::{ChronoLock, ChronoLockError, FixedClock};
//!
//! let now = Utc.with_ymd_and_hms(2025, 5, 30, 10, 0, 0).unwrap();
//! let unlock_at = now + Duration::days(2);
//!
//! let lock = ChronoLock::new("a long enough passphrase").with_clock(FixedClock::new(now));
//! let blob = lock.encrypt("some secret content", unlock_at).unwrap();
//!
//! match lock.decrypt(&blob) {
//!     Err(ChronoLockError::GateNotOpen { remaining }) => assert_eq!(remaining, Duration::days(2)),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod clock;
pub mod crypto;
pub mod error;
pub mod fs;
pub mod lock;
pub mod payload;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use crypto::{CodecError, SealedBoxCodec};
pub use error::{ChronoLockError, Result};
pub use lock::{ChronoLock, Decryptor, Encryptor};
pub use payload::{SealedBlob, TimeLockedPayload};
pub use store::{FsStore, MemoryStore, Persister, Reader};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
