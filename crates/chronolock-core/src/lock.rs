//! The time-gated coordinator.
//!
//! [`ChronoLock`] wraps content and an unlock instant into a
//! [`TimeLockedPayload`], seals it, and refuses to release the content until
//! its clock reaches the unlock instant.
//!
//! Ordering on decrypt is fixed: the blob is authenticated first, the clock is
//! read second. A blob whose unlock time was tampered with therefore fails as
//! `InvalidData` and never reaches the gate check.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::crypto::{CodecError, SealedBoxCodec};
use crate::error::{ChronoLockError, Result};
use crate::payload::{SealedBlob, TimeLockedPayload};
use crate::store::{FsStore, Persister, Reader};

/// Seals payloads.
pub trait Encryptor: Send + Sync {
    fn seal(&self, payload: &TimeLockedPayload) -> std::result::Result<Vec<u8>, CodecError>;
}

/// Opens sealed payloads.
pub trait Decryptor: Send + Sync {
    fn open(&self, blob: &[u8]) -> std::result::Result<TimeLockedPayload, CodecError>;
}

impl Encryptor for SealedBoxCodec {
    fn seal(&self, payload: &TimeLockedPayload) -> std::result::Result<Vec<u8>, CodecError> {
        SealedBoxCodec::seal(self, payload)
    }
}

impl Decryptor for SealedBoxCodec {
    fn open(&self, blob: &[u8]) -> std::result::Result<TimeLockedPayload, CodecError> {
        SealedBoxCodec::open(self, blob)
    }
}

/// Time-locked encryption coordinator.
///
/// All collaborators are injected. [`ChronoLock::new`] wires the production
/// defaults; the `with_*` methods replace any one of them.
pub struct ChronoLock {
    encryptor: Box<dyn Encryptor>,
    decryptor: Box<dyn Decryptor>,
    reader: Box<dyn Reader>,
    persister: Box<dyn Persister>,
    clock: Box<dyn Clock>,
}

impl ChronoLock {
    /// Create a coordinator backed by a [`SealedBoxCodec`] for `passphrase`,
    /// the filesystem, and the system clock.
    pub fn new(passphrase: &str) -> Self {
        let codec = SealedBoxCodec::new(passphrase);
        Self {
            encryptor: Box::new(codec.clone()),
            decryptor: Box::new(codec),
            reader: Box::new(FsStore),
            persister: Box::new(FsStore),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_encryptor(mut self, encryptor: impl Encryptor + 'static) -> Self {
        self.encryptor = Box::new(encryptor);
        self
    }

    pub fn with_decryptor(mut self, decryptor: impl Decryptor + 'static) -> Self {
        self.decryptor = Box::new(decryptor);
        self
    }

    pub fn with_reader(mut self, reader: impl Reader + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn with_persister(mut self, persister: impl Persister + 'static) -> Self {
        self.persister = Box::new(persister);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Seal `content` so that it cannot be decrypted before `unlock_at`.
    ///
    /// Sealed blobs store the unlock time at millisecond precision, so
    /// `unlock_at` is rounded up to the next whole millisecond first. The
    /// instant checked against the clock is the instant that gets sealed.
    ///
    /// # Errors
    ///
    /// - `AlreadyElapsed` if `unlock_at` is not strictly after the current time
    /// - `Codec` if sealing fails
    pub fn encrypt(&self, content: &str, unlock_at: DateTime<Utc>) -> Result<SealedBlob> {
        let unlock_at = ceil_to_millis(unlock_at);
        let now = self.clock.now();
        if unlock_at <= now {
            return Err(ChronoLockError::AlreadyElapsed);
        }

        let payload = TimeLockedPayload::new(unlock_at, content);
        let sealed = self.encryptor.seal(&payload)?;
        Ok(SealedBlob::from(sealed))
    }

    /// Open a sealed blob and release its content if the unlock time has been reached.
    ///
    /// # Errors
    ///
    /// - `InvalidData` if the blob does not verify or decode
    /// - `GateNotOpen` if the unlock time is still in the future
    pub fn decrypt(&self, blob: &[u8]) -> Result<String> {
        let payload = self
            .decryptor
            .open(blob)
            .map_err(|_| ChronoLockError::InvalidData)?;

        let now = self.clock.now();
        if payload.unlock_at > now {
            return Err(ChronoLockError::GateNotOpen {
                remaining: payload.unlock_at - now,
            });
        }

        Ok(payload.content)
    }

    /// Read `input`, seal it until `unlock_at`, and write the blob to `output`.
    ///
    /// Input must be UTF-8 text.
    pub fn encrypt_and_save(
        &self,
        input: &Path,
        unlock_at: DateTime<Utc>,
        output: &Path,
    ) -> Result<()> {
        let bytes = self.reader.read(input)?;
        let content = String::from_utf8(bytes).map_err(|_| ChronoLockError::InvalidData)?;
        let sealed = self.encrypt(&content, unlock_at)?;
        self.persister.save_bytes(&sealed, output)?;
        Ok(())
    }

    /// Read a blob from `input`, decrypt it, and write the content to `output`.
    pub fn decrypt_and_save(&self, input: &Path, output: &Path) -> Result<()> {
        let bytes = self.reader.read(input)?;
        let content = self.decrypt(&bytes)?;
        self.persister.save_text(&content, output)?;
        Ok(())
    }
}

/// Round `instant` up to a whole millisecond.
pub fn ceil_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    let sub_millis = i64::from(instant.timestamp_subsec_nanos() % 1_000_000);
    if sub_millis == 0 {
        instant
    } else {
        instant + chrono::Duration::nanoseconds(1_000_000 - sub_millis)
    }
}

impl std::fmt::Debug for ChronoLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChronoLock").finish_non_exhaustive()
    }
}
