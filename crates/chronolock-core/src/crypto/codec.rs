//! Sealed-box codec: AES-256-GCM over a JSON-encoded payload.
//!
//! Blob layout:
//!
//! ```text
//! +--------+---------+-----------+--------------------+---------+
//! | "CHLK" | version | nonce(12) | ciphertext         | tag(16) |
//! +--------+---------+-----------+--------------------+---------+
//! ```
//!
//! The magic and version bytes are bound as associated data, so every byte of
//! the blob is covered by the authentication tag.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::key::{derive_key, DerivedKey};

/// Magic bytes identifying a sealed blob.
pub const BLOB_MAGIC: [u8; 4] = *b"CHLK";

/// Current blob format version.
pub const BLOB_VERSION: u8 = 1;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

const HEADER_LEN: usize = BLOB_MAGIC.len() + 1;

/// Errors produced by the sealed-box codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload could not be serialized
    #[error("Failed to encode payload: {0}")]
    Encoding(String),

    /// The AEAD primitive or the nonce source failed while sealing
    #[error("Failed to seal payload: {0}")]
    Seal(String),

    /// Wrong key, corrupted data, or malformed blob
    #[error("Authentication failed")]
    Authentication,

    /// Decrypted bytes do not match the expected payload shape
    #[error("Failed to decode payload: {0}")]
    Decoding(String),
}

/// Authenticated encryption of serializable payloads under a passphrase-derived key.
#[derive(Clone)]
pub struct SealedBoxCodec {
    key: DerivedKey,
}

impl SealedBoxCodec {
    /// Create a codec whose key is derived from `passphrase`.
    pub fn new(passphrase: &str) -> Self {
        Self {
            key: derive_key(passphrase),
        }
    }

    /// Serialize and seal a payload, returning the combined blob.
    pub fn seal<T: Serialize>(&self, payload: &T) -> Result<Vec<u8>, CodecError> {
        let plaintext =
            serde_json::to_vec(payload).map_err(|e| CodecError::Encoding(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        getrandom::getrandom(&mut nonce_bytes)
            .map_err(|e| CodecError::Seal(format!("Failed to generate nonce: {}", e)))?;

        let header = header();
        let ciphertext = self
            .cipher()
            .encrypt(
                Nonce::from_slice(&nonce_bytes),
                Payload {
                    msg: &plaintext,
                    aad: &header,
                },
            )
            .map_err(|e| CodecError::Seal(e.to_string()))?;

        let mut blob = Vec::with_capacity(HEADER_LEN + NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&header);
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Verify, decrypt and deserialize a blob produced by [`SealedBoxCodec::seal`].
    pub fn open<T: DeserializeOwned>(&self, blob: &[u8]) -> Result<T, CodecError> {
        let (header, nonce, ciphertext) = parse_blob(blob)?;

        let plaintext = self
            .cipher()
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: header,
                },
            )
            .map_err(|_| CodecError::Authentication)?;

        serde_json::from_slice(&plaintext).map_err(|e| CodecError::Decoding(e.to_string()))
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(self.key.as_bytes()))
    }
}

impl std::fmt::Debug for SealedBoxCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedBoxCodec")
            .field("key", &self.key)
            .finish()
    }
}

fn header() -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[..BLOB_MAGIC.len()].copy_from_slice(&BLOB_MAGIC);
    header[BLOB_MAGIC.len()] = BLOB_VERSION;
    header
}

/// Split a blob into (header, nonce, ciphertext-with-tag).
///
/// Structural problems are reported as `Authentication` so they are
/// indistinguishable from a failed tag check.
fn parse_blob(blob: &[u8]) -> Result<(&[u8], &[u8], &[u8]), CodecError> {
    if blob.len() < HEADER_LEN + NONCE_LEN + TAG_LEN {
        return Err(CodecError::Authentication);
    }

    let (header, rest) = blob.split_at(HEADER_LEN);
    if header[..BLOB_MAGIC.len()] != BLOB_MAGIC || header[BLOB_MAGIC.len()] != BLOB_VERSION {
        return Err(CodecError::Authentication);
    }

    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
    Ok((header, nonce, ciphertext))
}
