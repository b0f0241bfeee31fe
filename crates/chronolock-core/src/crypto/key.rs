//! Passphrase to AES-256 key.
//!
//! The key is `SHA-256(passphrase)`. There is no salt: two codecs built from
//! the same passphrase must agree on the key without any shared state.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

/// AES-256 key size in bytes.
pub const KEY_LENGTH: usize = 32;

/// Key bytes, wiped on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LENGTH]);

impl DerivedKey {
    /// Raw key bytes, for handing straight to the cipher.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Hash `passphrase` into a [`DerivedKey`].
///
/// ```
/// use chronolock_core::crypto::derive_key;
///
/// assert_eq!(derive_key("same").as_bytes(), derive_key("same").as_bytes());
/// assert_ne!(derive_key("same").as_bytes(), derive_key("other").as_bytes());
/// ```
pub fn derive_key(passphrase: &str) -> DerivedKey {
    DerivedKey(Sha256::digest(passphrase.as_bytes()).into())
}
