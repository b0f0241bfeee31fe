//! Cryptographic operations for ChronoLock.
//!
//! This module provides key derivation and authenticated encryption using
//! well-audited libraries:
//! - **SHA-256**: Deterministic passphrase-to-key derivation
//! - **AES-256-GCM**: Authenticated encryption of the whole payload
//!
//! ## Security Model
//!
//! - The unlock instant is sealed together with the content, so tampering with
//!   either one fails tag verification
//! - A fresh random nonce is drawn for every seal
//! - Derived keys are zeroized from memory on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Reading or altering a sealed blob without the passphrase
//! - Moving the unlock time of a sealed blob
//!
//! We do NOT defend against:
//! - Someone with the passphrase who waits out (or fakes) the clock
//! - Offline brute-force attacks on weak passphrases

pub mod codec;
pub mod key;
pub mod passphrase;

pub use codec::{CodecError, SealedBoxCodec};
pub use key::{derive_key, DerivedKey};
pub use passphrase::validate_passphrase;
