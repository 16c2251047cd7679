//! AES-256-CBC ciphertext decoding primitives.
//!
//! This module is intentionally free of HTTP dependencies. It provides the
//! pure decode-and-unpad operation used by the request handlers.
//!
//! # Known limitation
//!
//! CBC decryption carries no integrity check. A tampered ciphertext is only
//! caught if the damage happens to break the padding or UTF-8 validation —
//! callers who need authenticity must layer a MAC or switch to an AEAD mode.

pub mod cipher;

pub use cipher::{decode, DecodeError};
