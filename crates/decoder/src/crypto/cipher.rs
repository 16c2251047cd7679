//! AES-256-CBC decryption of individual ciphertexts with PKCS#7 unpadding.
//!
//! The decoder is a pure function: hex/base64 decode, CBC block decryption,
//! strict PKCS#7 validation, UTF-8 validation. Every failure mode is a typed
//! [`DecodeError`] variant — nothing in here panics on caller input.
//!
//! **Padding policy:** strict PKCS#7. The final byte `p` must be in `1..=16`
//! and all `p` trailing bytes must equal `p`. This is stronger than the range
//! check the original API performed.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of a CBC initialization vector (one cipher block).
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Errors produced by the decode operation.
///
/// Detail strings describe the failure shape only; they never carry key
/// material, ciphertext, or recovered plaintext bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex or base64 decoding failed, or a decoded length mismatched the
    /// cipher's fixed-size requirements.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The block-decryption step rejected the input.
    #[error("cryptographic failure: {0}")]
    CryptographicFailure(String),

    /// The trailing PKCS#7 padding is invalid.
    #[error("invalid padding")]
    InvalidPadding,

    /// The unpadded plaintext is not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8")]
    InvalidEncoding,
}

/// Decode a ciphertext: hex key + hex IV + base64 ciphertext → plaintext.
///
/// The operation is synchronous, stateless, and deterministic — identical
/// inputs always produce identical results, so failures are terminal and
/// never worth retrying.
///
/// # Errors
///
/// - [`DecodeError::MalformedEncoding`] — bad hex/base64, or the key is not
///   [`KEY_LEN`] bytes / the IV is not [`IV_LEN`] bytes once decoded.
/// - [`DecodeError::CryptographicFailure`] — ciphertext empty or not a
///   multiple of [`BLOCK_LEN`].
/// - [`DecodeError::InvalidPadding`] — PKCS#7 validation failed.
/// - [`DecodeError::InvalidEncoding`] — plaintext is not UTF-8.
pub fn decode(key_hex: &str, iv_hex: &str, ciphertext_b64: &str) -> Result<String, DecodeError> {
    let key = decode_hex_exact(key_hex, KEY_LEN, "key")?;
    let iv = decode_hex_exact(iv_hex, IV_LEN, "iv")?;

    let ciphertext = STANDARD.decode(ciphertext_b64).map_err(|e| {
        DecodeError::MalformedEncoding(format!("ciphertext is not valid base64: {e}"))
    })?;

    let decrypted = cbc_decrypt(&key, &iv, &ciphertext)?;
    let plaintext = strip_pkcs7(&decrypted)?;

    String::from_utf8(plaintext.to_vec()).map_err(|_| DecodeError::InvalidEncoding)
}

/// Hex-decode `input`, requiring exactly `expected_len` decoded bytes.
fn decode_hex_exact(
    input: &str,
    expected_len: usize,
    label: &str,
) -> Result<Vec<u8>, DecodeError> {
    let bytes = hex::decode(input)
        .map_err(|e| DecodeError::MalformedEncoding(format!("{label} is not valid hex: {e}")))?;
    if bytes.len() != expected_len {
        return Err(DecodeError::MalformedEncoding(format!(
            "{label} must decode to {expected_len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// Raw CBC block decryption. Padding is left in place for [`strip_pkcs7`].
fn cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if ciphertext.is_empty() {
        return Err(DecodeError::CryptographicFailure(
            "ciphertext is empty".into(),
        ));
    }
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(DecodeError::CryptographicFailure(format!(
            "ciphertext length {} is not a multiple of the {BLOCK_LEN}-byte block size",
            ciphertext.len()
        )));
    }

    // Lengths are pre-validated, so construction cannot fail in practice.
    let decryptor = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| DecodeError::CryptographicFailure(format!("cipher init failed: {e}")))?;

    let mut buf = ciphertext.to_vec();
    decryptor
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|e| DecodeError::CryptographicFailure(format!("block decryption failed: {e}")))?;
    Ok(buf)
}

/// Validate and strip PKCS#7 padding (strict: all padding bytes must match).
fn strip_pkcs7(decrypted: &[u8]) -> Result<&[u8], DecodeError> {
    let last = *decrypted.last().ok_or(DecodeError::InvalidPadding)?;
    let pad_len = last as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > decrypted.len() {
        return Err(DecodeError::InvalidPadding);
    }
    let (body, padding) = decrypted.split_at(decrypted.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(DecodeError::InvalidPadding);
    }
    Ok(body)
}
