//! Byte-level codec helpers for transaction payloads.
//!
//! Payloads mix base64, hex and plain text in one field, and the hex
//! segments may carry arbitrary binary. Everything here therefore works
//! byte-for-byte: bytes widen 1:1 to chars and are never decoded as
//! multi-byte text, so splitting on the literal `@` byte and
//! re-interpreting segments as hex stays lossless.

use base64::{Engine as _, engine::general_purpose::STANDARD as b64};
use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

pub fn base64_decode(data: &str) -> Result<Vec<u8>, CodecError> {
    b64.decode(data)
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

pub fn base64_encode(bytes: &[u8]) -> String {
    b64.encode(bytes)
}

pub fn base64_to_hex(data: &str) -> Result<String, CodecError> {
    Ok(hex::encode(base64_decode(data)?))
}

/// Widen bytes to a `String` one char per byte.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn hex_to_string(data: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(data).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
    Ok(bytes_to_string(&bytes))
}

/// Base-16 parse into a machine integer. Empty, malformed and overflowing
/// input all yield `None`.
pub fn hex_to_number(data: &str) -> Option<u64> {
    u64::from_str_radix(data, 16).ok()
}

/// Base-16 parse into an arbitrary-precision integer. Empty and malformed
/// input both yield zero.
pub fn hex_to_biguint(data: &str) -> BigUint {
    BigUint::parse_bytes(data.as_bytes(), 16).unwrap_or_default()
}

/// Every char in `[0-9a-fA-F]`; the empty string counts as valid.
pub fn is_hex(data: &str) -> bool {
    data.chars().all(|c| c.is_ascii_hexdigit())
}
