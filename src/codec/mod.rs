//! Encoding helpers: base64, hex, percent encoding.
//!
//! Buffer-passing APIs usable without an allocator: the caller supplies
//! the destination and gets back the encoded region. Base64 follows RFC
//! 4648 with padding (via `base64ct`); percent encoding leaves the
//! unreserved set untouched and escapes everything else as `%XX`.

#![deny(unsafe_code)]

use base64ct::{Base64, Encoding as _};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// A common error type for encoding operations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The destination buffer is too small for the encoded output.
    BufferTooSmall,
    /// The input is not valid for the requested decoding.
    InvalidEncoding,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
            Error::InvalidEncoding => defmt::write!(f, "InvalidEncoding"),
        }
    }
}

/// Base64-encode `src` into `dst` and return the encoded text.
pub fn base64_encode<'a>(src: &[u8], dst: &'a mut [u8]) -> Result<&'a str, Error> {
    Base64::encode(src, dst).map_err(|_| Error::BufferTooSmall)
}

/// Decode base64 text from `src` into `dst` and return the decoded bytes.
pub fn base64_decode<'a>(src: &[u8], dst: &'a mut [u8]) -> Result<&'a [u8], Error> {
    Base64::decode(src, dst).map_err(|e| match e {
        base64ct::Error::InvalidLength => Error::BufferTooSmall,
        _ => Error::InvalidEncoding,
    })
}

/// Encode `src` as lowercase hex into `dst` and return the encoded text.
pub fn hex_encode<'a>(src: &[u8], dst: &'a mut [u8]) -> Result<&'a str, Error> {
    let needed = src.len().checked_mul(2).ok_or(Error::BufferTooSmall)?;
    if dst.len() < needed {
        return Err(Error::BufferTooSmall);
    }
    for (i, &byte) in src.iter().enumerate() {
        dst[2 * i] = HEX_CHARS[(byte >> 4) as usize];
        dst[2 * i + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    core::str::from_utf8(&dst[..needed]).map_err(|_| Error::InvalidEncoding)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode `src` into `dst` and return the encoded text.
///
/// Unreserved characters (RFC 3986) pass through; every other byte
/// becomes `%XX`.
pub fn url_encode<'a>(src: &str, dst: &'a mut [u8]) -> Result<&'a str, Error> {
    let mut out = 0;
    for &byte in src.as_bytes() {
        if is_unreserved(byte) {
            if out >= dst.len() {
                return Err(Error::BufferTooSmall);
            }
            dst[out] = byte;
            out += 1;
        } else {
            if out + 3 > dst.len() {
                return Err(Error::BufferTooSmall);
            }
            dst[out] = b'%';
            dst[out + 1] = HEX_CHARS[(byte >> 4) as usize].to_ascii_uppercase();
            dst[out + 2] = HEX_CHARS[(byte & 0x0f) as usize].to_ascii_uppercase();
            out += 3;
        }
    }
    core::str::from_utf8(&dst[..out]).map_err(|_| Error::InvalidEncoding)
}

fn hex_value(byte: u8) -> Result<u8, Error> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(Error::InvalidEncoding),
    }
}

/// Decode percent-encoded text from `src` into `dst` and return the
/// decoded bytes. Bytes outside `%XX` escapes pass through unchanged.
pub fn url_decode<'a>(src: &str, dst: &'a mut [u8]) -> Result<&'a [u8], Error> {
    let bytes = src.as_bytes();
    let mut input = 0;
    let mut out = 0;
    while input < bytes.len() {
        let decoded = if bytes[input] == b'%' {
            if input + 3 > bytes.len() {
                return Err(Error::InvalidEncoding);
            }
            let value = (hex_value(bytes[input + 1])? << 4) | hex_value(bytes[input + 2])?;
            input += 3;
            value
        } else {
            let value = bytes[input];
            input += 1;
            value
        };
        if out >= dst.len() {
            return Err(Error::BufferTooSmall);
        }
        dst[out] = decoded;
        out += 1;
    }
    Ok(&dst[..out])
}
