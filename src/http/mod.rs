//! HTTP request description and incremental response assembly
//!
//! The pieces here mirror the two directions of a single HTTP exchange:
//! a [`Request`] is an inert value an external transport consumes, and a
//! [`Response`] is assembled incrementally from the bytes that transport
//! pushes back. [`Assembler`] sits in front of [`Response`] when the
//! transport delivers chunks at arbitrary byte boundaries.

#![deny(unsafe_code)]

/// Parse errors, recoverable parse events, transfer outcome
pub mod error;

/// The request descriptor
pub mod request;

/// The incremental response parser
pub mod response;

/// Chunk-boundary-independent framing in front of the parser
pub mod assembler;

pub use assembler::Assembler;
pub use error::{Error, ParseEvent, Transfer};
pub use request::{Method, Request};
pub use response::Response;

use heapless::String;

/// Maximum number of header entries a request or response can hold.
pub const MAX_HEADERS: usize = 32;
/// Maximum length of a header name in bytes.
pub const MAX_HEADER_NAME_LEN: usize = 64;
/// Maximum length of a header value in bytes.
pub const MAX_HEADER_VALUE_LEN: usize = 256;
/// Maximum length of a single status or header line, terminator included.
pub const MAX_LINE_LEN: usize = 1024;
/// Maximum number of error-body bytes captured from a non-2xx response.
pub const MAX_ERROR_BODY_LEN: usize = 2048;

/// A single HTTP header entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name, stored with the casing it was supplied in.
    pub name: String<MAX_HEADER_NAME_LEN>,
    /// Header value.
    pub value: String<MAX_HEADER_VALUE_LEN>,
}
