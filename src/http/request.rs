//! The request descriptor consumed by a transport.
//!
//! A [`Request`] performs no I/O of its own. The transport reads the
//! method, url, headers and timeout out of it, and pulls body bytes from
//! the attached [`Source`] when the method carries one.

use super::{Header, MAX_HEADERS};
use crate::stream::{MemorySource, Source};
use heapless::{String, Vec};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// HEAD
    Head,
    /// DELETE
    Delete,
}

impl Method {
    /// Wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a request body is meaningful for this method.
    ///
    /// A body attached to any other method stays on the descriptor but is
    /// ignored by the transport contract.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Put | Method::Post)
    }
}

/// An inert description of a single HTTP request.
///
/// Header keys are stored with the casing they were supplied in; setting
/// the same key with the same casing overwrites, while the same key in a
/// different casing creates a second entry. Lookup is case-insensitive
/// and returns the first match.
///
/// For PUT the transport streams the body from the source's current
/// position; for POST it materializes the same byte count up front.
/// [`body_len`](Request::body_len) reports that count either way.
#[derive(Debug)]
pub struct Request<'a, B = MemorySource<'a>> {
    method: Method,
    url: &'a str,
    headers: Vec<Header, MAX_HEADERS>,
    timeout_seconds: Option<u32>,
    body: Option<B>,
}

impl<'a> Request<'a, MemorySource<'a>> {
    /// Create a bodyless request.
    pub fn new(method: Method, url: &'a str) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            timeout_seconds: None,
            body: None,
        }
    }
}

impl<'a, B: Source> Request<'a, B> {
    /// Create a request carrying `body`.
    pub fn with_body(method: Method, url: &'a str, body: B) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            timeout_seconds: None,
            body: Some(body),
        }
    }

    /// The request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Replace the request method.
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// The request URL.
    pub fn url(&self) -> &'a str {
        self.url
    }

    /// Replace the request URL.
    pub fn set_url(&mut self, url: &'a str) {
        self.url = url;
    }

    /// Set a header, overwriting an existing entry whose name matches
    /// exactly (case included). Fails when the name or value exceeds its
    /// bounded length or the header table is full.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), ()> {
        let name = String::try_from(name)?;
        let value = String::try_from(value)?;
        if let Some(existing) = self.headers.iter_mut().find(|h| h.name == name) {
            existing.value = value;
            return Ok(());
        }
        self.headers.push(Header { name, value }).map_err(|_| ())
    }

    /// Look up a header case-insensitively; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// All headers, in insertion order.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Request timeout, if one was set.
    pub fn timeout_seconds(&self) -> Option<u32> {
        self.timeout_seconds
    }

    /// Set the request timeout. Zero clears it (no timeout).
    pub fn set_timeout_seconds(&mut self, seconds: u32) {
        self.timeout_seconds = if seconds > 0 { Some(seconds) } else { None };
    }

    /// The attached body source, if any.
    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Mutable access to the body source, for the transport to read from.
    pub fn body_mut(&mut self) -> Option<&mut B> {
        self.body.as_mut()
    }

    /// Attach or replace the body source.
    pub fn set_body(&mut self, body: B) {
        self.body = Some(body);
    }

    /// Bytes the transport will send for this request's body: the source
    /// length remaining past its current position, or 0 when the method
    /// carries no body.
    pub fn body_len(&self) -> Result<u64, B::Error> {
        match &self.body {
            Some(body) if self.method.allows_body() => Ok(body.size()? - body.position()?),
            _ => Ok(0),
        }
    }
}
