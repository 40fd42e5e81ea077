//! Incremental HTTP response parser.
//!
//! A [`Response`] is created fresh for each request, fed bytes while the
//! request is in flight, and read through its accessors once the
//! transport signals completion. It is never reused.
//!
//! `feed` expects line-granular input while the status line and headers
//! are being parsed — one line per call, the bare separator line included.
//! A transport that produces arbitrary byte boundaries should go through
//! [`Assembler`](super::Assembler), which restores that granularity.

use super::error::{Error, ParseEvent, Transfer};
use super::{Header, MAX_ERROR_BODY_LEN, MAX_HEADERS};
use crate::stream::Sink;
use heapless::{String, Vec};

const MAX_VERSION_LEN: usize = 16;
const MAX_REASON_LEN: usize = 64;
const MAX_EVENTS: usize = 8;

/// Parser position within the response byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StatusLine,
    Headers,
    Body,
    Failed,
}

/// An HTTP response assembled incrementally from transport-fed bytes.
///
/// Body bytes of 2xx responses are forwarded verbatim to the configured
/// [`Sink`]; bodies of other status codes are captured in a bounded
/// error buffer so server fault payloads stay inspectable without
/// touching the sink.
#[derive(Debug)]
pub struct Response<S: Sink> {
    state: State,
    version: String<MAX_VERSION_LEN>,
    status_code: u16,
    reason: String<MAX_REASON_LEN>,
    headers: Vec<Header, MAX_HEADERS>,
    error_body: Vec<u8, MAX_ERROR_BODY_LEN>,
    events: Vec<ParseEvent, MAX_EVENTS>,
    sink_dropped: usize,
    error_dropped: usize,
    sink: S,
}

impl<S: Sink> Response<S> {
    /// Create a parser that routes 2xx body bytes into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            state: State::StatusLine,
            version: String::new(),
            status_code: 0,
            reason: String::new(),
            headers: Vec::new(),
            error_body: Vec::new(),
            events: Vec::new(),
            sink_dropped: 0,
            error_dropped: 0,
            sink,
        }
    }

    /// Feed the next piece of the response: one line while headers are
    /// being parsed, any chunk once the body has begun. Returns the number
    /// of bytes consumed (always the full chunk unless an error is
    /// returned).
    ///
    /// While headers are being parsed an empty line — terminator bytes
    /// present or not — is the header/body separator. Everywhere else an
    /// empty chunk is a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<usize, Error> {
        match self.state {
            State::Failed => Err(Error::MalformedStatusLine),
            State::StatusLine => {
                if chunk.is_empty() {
                    return Ok(0);
                }
                match self.parse_status_line(chunk) {
                    Ok(()) => {
                        self.state = State::Headers;
                        Ok(chunk.len())
                    }
                    Err(e) => {
                        self.state = State::Failed;
                        Err(e)
                    }
                }
            }
            State::Headers => {
                if is_separator(chunk) {
                    self.state = State::Body;
                } else {
                    self.parse_header_line(chunk);
                }
                Ok(chunk.len())
            }
            State::Body => {
                if chunk.is_empty() {
                    return Ok(0);
                }
                self.write_body(chunk)
            }
        }
    }

    /// Report the outcome once the transport signals completion.
    ///
    /// Completion before the header/body separator is a distinct terminal
    /// state ([`Error::HeaderIncomplete`]), not an empty-body success.
    pub fn finish(&self) -> Result<Transfer, Error> {
        match self.state {
            State::Failed => Err(Error::MalformedStatusLine),
            State::StatusLine | State::Headers => Err(Error::HeaderIncomplete),
            State::Body => {
                let dropped = self.sink_dropped + self.error_dropped;
                if dropped > 0 {
                    Ok(Transfer::Truncated { dropped })
                } else {
                    Ok(Transfer::Complete)
                }
            }
        }
    }

    fn parse_status_line(&mut self, chunk: &[u8]) -> Result<(), Error> {
        let line = core::str::from_utf8(chunk)
            .map_err(|_| Error::MalformedStatusLine)?
            .trim();
        let mut parts = line.splitn(3, ' ');
        let version = parts.next().ok_or(Error::MalformedStatusLine)?.trim();
        let code = parts.next().ok_or(Error::MalformedStatusLine)?.trim();
        let reason = parts.next().ok_or(Error::MalformedStatusLine)?.trim();

        self.status_code = code.parse().map_err(|_| Error::MalformedStatusLine)?;
        self.version = String::try_from(version).map_err(|_| Error::MalformedStatusLine)?;
        self.reason = String::try_from(reason).map_err(|_| Error::MalformedStatusLine)?;
        Ok(())
    }

    fn parse_header_line(&mut self, chunk: &[u8]) {
        let Ok(line) = core::str::from_utf8(chunk) else {
            self.record(ParseEvent::MalformedHeaderLine);
            return;
        };
        // Split on the first colon only; values may themselves contain
        // colons.
        let Some((name, value)) = line.trim().split_once(':') else {
            self.record(ParseEvent::MalformedHeaderLine);
            return;
        };
        let name = name.trim();
        let value = value.trim();

        // Reserve sink capacity ahead of the body. Failure is recorded and
        // parsing continues; the body will be clipped instead.
        if name.eq_ignore_ascii_case("Content-Length") {
            if let Ok(declared) = value.parse::<usize>() {
                if self.sink.reserve(declared).is_err() {
                    self.record(ParseEvent::ReservationFailed {
                        requested: declared,
                    });
                }
            }
        }

        let (Ok(name), Ok(value)) = (String::try_from(name), String::try_from(value)) else {
            self.record(ParseEvent::MalformedHeaderLine);
            return;
        };
        if let Some(existing) = self.headers.iter_mut().find(|h| h.name == name) {
            existing.value = value;
        } else if self.headers.push(Header { name, value }).is_err() {
            self.record(ParseEvent::HeadersDiscarded);
        }
    }

    fn write_body(&mut self, chunk: &[u8]) -> Result<usize, Error> {
        if !(200..300).contains(&self.status_code) {
            let take = chunk.len().min(MAX_ERROR_BODY_LEN - self.error_body.len());
            let _ = self.error_body.extend_from_slice(&chunk[..take]);
            if take < chunk.len() {
                let dropped = chunk.len() - take;
                self.error_dropped += dropped;
                self.record(ParseEvent::ErrorBodyTruncated { dropped });
            }
            return Ok(chunk.len());
        }

        let accepted = self.sink.write(chunk).map_err(|e| Error::Io(e.into()))?;
        if accepted < chunk.len() {
            let dropped = chunk.len() - accepted;
            self.sink_dropped += dropped;
            self.record(ParseEvent::SinkWriteRejected { dropped });
        }
        Ok(chunk.len())
    }

    fn record(&mut self, event: ParseEvent) {
        // Events beyond the bound are dropped; the byte counters stay
        // accurate regardless.
        let _ = self.events.push(event);
    }

    /// Whether the header/body separator has been seen.
    pub fn headers_complete(&self) -> bool {
        self.state == State::Body
    }

    /// HTTP version token from the status line, e.g. `"HTTP/1.1"`.
    pub fn http_version(&self) -> &str {
        &self.version
    }

    /// Status code from the status line.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Reason phrase from the status line; may contain spaces.
    pub fn reason_phrase(&self) -> &str {
        &self.reason
    }

    /// Look up a header by exact name, as stored.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }

    /// All stored headers.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Captured body bytes of a non-2xx response.
    pub fn error_body(&self) -> &[u8] {
        &self.error_body
    }

    /// Decode a JSON fault payload captured from a non-2xx response.
    pub fn error_body_json<'de, T: serde::Deserialize<'de>>(
        &'de self,
    ) -> Result<T, serde_json_core::de::Error> {
        serde_json_core::de::from_slice(&self.error_body).map(|(value, _)| value)
    }

    /// Recoverable incidents recorded while parsing, in order.
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }

    /// Total body bytes dropped across the transfer.
    pub fn dropped_bytes(&self) -> usize {
        self.sink_dropped + self.error_dropped
    }

    /// The sink body bytes are routed into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the parser and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// The header/body separator is any line that trims to nothing, so
/// `"\r\n"`, a bare `"\n"`, the empty string, and a separator reassembled
/// from split chunks all terminate the header phase.
fn is_separator(chunk: &[u8]) -> bool {
    chunk.iter().all(|b| b.is_ascii_whitespace())
}
