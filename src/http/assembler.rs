//! Chunk-boundary-independent framing in front of [`Response`].
//!
//! Transports rarely deliver one header line per read: lines arrive
//! merged, split mid-token, or with the header/body separator glued to
//! adjacent bytes. [`Assembler`] buffers incoming chunks until each line
//! is complete, feeds finished lines to the parser, and switches to
//! straight pass-through once the header phase ends — so separator
//! detection does not depend on how the transport happened to slice the
//! stream.

use super::error::{Error, Transfer};
use super::response::Response;
use super::MAX_LINE_LEN;
use crate::stream::Sink;
use heapless::Vec;

/// Reassembles header lines from arbitrarily sliced chunks and drives a
/// [`Response`].
#[derive(Debug)]
pub struct Assembler<S: Sink> {
    response: Response<S>,
    line: Vec<u8, MAX_LINE_LEN>,
}

impl<S: Sink> Assembler<S> {
    /// Create an assembler routing 2xx body bytes into `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            response: Response::new(sink),
            line: Vec::new(),
        }
    }

    /// Push the next chunk of transport bytes, at whatever boundary the
    /// transport produced. Returns the number of bytes consumed (always
    /// the full chunk unless an error is returned).
    pub fn push(&mut self, chunk: &[u8]) -> Result<usize, Error> {
        let mut rest = chunk;
        while !rest.is_empty() {
            if self.response.headers_complete() {
                self.response.feed(rest)?;
                break;
            }
            match rest.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    let (head, tail) = rest.split_at(end + 1);
                    if self.line.extend_from_slice(head).is_err() {
                        return Err(Error::LineTooLong);
                    }
                    self.response.feed(&self.line)?;
                    self.line.clear();
                    rest = tail;
                }
                None => {
                    // No terminator yet; hold the partial line for the
                    // next chunk.
                    if self.line.extend_from_slice(rest).is_err() {
                        return Err(Error::LineTooLong);
                    }
                    break;
                }
            }
        }
        Ok(chunk.len())
    }

    /// Report the outcome once the transport signals completion.
    ///
    /// An unterminated partial line still counts as incomplete headers;
    /// see [`Response::finish`].
    pub fn finish(&self) -> Result<Transfer, Error> {
        self.response.finish()
    }

    /// The response being assembled.
    pub fn response(&self) -> &Response<S> {
        &self.response
    }

    /// Consume the assembler and return the response.
    pub fn into_response(self) -> Response<S> {
        self.response
    }
}
