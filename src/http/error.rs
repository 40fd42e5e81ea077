//! Error and event types for response assembly

use crate::stream;

/// A fatal error raised while assembling a response.
///
/// Recoverable incidents (a header line with no colon, a failed capacity
/// reservation, a clipped body write) do not surface here; they are
/// recorded as [`ParseEvent`]s on the parser instance and parsing
/// continues.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The first line of the response did not parse as
    /// `"<version> <code> <reason>"`. Fatal: the instance accepts no
    /// further input and every later call reports this error again.
    MalformedStatusLine,
    /// Completion was signaled before the header/body separator arrived.
    /// The sink is untouched and any parsed headers are partial.
    HeaderIncomplete,
    /// A status or header line exceeded the bounded line buffer.
    LineTooLong,
    /// The backing store failed; the payload is the underlying stream
    /// error, surfaced unmodified.
    Io(stream::Error),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::MalformedStatusLine => defmt::write!(f, "MalformedStatusLine"),
            Error::HeaderIncomplete => defmt::write!(f, "HeaderIncomplete"),
            Error::LineTooLong => defmt::write!(f, "LineTooLong"),
            Error::Io(e) => defmt::write!(f, "Io({})", e),
        }
    }
}

/// A recoverable incident recorded during parsing.
///
/// Events accumulate on the parser and can be inspected after completion,
/// so callers distinguish a clean response from one that was patched over.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseEvent {
    /// A header line had no colon (or was not valid UTF-8) and was skipped.
    MalformedHeaderLine,
    /// `Content-Length` asked the sink to reserve more than it can hold.
    /// The body will be clipped once writes reach capacity.
    ReservationFailed {
        /// The declared content length that failed to reserve.
        requested: usize,
    },
    /// A body write exceeded the sink's remaining capacity; the prefix
    /// that fit was kept.
    SinkWriteRejected {
        /// Bytes lost from this write.
        dropped: usize,
    },
    /// The error-body buffer overflowed while capturing a non-2xx payload.
    ErrorBodyTruncated {
        /// Bytes lost from this append.
        dropped: usize,
    },
    /// The header table was full; the line was parsed but not stored.
    HeadersDiscarded,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParseEvent::MalformedHeaderLine => defmt::write!(f, "MalformedHeaderLine"),
            ParseEvent::ReservationFailed { requested } => {
                defmt::write!(f, "ReservationFailed({})", requested)
            }
            ParseEvent::SinkWriteRejected { dropped } => {
                defmt::write!(f, "SinkWriteRejected({})", dropped)
            }
            ParseEvent::ErrorBodyTruncated { dropped } => {
                defmt::write!(f, "ErrorBodyTruncated({})", dropped)
            }
            ParseEvent::HeadersDiscarded => defmt::write!(f, "HeadersDiscarded"),
        }
    }
}

/// The outcome of a completed transfer.
///
/// Returned by `finish()` once the transport stops feeding. A truncated
/// body is reported explicitly rather than silently returning a short
/// buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transfer {
    /// Every body byte reached its destination buffer.
    Complete,
    /// One or more body bytes were dropped on the floor.
    Truncated {
        /// Total bytes lost across the whole transfer.
        dropped: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for Transfer {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Transfer::Complete => defmt::write!(f, "Complete"),
            Transfer::Truncated { dropped } => defmt::write!(f, "Truncated({})", dropped),
        }
    }
}
