//! A byte-stream abstraction layer for pluggable backing stores
//!
//! This module defines the two capability traits the HTTP layer is built
//! on — [`Source`] for the read side and [`Sink`] for the write side — and
//! the stores that implement them. A store implements only the capabilities
//! it truly supports: a borrowed slice is a `Source`, a fixed-capacity
//! memory buffer is a `Sink` with random-access read-back, a file can be
//! either.

#![allow(async_fn_in_trait)]
#![deny(unsafe_code)]

/// Common error type for stream operations
pub mod error;

/// Memory-backed stores
pub mod memory;

/// File-backed stores
#[cfg(feature = "std")]
pub mod file;

pub use error::Error;
pub use memory::{MemorySink, MemorySource};

#[cfg(feature = "std")]
pub use file::{FileSink, FileSource};
#[cfg(feature = "std")]
pub use memory::VecSink;

/// Re-exports of common traits
pub mod prelude {
    #[cfg(feature = "async")]
    pub use super::{AsyncSink, AsyncSource};
    pub use super::{Sink, Source};
}

/// The read side of a byte store: sequential reads with seek and position
/// tracking and a size query.
///
/// A transport uses a `Source` as the producer side when uploading a
/// request body: it repeatedly calls [`read`](Source::read) to fill each
/// send buffer it flushes.
pub trait Source {
    /// Associated error type, convertible into the shared [`Error`]
    type Error: Into<Error> + core::fmt::Debug;

    /// Copy up to `buf.len()` bytes from the current position into `buf`,
    /// advancing the position by the count returned. Returns 0 at end of
    /// data; never blocks indefinitely on a finite store.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Total addressable length of the source in bytes.
    fn size(&self) -> Result<u64, Self::Error>;

    /// Reposition the cursor. Fails if `pos` is outside the store's valid
    /// range or the store is unseekable. Returns the new position.
    fn seek(&mut self, pos: u64) -> Result<u64, Self::Error>;

    /// Current cursor offset from the start of the store.
    fn position(&self) -> Result<u64, Self::Error>;
}

/// The write side of a byte store: forward-only appends plus random-access
/// reads of previously written bytes.
///
/// Separating [`write`](Sink::write) (producer-only, forward-only) from
/// [`read_back`](Sink::read_back) (consumer, random-access) lets the same
/// sink double as the response buffer calling code inspects after a
/// request completes, without a second store.
pub trait Sink {
    /// Associated error type, convertible into the shared [`Error`]
    type Error: Into<Error> + core::fmt::Debug;

    /// Append bytes at the current end of the store and return the count
    /// accepted. A fixed-capacity store accepts the prefix that fits; a
    /// return shorter than `buf.len()` signals capacity exhaustion. `Err`
    /// is reserved for underlying-resource failure.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Advise the store to pre-allocate `len` bytes. A hard check for
    /// fixed-capacity stores (fails when `len` exceeds the fixed size);
    /// best-effort and always `Ok` for growable stores.
    fn reserve(&mut self, len: usize) -> Result<(), Self::Error>;

    /// Random-access read of previously written bytes, independent of the
    /// write cursor. Copies at most `buf.len()` bytes starting at `start`
    /// and returns the count copied: a `start` beyond the written extent
    /// yields 0, and a request longer than the available data is clamped.
    /// Read-to-end is expressed by sizing `buf` from [`written`](Sink::written).
    fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Total number of bytes accepted by [`write`](Sink::write) so far.
    fn written(&self) -> u64;
}

/// Async mirror of [`Source`].
#[cfg(feature = "async")]
pub trait AsyncSource {
    /// Associated error type, convertible into the shared [`Error`]
    type Error: Into<Error> + core::fmt::Debug;

    /// Read bytes from the current position asynchronously.
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Total addressable length of the source in bytes.
    fn size(&self) -> Result<u64, Self::Error>;

    /// Reposition the cursor asynchronously.
    async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error>;

    /// Current cursor offset from the start of the store.
    fn position(&self) -> Result<u64, Self::Error>;
}

/// Async mirror of [`Sink`].
#[cfg(feature = "async")]
pub trait AsyncSink {
    /// Associated error type, convertible into the shared [`Error`]
    type Error: Into<Error> + core::fmt::Debug;

    /// Append bytes at the current end of the store asynchronously.
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Advise the store to pre-allocate `len` bytes.
    async fn reserve(&mut self, len: usize) -> Result<(), Self::Error>;

    /// Random-access read of previously written bytes.
    async fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Total number of bytes accepted so far.
    fn written(&self) -> u64;
}
