//! Memory-backed byte stores.
//!
//! [`MemorySource`] reads from a borrowed slice, [`MemorySink`] writes into
//! an owned fixed-capacity buffer, and [`VecSink`] (with the `std` feature)
//! writes into a growable buffer. The fixed-capacity sink is the store of
//! choice when the response body must land in pre-allocated memory; writes
//! beyond its capacity are clipped, never reallocated.

#![deny(unsafe_code)]

use super::Error;
use super::{Sink, Source};
use heapless::Vec;

/// A seekable [`Source`] over a borrowed byte slice.
#[derive(Debug)]
pub struct MemorySource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MemorySource<'a> {
    /// Create a source reading from `data`, positioned at the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl Source for MemorySource<'_> {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(self.remaining());
        buf[..len].copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;
        Ok(len)
    }

    fn size(&self) -> Result<u64, Self::Error> {
        Ok(self.data.len() as u64)
    }

    fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        if pos > self.data.len() as u64 {
            return Err(Error::OutOfBounds);
        }
        self.pos = pos as usize;
        Ok(pos)
    }

    fn position(&self) -> Result<u64, Self::Error> {
        Ok(self.pos as u64)
    }
}

/// A fixed-capacity [`Sink`] over an owned buffer of `N` bytes.
///
/// Writes that do not fit are clipped to the remaining capacity and the
/// short count is returned; [`reserve`](Sink::reserve) fails outright when
/// asked for more than `N` bytes.
#[derive(Debug, Default)]
pub struct MemorySink<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> MemorySink<N> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// The bytes written so far, in write order.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Fixed capacity of the store in bytes.
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Sink for MemorySink<N> {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let len = buf.len().min(N - self.buf.len());
        // Cannot fail: len is clipped to the remaining capacity.
        let _ = self.buf.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn reserve(&mut self, len: usize) -> Result<(), Self::Error> {
        if len > N {
            return Err(Error::CapacityExceeded);
        }
        Ok(())
    }

    fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let written = self.buf.len() as u64;
        if start >= written {
            return Ok(0);
        }
        let start = start as usize;
        let len = buf.len().min(self.buf.len() - start);
        buf[..len].copy_from_slice(&self.buf[start..start + len]);
        Ok(len)
    }

    fn written(&self) -> u64 {
        self.buf.len() as u64
    }
}

/// A growable [`Sink`] over a heap-allocated buffer.
///
/// Writes never fail on capacity; [`reserve`](Sink::reserve) is a
/// best-effort pre-allocation hint.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct VecSink {
    buf: std::vec::Vec<u8>,
}

#[cfg(feature = "std")]
impl VecSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self {
            buf: std::vec::Vec::new(),
        }
    }

    /// The bytes written so far, in write order.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the sink and return the accumulated buffer.
    pub fn into_inner(self) -> std::vec::Vec<u8> {
        self.buf
    }
}

#[cfg(feature = "std")]
impl Sink for VecSink {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn reserve(&mut self, len: usize) -> Result<(), Self::Error> {
        self.buf.reserve(len);
        Ok(())
    }

    fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if start >= self.buf.len() as u64 {
            return Ok(0);
        }
        let start = start as usize;
        let len = buf.len().min(self.buf.len() - start);
        buf[..len].copy_from_slice(&self.buf[start..start + len]);
        Ok(len)
    }

    fn written(&self) -> u64 {
        self.buf.len() as u64
    }
}

#[cfg(feature = "async")]
mod async_impls {
    use super::*;
    use crate::stream::{AsyncSink, AsyncSource};

    // The synchronous implementations never block, so the async mirrors
    // delegate directly.

    impl AsyncSource for MemorySource<'_> {
        type Error = Error;

        async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            Source::read(self, buf)
        }

        fn size(&self) -> Result<u64, Self::Error> {
            Source::size(self)
        }

        async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
            Source::seek(self, pos)
        }

        fn position(&self) -> Result<u64, Self::Error> {
            Source::position(self)
        }
    }

    impl<const N: usize> AsyncSink for MemorySink<N> {
        type Error = Error;

        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            Sink::write(self, buf)
        }

        async fn reserve(&mut self, len: usize) -> Result<(), Self::Error> {
            Sink::reserve(self, len)
        }

        async fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
            Sink::read_back(self, start, buf)
        }

        fn written(&self) -> u64 {
            Sink::written(self)
        }
    }

    #[cfg(feature = "std")]
    impl AsyncSink for VecSink {
        type Error = Error;

        async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            Sink::write(self, buf)
        }

        async fn reserve(&mut self, len: usize) -> Result<(), Self::Error> {
            Sink::reserve(self, len)
        }

        async fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
            Sink::read_back(self, start, buf)
        }

        fn written(&self) -> u64 {
            Sink::written(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_reads_advance_position() {
        let mut src = MemorySource::new(b"abcdef");
        let mut buf = [0u8; 4];
        assert_eq!(src.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(src.position().unwrap(), 4);
        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ef");
        assert_eq!(src.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn source_seek_bounds() {
        let mut src = MemorySource::new(b"abc");
        assert_eq!(src.seek(3).unwrap(), 3);
        assert_eq!(src.seek(4), Err(Error::OutOfBounds));
        assert_eq!(src.size().unwrap(), 3);
    }

    #[test]
    fn sink_clips_to_capacity() {
        let mut sink = MemorySink::<4>::new();
        assert_eq!(sink.write(b"hello").unwrap(), 4);
        assert_eq!(sink.as_slice(), b"hell");
        assert_eq!(sink.write(b"x").unwrap(), 0);
    }

    #[test]
    fn sink_reserve_is_a_hard_check() {
        let mut sink = MemorySink::<8>::new();
        assert_eq!(sink.reserve(8), Ok(()));
        assert_eq!(sink.reserve(9), Err(Error::CapacityExceeded));
    }

    #[test]
    fn read_back_clamps_and_tolerates_far_start() {
        let mut sink = MemorySink::<16>::new();
        sink.write(b"abcdef").unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(sink.read_back(2, &mut buf).unwrap(), 4);
        assert_eq!(&buf[..4], b"cdef");
        assert_eq!(sink.read_back(100, &mut buf).unwrap(), 0);
    }
}
