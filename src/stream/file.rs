//! File-backed byte stores.
//!
//! OS-level failures are surfaced as [`Error::Os`] with the raw error code
//! as payload, so diagnostics survive the trait boundary without leaking
//! platform constants into the contract.

#![deny(unsafe_code)]

use super::Error;
use super::{Sink, Source};
use std::fs::{File, OpenOptions};
use std::io::{Read as _, Seek as _, SeekFrom, Write as _};
use std::path::Path;

fn os_error(err: &std::io::Error, fallback: Error) -> Error {
    match err.raw_os_error() {
        Some(code) => Error::Os(code),
        None => fallback,
    }
}

/// A [`Source`] reading sequentially from a file.
#[derive(Debug)]
pub struct FileSource {
    file: File,
}

impl FileSource {
    /// Open `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| os_error(&e, Error::NotOpen))?;
        Ok(Self { file })
    }
}

impl Source for FileSource {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.file
            .read(buf)
            .map_err(|e| os_error(&e, Error::ReadError))
    }

    fn size(&self) -> Result<u64, Self::Error> {
        let meta = self
            .file
            .metadata()
            .map_err(|e| os_error(&e, Error::ReadError))?;
        Ok(meta.len())
    }

    fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        if pos > self.size()? {
            return Err(Error::OutOfBounds);
        }
        self.file
            .seek(SeekFrom::Start(pos))
            .map_err(|e| os_error(&e, Error::ReadError))
    }

    fn position(&self) -> Result<u64, Self::Error> {
        (&self.file)
            .stream_position()
            .map_err(|e| os_error(&e, Error::ReadError))
    }
}

/// A [`Sink`] writing sequentially to a file.
///
/// The file is opened read-write so [`read_back`](Sink::read_back) can
/// re-read written bytes through the same handle; the write cursor is
/// restored afterwards.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    written: u64,
}

impl FileSink {
    /// Create (or truncate) `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| os_error(&e, Error::NotOpen))?;
        Ok(Self { file, written: 0 })
    }
}

impl Sink for FileSink {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.file
            .write_all(buf)
            .map_err(|e| os_error(&e, Error::WriteError))?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn reserve(&mut self, _len: usize) -> Result<(), Self::Error> {
        // Growable store: the hint is a no-op.
        Ok(())
    }

    fn read_back(&self, start: u64, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if start >= self.written {
            return Ok(0);
        }
        let len = buf.len().min((self.written - start) as usize);

        let mut handle = &self.file;
        let cursor = handle
            .stream_position()
            .map_err(|e| os_error(&e, Error::ReadError))?;
        handle
            .seek(SeekFrom::Start(start))
            .map_err(|e| os_error(&e, Error::ReadError))?;
        let result = handle
            .read_exact(&mut buf[..len])
            .map_err(|e| os_error(&e, Error::ReadError));
        // Restore the write cursor even if the read failed.
        handle
            .seek(SeekFrom::Start(cursor))
            .map_err(|e| os_error(&e, Error::ReadError))?;
        result?;
        Ok(len)
    }

    fn written(&self) -> u64 {
        self.written
    }
}
