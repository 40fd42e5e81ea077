//! Common error type for stream operations

/// A common error type for byte-stream operations.
///
/// One enum covers every backing store so callers can hold stream errors
/// without caring which store produced them. It is simple and portable for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a store whose underlying resource is
    /// not open or usable.
    NotOpen,
    /// An error occurred during a read operation.
    ReadError,
    /// An error occurred during a write operation.
    WriteError,
    /// A reservation asked for more space than a fixed-capacity store has.
    CapacityExceeded,
    /// A seek targeted a position outside the store's valid range.
    OutOfBounds,
    /// The store does not support the requested operation.
    Unsupported,
    /// The operating system reported a failure; the payload is the raw OS
    /// error code.
    Os(i32),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::CapacityExceeded => defmt::write!(f, "CapacityExceeded"),
            Error::OutOfBounds => defmt::write!(f, "OutOfBounds"),
            Error::Unsupported => defmt::write!(f, "Unsupported"),
            Error::Os(code) => defmt::write!(f, "Os({})", code),
        }
    }
}
