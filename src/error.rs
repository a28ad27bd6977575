//! Error type for the fallible edges of the crate.
//!
//! Algorithms never return errors: contract failures are debug panics and
//! capacity failures are the `try_*` variants returning `false`/`None`. The
//! only real failures come from outside memory, namely file I/O in the file
//! adapter and bad input at the command line.

use std::fmt;
use std::io;

/// Which byte-store operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    Read,
    Write,
    Resize,
    Stat,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoOp::Read => "read",
            IoOp::Write => "write",
            IoOp::Resize => "resize",
            IoOp::Stat => "stat",
        };
        f.write_str(name)
    }
}

/// Error type for adapter I/O and command-line validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// A byte-store operation failed at `offset`.
    Io {
        op: IoOp,
        offset: u64,
        kind: io::ErrorKind,
        message: String,
    },
    /// Growth would exceed the configured maximum length.
    CapacityExceeded { requested: usize, max: usize },
    /// `first..=last` is not a valid range of a container of length `len`.
    InvalidRange {
        first: usize,
        last: usize,
        len: usize,
    },
    /// `idx` does not address an element of a container of length `len`.
    InvalidIndex { idx: usize, len: usize },
    /// The input must be sorted but the pair ending at `position` is not.
    NotSorted { position: usize },
}

impl SeqError {
    pub fn io(op: IoOp, offset: u64, err: &io::Error) -> Self {
        SeqError::Io {
            op,
            offset,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::Io {
                op,
                offset,
                message,
                ..
            } => write!(f, "{} failed at offset {}: {}", op, offset, message),
            SeqError::CapacityExceeded { requested, max } => {
                write!(f, "length {} exceeds maximum {}", requested, max)
            }
            SeqError::InvalidRange { first, last, len } => {
                write!(f, "range {}..={} is not valid for length {}", first, last, len)
            }
            SeqError::InvalidIndex { idx, len } => {
                write!(f, "index {} is not valid for length {}", idx, len)
            }
            SeqError::NotSorted { position } => {
                write!(f, "input is not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for SeqError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_keeps_kind_and_offset() {
        let err = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let e = SeqError::io(IoOp::Read, 42, &err);
        assert_eq!(e.to_string(), "read failed at offset 42: short read");
        match e {
            SeqError::Io { kind, offset, .. } => {
                assert_eq!(kind, io::ErrorKind::UnexpectedEof);
                assert_eq!(offset, 42);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn range_error_formats_bounds() {
        let e = SeqError::InvalidRange {
            first: 4,
            last: 2,
            len: 6,
        };
        assert_eq!(e.to_string(), "range 4..=2 is not valid for length 6");
    }
}
