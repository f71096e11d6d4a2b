use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result, io
};

pub type Result<T> = result::Result<T, ErrorType>;

#[derive(Debug)]
/// Enum with all possible errors that could occur while working with views.
pub enum ErrorType {
    /// a requested range does not fit into the backing buffer
    RangeError { offset: usize, length: usize, size: usize },
    /// an element access outside of `[0, length)`
    IndexError { index: usize, length: usize },
    /// the operation is not supported by this view, e.g. pinning an empty view
    UnsupportedError(String),
    IOError(io::Error),
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::RangeError { offset, length, size } => write!(
                fmt,
                "Range of length {} at offset {} does not fit into buffer of size {}.",
                length,
                offset,
                size
            ),
            ErrorType::IndexError { index, length } => write!(
                fmt,
                "Index {} is out of range for view of length {}.",
                index,
                length
            ),
            ErrorType::UnsupportedError(reason) => write!(
                fmt,
                "Unsupported operation: {}",
                reason
            ),
            ErrorType::IOError(e) => write!(
                fmt,
                "An IO Error occurred, Reason: {:?}.",
                e
            ),
        }
    }
}

impl Error for ErrorType {}

impl From<io::Error> for ErrorType {
    fn from(inner: io::Error) -> ErrorType {
        ErrorType::IOError(inner)
    }
}
