//! Error handling.

use core::fmt;
use std::collections::TryReserveError;
use std::io;

/// An enumeration of error types raised by sequence storage
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed
    AllocError,
    /// The requested capacity cannot be represented
    CapacityLimit,
    /// An element index was outside the bounds of the sequence
    IndexOutOfBounds,
}

impl StorageError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::IndexOutOfBounds => "Invalid element index",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self.as_str());
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TryReserveError> for StorageError {
    // the error kind is not inspectable on stable
    fn from(_err: TryReserveError) -> Self {
        Self::AllocError
    }
}

impl std::error::Error for StorageError {}

/// An error raised by insertion and update operations when appropriate
/// storage was not available. Includes the value that was to be stored.
#[derive(Clone)]
pub struct InsertionError<T> {
    pub(crate) error: StorageError,
    pub(crate) value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Insertion error"
    }

    /// Get a reference to the contained `StorageError`
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {}", self.as_str(), self.error.as_str());
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

impl<T> std::error::Error for InsertionError<T> {}

/// An error raised while running the benchmark
#[derive(Debug)]
pub enum RunError {
    /// A sequence could not provide the requested storage
    Storage(StorageError),
    /// The report could not be written
    Io(io::Error),
}

impl RunError {
    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Storage(_) => "Storage error",
            Self::Io(_) => "Output error",
        }
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self);
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{}: {}", self.as_str(), err),
            Self::Io(err) => write!(f, "{}: {}", self.as_str(), err),
        }
    }
}

impl From<StorageError> for RunError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl<T> From<InsertionError<T>> for RunError {
    fn from(err: InsertionError<T>) -> Self {
        Self::Storage(err.error)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}
