use thiserror::Error;

/// Failure signals raised by the wrapped engine itself.
///
/// The facade layer forwards these untouched; it never constructs them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NativeError {
    #[error("Entry {index} is out of range (valid entries are 1..=3)")]
    OutOfRange { index: usize },

    #[error("Index {index} is out of range for {count} units")]
    IndexOutOfRange { index: usize, count: usize },
}
