#[cfg(feature = "std")]
use thiserror::Error;

/// Errors surfaced by [`NodeList`](crate::NodeList).
///
/// Mutations rejected because of the list's mode are not errors; they are
/// silently dropped. Only bad indices and undersized copy targets fail.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the valid range for the list's current length.
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of range for length {len}")
    )]
    OutOfRange { index: usize, len: usize },

    /// `copy_to` target cannot hold `len` elements starting at `offset`.
    #[cfg_attr(
        feature = "std",
        error("Cannot copy {len} elements at offset {offset} into a slice of length {capacity}")
    )]
    CopyOutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ListError::OutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
            ListError::CopyOutOfRange {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "Cannot copy {} elements at offset {} into a slice of length {}",
                len, offset, capacity
            ),
        }
    }
}

pub type Result<T> = core::result::Result<T, ListError>;
