//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// An element index fell outside the range the operation accepts.
    IndexOutOfRange {
        /// The rejected index, in elements.
        index: usize,
        /// The exclusive upper bound the index was checked against.
        bound: usize,
    },
    /// The buffer holds no backing allocation.
    ///
    /// Call [`DynamicBuffer::reserve`](crate::DynamicBuffer::reserve) with a
    /// positive item count first.
    NotAllocated,
    /// The allocator refused to provide the requested block. The buffer
    /// keeps its previous block and metadata.
    AllocationFailed {
        /// Item count the buffer tried to reserve.
        requested_items: usize,
        /// Byte size of one element.
        element_size: usize,
    },
    /// A raw overwrite would run past the end of the allocated block.
    CapacityExceeded {
        /// One past the last slot the write would touch.
        requested: usize,
        /// Allocated slots.
        capacity: usize,
    },
    /// A byte range meant for a C string contains a NUL byte.
    InteriorNul {
        /// Buffer index of the first NUL byte.
        position: usize,
    },
    /// A [`BufferConfig`](crate::BufferConfig) failed validation.
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: &'static str,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range for bound {bound}")
            }
            Self::NotAllocated => write!(f, "buffer has no backing allocation"),
            Self::AllocationFailed {
                requested_items,
                element_size,
            } => {
                write!(
                    f,
                    "allocation failed: requested {requested_items} items of {element_size} bytes"
                )
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "buffer capacity exceeded: write ends at slot {requested}, capacity {capacity} slots"
                )
            }
            Self::InteriorNul { position } => {
                write!(f, "byte range holds a NUL at index {position}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid buffer config: {reason}"),
        }
    }
}

impl Error for BufferError {}
