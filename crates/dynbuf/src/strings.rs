//! Owned C-string construction from byte buffers.
//!
//! Both builders return a freshly allocated [`CString`] that shares nothing
//! with its source.

use std::ffi::CString;

use crate::buffer::DynamicBuffer;
use crate::error::BufferError;

/// Copy the live bytes `[first, last)` of `buffer` into a new string.
///
/// Fails with [`BufferError::IndexOutOfRange`] if `first > last` or `last`
/// lies past the buffer's count, and with [`BufferError::InteriorNul`] if
/// the range holds a NUL byte. An empty range yields an empty string. On
/// success `as_bytes().len() == last - first`.
pub fn from_buffer_range(
    buffer: &DynamicBuffer<u8>,
    first: usize,
    last: usize,
) -> Result<CString, BufferError> {
    if first > last {
        return Err(BufferError::IndexOutOfRange {
            index: first,
            bound: last.saturating_add(1),
        });
    }
    let bytes = buffer
        .as_slice()
        .get(first..last)
        .ok_or(BufferError::IndexOutOfRange {
            index: last,
            bound: buffer.count_items() + 1,
        })?;
    CString::new(bytes).map_err(|err| BufferError::InteriorNul {
        position: first + err.nul_position(),
    })
}

/// Copy a string into a new, independently owned `CString`.
///
/// The source is measured up to its first NUL byte, or its full length if
/// it has none.
pub fn duplicate<S: AsRef<[u8]>>(source: S) -> CString {
    until_nul(source.as_ref())
}

fn until_nul(bytes: &[u8]) -> CString {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    // The prefix holds no NUL, so construction cannot fail.
    CString::new(&bytes[..len]).unwrap_or_default()
}
