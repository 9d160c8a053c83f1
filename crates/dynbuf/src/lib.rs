//! Growable contiguous buffers with an explicit cursor.
//!
//! A [`DynamicBuffer`] stores fixed-size elements in one block and keeps
//! two numbers apart: how many slots are allocated (capacity) and how many
//! are logically in use (the cursor). It provides array-list operations
//! (append, indexed insert and remove, fill, sort) with amortised O(1)
//! appends through capacity doubling.
//!
//! # Architecture
//!
//! ```text
//! DynamicBuffer<T>
//! ├── Vec<T> backing block (len == capacity, every slot initialised)
//! ├── cursor (live element count, <= capacity)
//! └── growth factor (from BufferConfig, default 2)
//!
//! strings (free functions)
//! ├── from_buffer_range  DynamicBuffer<u8> range -> CString
//! └── duplicate          bytes -> CString
//! ```
//!
//! # States
//!
//! A buffer is either **unallocated** (capacity 0) or **allocated**.
//! [`DynamicBuffer::reserve`] with a positive count is the only way in;
//! [`DynamicBuffer::release`] (or `reserve(0)`) is the way out. Element
//! operations on an unallocated buffer fail with
//! [`BufferError::NotAllocated`]; in particular a buffer never grows from
//! zero on its own.
//!
//! # Safety
//!
//! No `unsafe`. All slots are initialised with `T::default()` when
//! allocated, and allocation failures surface as
//! [`BufferError::AllocationFailed`] through `Vec::try_reserve_exact`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod strings;

// Public re-exports for the primary API surface.
pub use buffer::DynamicBuffer;
pub use config::{BufferConfig, InitialCapacity};
pub use error::BufferError;
