//! Contiguous growable buffer with a cursor.
//!
//! A [`DynamicBuffer`] owns one block of `capacity_items()` slots. The
//! cursor marks the end of the logically used region: slots before it are
//! live elements, slots after it are allocated but unused. Inserts and
//! removes shift the live region in place; a full buffer grows by the
//! configured factor before accepting another element.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace, warn};

use crate::config::{BufferConfig, InitialCapacity};
use crate::error::BufferError;

/// A growable array of fixed-size elements with an explicit cursor.
///
/// Unlike `Vec`, capacity is exact and observable: every allocated slot
/// holds an initialised value (zero/default on allocation), and the cursor
/// can be repositioned anywhere inside the allocation with [`seek`].
///
/// References handed out by [`get`], [`get_mut`] and [`as_slice`] borrow
/// the buffer, so a reallocating call (`insert` on a full buffer,
/// `reserve`) cannot run while they are alive.
///
/// [`seek`]: DynamicBuffer::seek
/// [`get`]: DynamicBuffer::get
/// [`get_mut`]: DynamicBuffer::get_mut
/// [`as_slice`]: DynamicBuffer::as_slice
#[derive(Clone)]
pub struct DynamicBuffer<T> {
    /// Backing storage. `data.len()` is the capacity in items; empty means
    /// unallocated.
    data: Vec<T>,
    /// Items logically in use. Always `<= data.len()`.
    cursor: usize,
    /// Capacity multiplier applied when an insert finds the buffer full.
    growth_factor: usize,
}

impl<T: Copy + Default> DynamicBuffer<T> {
    /// Byte size of one element. Zero-sized element types fail to compile
    /// at the first construction site.
    const ELEMENT_SIZE: usize = {
        assert!(
            mem::size_of::<T>() > 0,
            "DynamicBuffer does not support zero-sized elements"
        );
        mem::size_of::<T>()
    };

    /// Create an unallocated buffer with the default growth factor.
    pub fn new() -> Self {
        let _ = Self::ELEMENT_SIZE;
        Self {
            data: Vec::new(),
            cursor: 0,
            growth_factor: BufferConfig::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Create a buffer, allocating [`BufferConfig::DEFAULT_ITEMS`] zeroed
    /// slots when `reserve_default` is set.
    pub fn create(reserve_default: bool) -> Result<Self, BufferError> {
        Self::create_with_capacity(BufferConfig::DEFAULT_ITEMS, reserve_default)
    }

    /// Create a buffer, allocating `items` zeroed slots when `allocate` is
    /// set. A zero item count leaves the buffer unallocated.
    pub fn create_with_capacity(items: usize, allocate: bool) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        if allocate {
            buffer.reserve(items)?;
        }
        Ok(buffer)
    }

    /// Create a buffer from a validated configuration.
    pub fn from_config(config: &BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        let mut buffer = Self::new();
        buffer.growth_factor = config.growth_factor;
        if config.initial != InitialCapacity::None {
            buffer.reserve(config.initial.items())?;
        }
        Ok(buffer)
    }

    /// Byte size of one element.
    pub fn element_size(&self) -> usize {
        Self::ELEMENT_SIZE
    }

    /// Allocated slots.
    pub fn capacity_items(&self) -> usize {
        self.data.len()
    }

    /// Allocated bytes. Always a multiple of [`element_size`](Self::element_size).
    pub fn capacity_bytes(&self) -> usize {
        self.data.len() * Self::ELEMENT_SIZE
    }

    /// Number of live elements (the cursor position in items).
    pub fn count_items(&self) -> usize {
        self.cursor
    }

    /// Cursor position in bytes.
    pub fn cursor_bytes(&self) -> usize {
        self.cursor * Self::ELEMENT_SIZE
    }

    /// Whether the buffer owns a backing block.
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Capacity multiplier applied on growth.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// The live elements, `[0, count_items())`.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.cursor]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.cursor]
    }

    /// Free the backing block and return to the unallocated state.
    ///
    /// Returns `true` if a block was freed, `false` if there was nothing to
    /// free. Dropping the buffer frees the block as well; calling this first
    /// is only needed to give memory back early.
    pub fn release(&mut self) -> bool {
        if !self.is_allocated() {
            return false;
        }
        trace!(
            items = self.data.len(),
            element_size = Self::ELEMENT_SIZE,
            "buffer released"
        );
        self.data = Vec::new();
        self.cursor = 0;
        true
    }

    /// Resize the backing block to hold exactly `items` slots.
    ///
    /// Growing zero-fills the new slots. Shrinking drops the trailing slots
    /// and clamps the cursor to the new capacity; `reserve(0)` releases the
    /// block. If the allocator refuses, the buffer is left untouched and
    /// [`BufferError::AllocationFailed`] is returned.
    pub fn reserve(&mut self, items: usize) -> Result<(), BufferError> {
        let from = self.data.len();
        match items.cmp(&from) {
            Ordering::Equal => return Ok(()),
            Ordering::Greater => {
                if let Err(err) = self.data.try_reserve_exact(items - from) {
                    warn!(
                        requested_items = items,
                        element_size = Self::ELEMENT_SIZE,
                        error = %err,
                        "buffer reservation refused"
                    );
                    return Err(BufferError::AllocationFailed {
                        requested_items: items,
                        element_size: Self::ELEMENT_SIZE,
                    });
                }
                self.data.resize(items, T::default());
            }
            Ordering::Less => {
                if items == 0 {
                    self.data = Vec::new();
                } else {
                    self.data.truncate(items);
                    self.data.shrink_to_fit();
                }
                self.cursor = self.cursor.min(items);
            }
        }
        debug!(
            from_items = from,
            to_items = items,
            element_size = Self::ELEMENT_SIZE,
            "buffer capacity changed"
        );
        Ok(())
    }

    /// Move the cursor to slot `index`.
    ///
    /// Any position up to and including the capacity is accepted, so the
    /// cursor can be placed past the current count; the slots it uncovers
    /// keep whatever they last held.
    pub fn seek(&mut self, index: usize) -> Result<(), BufferError> {
        self.ensure_allocated()?;
        if index > self.data.len() {
            return Err(BufferError::IndexOutOfRange {
                index,
                bound: self.data.len() + 1,
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Write `value` into every allocated slot, then reset the cursor to 0.
    pub fn fill_and_reset(&mut self, value: T) -> Result<(), BufferError> {
        self.ensure_allocated()?;
        self.data.fill(value);
        self.cursor = 0;
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, count)` right by one.
    ///
    /// `index == count_items()` appends. A full buffer grows by the growth
    /// factor first. An unallocated buffer never grows implicitly and fails
    /// with [`BufferError::NotAllocated`].
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), BufferError> {
        self.ensure_allocated()?;
        if index > self.cursor {
            return Err(BufferError::IndexOutOfRange {
                index,
                bound: self.cursor + 1,
            });
        }

        if self.cursor == self.data.len() {
            self.grow()?;
        }
        // Defensive: growth and the write are separate steps.
        self.ensure_free_slot()?;

        self.data.copy_within(index..self.cursor, index + 1);
        self.data[index] = value;
        self.cursor += 1;
        Ok(())
    }

    /// Append `value` after the last live element.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.insert(value, self.cursor)
    }

    /// Overwrite the live element at `index`.
    pub fn replace(&mut self, value: T, index: usize) -> Result<(), BufferError> {
        self.ensure_allocated()?;
        if index >= self.cursor {
            return Err(BufferError::IndexOutOfRange {
                index,
                bound: self.cursor,
            });
        }
        self.data[index] = value;
        Ok(())
    }

    /// Overwrite `values.len()` consecutive slots starting at the live
    /// element `index`.
    ///
    /// The run may extend past the cursor into unused capacity but not past
    /// the allocation. The cursor does not move.
    pub fn replace_raw(&mut self, values: &[T], index: usize) -> Result<(), BufferError> {
        self.ensure_allocated()?;
        if index >= self.cursor {
            return Err(BufferError::IndexOutOfRange {
                index,
                bound: self.cursor,
            });
        }
        let end = index
            .checked_add(values.len())
            .filter(|&end| end <= self.data.len())
            .ok_or(BufferError::CapacityExceeded {
                requested: index.saturating_add(values.len()),
                capacity: self.data.len(),
            })?;
        self.data[index..end].copy_from_slice(values);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, BufferError> {
        self.ensure_allocated()?;
        if index >= self.cursor {
            return Err(BufferError::IndexOutOfRange {
                index,
                bound: self.cursor,
            });
        }
        let removed = self.data[index];
        self.data.copy_within(index + 1..self.cursor, index);
        self.cursor -= 1;
        Ok(removed)
    }

    /// The live element at `index`, or `None` past the cursor.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The live element at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Sort the live elements with a three-way comparator.
    ///
    /// The sort is unstable. Slots past the cursor are not touched.
    pub fn sort_in_place<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    fn ensure_allocated(&self) -> Result<(), BufferError> {
        if self.is_allocated() {
            Ok(())
        } else {
            Err(BufferError::NotAllocated)
        }
    }

    fn ensure_free_slot(&self) -> Result<(), BufferError> {
        if self.cursor < self.data.len() {
            Ok(())
        } else {
            Err(BufferError::AllocationFailed {
                requested_items: self.cursor + 1,
                element_size: Self::ELEMENT_SIZE,
            })
        }
    }

    fn grow(&mut self) -> Result<(), BufferError> {
        let target = self
            .data
            .len()
            .checked_mul(self.growth_factor)
            .ok_or_else(|| {
                warn!(
                    items = self.data.len(),
                    growth_factor = self.growth_factor,
                    "buffer growth overflows usize"
                );
                BufferError::AllocationFailed {
                    requested_items: usize::MAX,
                    element_size: Self::ELEMENT_SIZE,
                }
            })?;
        self.reserve(target)
    }
}

impl<T: Copy + Default> Default for DynamicBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBuffer")
            .field("items", &&self.data[..self.cursor])
            .field("capacity_items", &self.data.len())
            .field("growth_factor", &self.growth_factor)
            .finish()
    }
}
