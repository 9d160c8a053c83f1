//! Benchmark fixtures for the dynbuf crate.
//!
//! Provides deterministic inputs for the criterion benches:
//!
//! - [`random_values`]: seeded pseudo-random `u32` sequence
//! - [`filled_buffer`]: a [`DynamicBuffer`] preloaded with those values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynbuf::{BufferError, DynamicBuffer};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` pseudo-random values from a ChaCha8 stream seeded with `seed`.
///
/// Identical seeds produce identical sequences.
pub fn random_values(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32()).collect()
}

/// A buffer holding `len` values from [`random_values`], allocated with the
/// default capacity and grown by appends.
pub fn filled_buffer(len: usize, seed: u64) -> Result<DynamicBuffer<u32>, BufferError> {
    let mut buf = DynamicBuffer::create(true)?;
    for v in random_values(len, seed) {
        buf.push(v)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        assert_eq!(random_values(64, 7), random_values(64, 7));
        assert_ne!(random_values(64, 7), random_values(64, 8));
    }

    #[test]
    fn filled_buffer_has_requested_len() {
        let buf = filled_buffer(1000, 1).unwrap();
        assert_eq!(buf.count_items(), 1000);
        assert_eq!(buf.capacity_items(), 1024);
        assert_eq!(buf.as_slice(), random_values(1000, 1).as_slice());
    }
}
