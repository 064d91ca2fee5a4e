//! Bounded sequence generation.
//!
//! ## Purpose
//!
//! This module turns a [`RandomSource`] into a fixed-length sequence of
//! integers, each drawn from an inclusive bounds pair.
//!
//! ## Design notes
//!
//! * Generation is a plain draw loop; distribution guarantees live in the
//!   source, not here.
//! * A zero-length request yields an empty vector without touching the
//!   source.
//!
//! ## Invariants
//!
//! * The returned vector has exactly `length` elements.
//! * With a conforming source, every element lies in
//!   `[bounds.min, bounds.max]`.
//!
//! ## Visibility
//!
//! Public; the executor layer calls this on behalf of the API.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::primitives::bounds::Bounds;
use crate::sampling::source::RandomSource;

/// Draw `length` values from `source`, each within `bounds`.
///
/// # Examples
///
/// ```
/// use randmean::prelude::{Bounds, ReplaySource};
/// use randmean::sampling::uniform::sample_sequence;
///
/// let mut source = ReplaySource::new(vec![2, 4, 6]);
/// let sequence = sample_sequence(&mut source, 3, Bounds::default());
/// assert_eq!(sequence, vec![2, 4, 6]);
/// ```
pub fn sample_sequence<S: RandomSource + ?Sized>(
    source: &mut S,
    length: usize,
    bounds: Bounds,
) -> Vec<i64> {
    let mut sequence = Vec::with_capacity(length);
    for _ in 0..length {
        sequence.push(source.draw(bounds));
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::source::ReplaySource;

    #[test]
    fn produces_exactly_the_requested_length() {
        let mut source = ReplaySource::new(vec![1]);
        assert_eq!(sample_sequence(&mut source, 10, Bounds::default()).len(), 10);
    }

    #[test]
    fn zero_length_yields_an_empty_sequence() {
        let mut source = ReplaySource::new(vec![1, 2, 3]);
        let sequence = sample_sequence(&mut source, 0, Bounds::default());
        assert!(sequence.is_empty());
    }

    #[test]
    fn replays_a_script_verbatim() {
        let mut source = ReplaySource::new(vec![4, 77, 12, 99, 3]);
        let sequence = sample_sequence(&mut source, 5, Bounds::default());
        assert_eq!(sequence, vec![4, 77, 12, 99, 3]);
    }

    #[test]
    fn degenerate_bounds_pin_every_draw() {
        use crate::sampling::source::SeededSource;

        let bounds = Bounds::new(7, 7);
        let mut source = SeededSource::new(123);
        let sequence = sample_sequence(&mut source, 20, bounds);
        assert!(sequence.iter().all(|&v| v == 7));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sampling::source::SeededSource;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_draw_lands_within_bounds(
            seed in any::<u64>(),
            length in 0usize..=64,
            min in -1000i64..=1000,
            span in 0i64..=2000,
        ) {
            let bounds = Bounds::new(min, min + span);
            let mut source = SeededSource::new(seed);
            let sequence = sample_sequence(&mut source, length, bounds);

            prop_assert_eq!(sequence.len(), length);
            prop_assert!(sequence.iter().all(|&v| bounds.contains(v)));
        }
    }
}
