//! Growth policies for sequences which have exceeded their available storage.

use core::fmt::Debug;

use crate::utils::min_non_zero_cap;

/// Growth behavior for sequences which have exceeded their available storage
pub trait Grow: Debug {
    /// Calculate the next capacity to request, given the previous capacity
    /// and the minimum capacity required
    fn next_capacity<T>(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which never requests extra capacity
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity<T>(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Growth behavior which consistently doubles in size
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity<T>(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 {
            min_non_zero_cap::<T>()
        } else {
            prev.saturating_mul(2)
        };
        preferred.max(minimum)
    }
}

/// Growth behavior which adds half the previous capacity, starting from
/// ten elements
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowByHalf;

impl Grow for GrowByHalf {
    #[inline]
    fn next_capacity<T>(prev: usize, minimum: usize) -> usize {
        let preferred = if prev == 0 {
            10
        } else {
            prev.saturating_add(prev >> 1)
        };
        preferred.max(minimum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_respects_minimum() {
        assert_eq!(GrowDoubling::next_capacity::<usize>(0, 1), 4);
        assert_eq!(GrowDoubling::next_capacity::<usize>(4, 5), 8);
        assert_eq!(GrowDoubling::next_capacity::<usize>(4, 20), 20);
        assert_eq!(GrowDoubling::next_capacity::<usize>(usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn by_half_sequence() {
        let mut cap = 0;
        let mut seen = [0usize; 5];
        for slot in seen.iter_mut() {
            cap = GrowByHalf::next_capacity::<usize>(cap, cap + 1);
            *slot = cap;
        }
        assert_eq!(seen, [10, 15, 22, 33, 49]);
    }

    #[test]
    fn exact_is_minimum() {
        assert_eq!(GrowExact::next_capacity::<usize>(16, 17), 17);
    }
}
