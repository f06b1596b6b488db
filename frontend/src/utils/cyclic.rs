//! Index arithmetic over a ring of `len` slots.
//!
//! Every "wrap past the end" navigation in the site goes through here, so
//! the lightbox arrows and anything else cycling through a list agree on
//! what happens at the edges.

/// Index after `i`, wrapping from the last slot back to 0.
pub fn next_index(i: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (i % len + 1) % len
}

/// Index before `i`, wrapping from 0 to the last slot.
pub fn prev_index(i: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (i % len + len - 1) % len
}

pub fn checked_index(k: usize, len: usize) -> Option<usize> {
    (k < len).then_some(k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_after_last() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn prev_wraps_before_first() {
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=7 {
            let mut i = 0;
            for _ in 0..len {
                i = next_index(i, len);
            }
            assert_eq!(i, 0, "len {}", len);

            for _ in 0..len {
                i = prev_index(i, len);
            }
            assert_eq!(i, 0, "len {}", len);
        }
    }

    #[test]
    fn single_slot_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn empty_ring_is_zero() {
        assert_eq!(next_index(4, 0), 0);
        assert_eq!(prev_index(4, 0), 0);
    }

    #[test]
    fn checked_index_rejects_out_of_range() {
        assert_eq!(checked_index(2, 3), Some(2));
        assert_eq!(checked_index(3, 3), None);
        assert_eq!(checked_index(0, 0), None);
    }
}
