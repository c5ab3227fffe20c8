//! Rotation state for the testimonial carousel.
//!
//! The carousel is a single integer cursor into a fixed-length list,
//! advanced once per interval tick. The UI layer owns the interval handle
//! and must clear it when the component is torn down; this module only
//! models the cursor arithmetic.

/// Milliseconds between automatic carousel advances.
pub const ROTATION_INTERVAL_MS: u64 = 6000;

/// Cursor over a fixed-length review list. Starts at 0 and cycles forever;
/// an empty list is a degenerate case where the cursor never moves and no
/// timer should be scheduled at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Currently active position.
    pub fn index(self) -> usize {
        self.index
    }

    /// Whether the item at `position` is the one on display. Exactly one
    /// position is active for a non-empty list.
    pub fn is_active(self, position: usize) -> bool {
        self.len > 0 && position == self.index
    }

    /// Whether an interval timer should run at all. False for an empty
    /// list, which avoids the modulo-by-zero in [`advance`](Self::advance).
    pub fn should_rotate(self) -> bool {
        self.len > 0
    }

    /// Advance to the next item, wrapping at the end. No-op on an empty
    /// list.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Carousel::new(3).index(), 0);
    }

    #[test]
    fn advance_is_tick_count_mod_len() {
        let mut carousel = Carousel::new(3);
        for _ in 0..7 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn visits_every_index_in_order() {
        let mut carousel = Carousel::new(3);
        let mut visited = vec![carousel.index()];
        for _ in 0..5 {
            carousel.advance();
            visited.push(carousel.index());
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn exactly_one_active_position() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        let active: Vec<_> = (0..3).filter(|&i| carousel.is_active(i)).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn empty_list_never_rotates() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.should_rotate());
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_active(0));
    }
}
