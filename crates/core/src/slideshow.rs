//! Slide carousel state machine.
//!
//! The index lives in `[0, count)` and wraps in both directions. There is no
//! terminal state.

use crate::error::Error;
use crate::result::Result;

/// Position within a non-empty, fixed sequence of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// Carousel over `count` slides, starting at the first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSlides`] when `count` is zero.
    pub const fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::NoSlides);
        }
        Ok(Self { index: 0, count })
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Advance one slide, wrapping to the first after the last.
    pub fn next(&mut self) -> usize {
        self.index = self.index.saturating_add(1).checked_rem(self.count).unwrap_or(0);
        self.index
    }

    /// Go back one slide, wrapping to the last before the first.
    pub fn prev(&mut self) -> usize {
        // (index + count - 1) mod count; index < count so this never underflows
        self.index = self
            .index
            .saturating_add(self.count)
            .saturating_sub(1)
            .checked_rem(self.count)
            .unwrap_or(0);
        self.index
    }

    /// Jump directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlideOutOfRange`] and leaves the position unchanged
    /// when `index >= count`.
    pub fn jump(&mut self, index: usize) -> Result<usize> {
        if index >= self.count {
            return Err(Error::SlideOutOfRange {
                index,
                count: self.count,
            });
        }
        self.index = index;
        Ok(index)
    }

    /// CSS transform that shows the current slide.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index.saturating_mul(100))
    }

    /// Counter text, 1-based.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.index.saturating_add(1), self.count)
    }

    /// Whether the dot at `dot` should carry the active marker.
    #[must_use]
    pub const fn is_active(&self, dot: usize) -> bool {
        dot == self.index
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn test_empty_carousel_rejected() {
        assert_eq!(Carousel::new(0), Err(Error::NoSlides));
    }

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3).expect("three slides");
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_from_first_goes_to_last() {
        let mut carousel = Carousel::new(4).expect("four slides");
        assert_eq!(carousel.prev(), 3);
        assert_eq!(carousel.prev(), 2);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut carousel = Carousel::new(1).expect("one slide");
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert_eq!(carousel.counter_text(), "1 / 1");
    }

    #[test]
    fn test_jump_out_of_range_keeps_index() {
        let mut carousel = Carousel::new(3).expect("three slides");
        carousel.next();
        assert_eq!(
            carousel.jump(3),
            Err(Error::SlideOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_render_values() {
        let mut carousel = Carousel::new(5).expect("five slides");
        assert_eq!(carousel.track_transform(), "translateX(-0%)");
        assert_eq!(carousel.counter_text(), "1 / 5");

        carousel.jump(2).expect("in range");
        assert_eq!(carousel.track_transform(), "translateX(-200%)");
        assert_eq!(carousel.counter_text(), "3 / 5");
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
    }
}
