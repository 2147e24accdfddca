//! Behavioral tests for the slide carousel

#![allow(clippy::expect_used, clippy::arithmetic_side_effects)]

use learn_core::{Carousel, Error};

#[test]
fn given_n_slides_when_calling_next_n_times_then_back_at_first() {
    for count in 1..=7 {
        // Given
        let mut carousel = Carousel::new(count).expect("non-empty");

        // When
        for _ in 0..count {
            carousel.next();
        }

        // Then
        assert_eq!(carousel.index(), 0, "count = {count}");
    }
}

#[test]
fn given_first_slide_when_calling_prev_then_at_last() {
    for count in 1..=7 {
        let mut carousel = Carousel::new(count).expect("non-empty");

        carousel.prev();

        assert_eq!(carousel.index(), count - 1, "count = {count}");
    }
}

#[test]
fn given_dot_selection_when_jumping_then_exactly_one_dot_active() {
    // Given
    let mut carousel = Carousel::new(5).expect("non-empty");

    // When
    carousel.jump(3).expect("dot index is valid");

    // Then
    let active: Vec<usize> = (0..carousel.count())
        .filter(|dot| carousel.is_active(*dot))
        .collect();
    assert_eq!(active, vec![3]);
    assert_eq!(carousel.counter_text(), "4 / 5");
    assert_eq!(carousel.track_transform(), "translateX(-300%)");
}

#[test]
fn given_mixed_navigation_when_walking_then_index_stays_in_range() {
    let mut carousel = Carousel::new(3).expect("non-empty");
    let steps = [true, true, false, false, false, true, true, true, true];

    for forward in steps {
        let index = if forward { carousel.next() } else { carousel.prev() };
        assert!(index < carousel.count());
    }

    assert_eq!(carousel.index(), 0);
}

#[test]
fn given_zero_slides_when_creating_then_no_carousel() {
    assert!(matches!(Carousel::new(0), Err(Error::NoSlides)));
}
