//! Shared report fixtures for reviewdb test surfaces.

use reviewdb::prelude::*;

/// Build a review with deterministic filler fields.
#[must_use]
pub fn review(id: u64, rating: u8, message: &str) -> Review {
    Review {
        id: ReviewId::new(id),
        message: message.to_string(),
        date: Timestamp::from_seconds(1_714_560_000 + id),
        recipient: RecipientId::new(100 + id),
        rating,
        table_number: 12,
    }
}

/// Build an indicator embedding the given reviews in full.
#[must_use]
pub fn indicator(category: Category, growth: f64, reviews: Vec<Review>) -> Indicator {
    Indicator {
        category,
        growth,
        reviews,
    }
}

/// Two reviews, two single-review indicators: the smallest report that
/// exercises every join in the derivation layer.
///
/// Review 1 (rating 5) sits in the EXCELLENT bucket, review 2 (rating 4) in
/// the GOOD bucket.
#[must_use]
pub fn two_indicator_report() -> Report {
    let first = review(1, 5, "outstanding service");
    let second = review(2, 4, "solid meal");

    Report {
        reviews: vec![first.clone(), second.clone()],
        indicators: vec![
            indicator(Category::Excellent, 12.5, vec![first]),
            indicator(Category::Good, -2.0, vec![second]),
        ],
    }
}

/// A report where one review is embedded by several indicators, so the
/// nested form duplicates it while the flat form must not.
#[must_use]
pub fn shared_review_report() -> Report {
    let shared = review(7, 3, "average night");
    let other = review(8, 2, "cold food");

    Report {
        reviews: vec![shared.clone(), other.clone()],
        indicators: vec![
            indicator(Category::Normal, 0.5, vec![shared.clone(), other]),
            indicator(Category::Worst, -8.0, vec![shared]),
        ],
    }
}
