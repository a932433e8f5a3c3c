//! Derivation layer: rebuild the nested view from the flat collections, on
//! demand, re-deriving only when a declared input collection has changed.
//!
//! Joins are lenient throughout: an id that resolves to nothing is dropped
//! from the derived list, never surfaced as an error. That is the only
//! safeguard against dangling references, since removal does not cascade.

mod cache;

pub use cache::CacheStats;

use crate::{
    model::{Indicator, Report, Review, ReviewId},
    store::Store,
    view::cache::DerivationCache,
};
use std::{collections::HashMap, sync::Arc};

///
/// ViewStats
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewStats {
    pub reviews: CacheStats,
    pub indicators: CacheStats,
    pub reports: CacheStats,
}

///
/// Views
///
/// Three composed derivations, cached per instance and keyed by the version
/// tuple of the collections each one reads. A mutation of an unrelated
/// collection never forces a recompute, and an unchanged store returns the
/// identical `Arc` allocation.
///

#[derive(Debug, Default)]
pub struct Views {
    reviews: DerivationCache<u64, Vec<Review>>,
    indicators: DerivationCache<(u64, u64), Vec<Indicator>>,
    reports: DerivationCache<(u64, u64, u64), Vec<Report>>,
}

impl Views {
    /// Create a derivation layer with empty caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The review collection rendered as an ordered sequence.
    ///
    /// Order is the collection's iteration order (insertion order; not
    /// guaranteed stable across remove/re-insert cycles).
    #[must_use]
    pub fn reviews(&self, store: &Store) -> Arc<Vec<Review>> {
        self.reviews
            .get_or_compute(store.reviews().version(), || {
                store.reviews().values().cloned().collect()
            })
    }

    /// Indicator records rehydrated with full review objects.
    ///
    /// Each record's `review_ids` list is replaced by the matching reviews
    /// from the reviews view; unresolved ids are dropped.
    #[must_use]
    pub fn indicators(&self, store: &Store) -> Arc<Vec<Indicator>> {
        let key = (store.indicators().version(), store.reviews().version());

        self.indicators.get_or_compute(key, || {
            let reviews = self.reviews(store);
            let by_id: HashMap<ReviewId, &Review> =
                reviews.iter().map(|review| (review.id, review)).collect();

            store
                .indicators()
                .values()
                .map(|record| Indicator {
                    category: record.category,
                    growth: record.growth,
                    reviews: record
                        .review_ids
                        .iter()
                        .filter_map(|id| by_id.get(id).map(|&review| review.clone()))
                        .collect(),
                })
                .collect()
        })
    }

    /// Report records rehydrated into full nested reports.
    ///
    /// Review ids join leniently by id. Indicator ids join by *position*:
    /// id `k` selects the k-th element of the indicators view regardless of
    /// that element's own identifier; out-of-range positions are dropped.
    #[must_use]
    pub fn reports(&self, store: &Store) -> Arc<Vec<Report>> {
        let key = (
            store.reports().version(),
            store.indicators().version(),
            store.reviews().version(),
        );

        self.reports.get_or_compute(key, || {
            let reviews = self.reviews(store);
            let indicators = self.indicators(store);
            let by_id: HashMap<ReviewId, &Review> =
                reviews.iter().map(|review| (review.id, review)).collect();

            store
                .reports()
                .values()
                .map(|record| Report {
                    reviews: record
                        .review_ids
                        .iter()
                        .filter_map(|id| by_id.get(id).map(|&review| review.clone()))
                        .collect(),
                    indicators: record
                        .indicator_ids
                        .iter()
                        .filter_map(|id| indicators.get(id.index()).cloned())
                        .collect(),
                })
                .collect()
        })
    }

    /// Convenience accessor for the single-report case.
    #[must_use]
    pub fn report(&self, store: &Store) -> Option<Report> {
        self.reports(store).first().cloned()
    }

    /// Hit/miss counters per derivation.
    #[must_use]
    pub fn stats(&self) -> ViewStats {
        ViewStats {
            reviews: self.reviews.stats(),
            indicators: self.indicators.stats(),
            reports: self.reports.stats(),
        }
    }
}
