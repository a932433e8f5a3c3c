//! Orchestration façade: one owned value holding the store and its
//! derivation layer, so callers sequence fetch → ingest → read without
//! touching either half directly.
//!
//! The network fetch stays outside this crate; `ingest` consumes the
//! already-resolved nested report value.

use crate::{
    model::{Indicator, Report, Review},
    normalize::normalize,
    store::{Store, StoreMetrics},
    view::{ViewStats, Views},
};
use std::sync::Arc;

///
/// Session
///

#[derive(Debug, Default)]
pub struct Session {
    store: Store,
    views: Views,
}

impl Session {
    /// Create a session with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a nested report and commit it, as one synchronous unit.
    pub fn ingest(&mut self, report: &Report) {
        self.store.commit(normalize(report));
    }

    /// Ordered sequence of all stored reviews.
    #[must_use]
    pub fn reviews(&self) -> Arc<Vec<Review>> {
        self.views.reviews(&self.store)
    }

    /// Indicators rehydrated with their review objects.
    #[must_use]
    pub fn indicators(&self) -> Arc<Vec<Indicator>> {
        self.views.indicators(&self.store)
    }

    /// All stored reports rehydrated into nested form.
    #[must_use]
    pub fn reports(&self) -> Arc<Vec<Report>> {
        self.views.reports(&self.store)
    }

    /// The single-report convenience view.
    #[must_use]
    pub fn report(&self) -> Option<Report> {
        self.views.report(&self.store)
    }

    /// Direct read access to the flat state.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Direct write access to the flat state.
    pub const fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Store mutation counters.
    #[must_use]
    pub const fn metrics(&self) -> StoreMetrics {
        self.store.metrics()
    }

    /// Derivation cache counters.
    #[must_use]
    pub fn view_stats(&self) -> ViewStats {
        self.views.stats()
    }
}
