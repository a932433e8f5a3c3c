//! Flat state container: three independent, identically-shaped keyed
//! collections plus the commit path that writes one normalization pass into
//! all of them back-to-back.
//!
//! The store is an explicit value owned by its caller. Single-writer,
//! many-reader discipline falls out of the borrow checker: mutation needs
//! `&mut Store`, and readers always see the last completed commit because
//! nothing here yields mid-write.

mod map;

pub use map::RecordMap;

use crate::{
    error::StoreError,
    model::Review,
    normalize::NormalizedReport,
    patch::Patch,
    record::{IndicatorRecord, Record, ReportRecord},
};
use derive_more::Deref;
use serde::Serialize;

///
/// CollectionMetrics
///
/// Ephemeral, in-memory counters for one collection's mutation surface.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CollectionMetrics {
    pub inserts: u64,
    pub updates: u64,
    pub removes: u64,
    pub clears: u64,
    pub not_found: u64,
}

///
/// Collection
///
/// A versioned [`RecordMap`] keyed by the record's own key. The version is a
/// monotonic counter bumped by every observable mutation; derivations key
/// their caches on it. No-ops (removing an absent key, clearing an empty
/// collection, an empty patch) do not bump.
///
/// Read access derefs to the underlying map.
///

#[derive(Clone, Debug, Deref)]
pub struct Collection<R: Record> {
    #[deref]
    map: RecordMap<R::Key, R>,
    version: u64,
    metrics: CollectionMetrics,
}

// Manual impl: a derived one would demand `R: Default` for no reason.
impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            map: RecordMap::new(),
            version: 0,
            metrics: CollectionMetrics::default(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Current version; changes iff the collection's value may have changed.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Mutation counters for this collection.
    #[must_use]
    pub const fn metrics(&self) -> CollectionMetrics {
        self.metrics
    }

    /// Add a record, replacing any existing record with the same key.
    pub fn insert_one(&mut self, record: R) {
        self.map.insert(record.key(), record);
        self.metrics.inserts += 1;
        self.version += 1;
    }

    /// Batch insert; one version bump for the whole batch.
    pub fn insert_many(&mut self, records: impl IntoIterator<Item = R>) {
        let mut inserted = 0;
        for record in records {
            self.map.insert(record.key(), record);
            inserted += 1;
        }

        if inserted > 0 {
            self.metrics.inserts += inserted;
            self.version += 1;
        }
    }

    /// Merge a partial-change payload into the record for `key`.
    ///
    /// Reports [`StoreError::NotFound`] when the key is absent; callers that
    /// want the lenient no-op contract simply discard the error. An empty
    /// patch succeeds without bumping the version.
    pub fn update_one<P>(&mut self, key: R::Key, patch: &P) -> Result<(), StoreError>
    where
        P: Patch<Target = R>,
    {
        let Some(record) = self.map.get_mut(&key) else {
            self.metrics.not_found += 1;
            return Err(StoreError::not_found(key));
        };

        if patch.is_empty() {
            return Ok(());
        }

        patch.apply_to(record);
        self.metrics.updates += 1;
        self.version += 1;

        Ok(())
    }

    /// Delete the record for `key` if present; silent no-op otherwise.
    ///
    /// Does not retract the key from id lists held by other collections;
    /// the lenient join on the read side absorbs the dangling reference.
    pub fn remove_one(&mut self, key: R::Key) -> Option<R> {
        let removed = self.map.remove(&key)?;
        self.metrics.removes += 1;
        self.version += 1;

        Some(removed)
    }

    /// Empty the collection.
    pub fn clear(&mut self) {
        if self.map.is_empty() {
            return;
        }

        self.map.clear();
        self.metrics.clears += 1;
        self.version += 1;
    }
}

///
/// StoreMetrics
///
/// Point-in-time snapshot of all store counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StoreMetrics {
    pub reviews: CollectionMetrics,
    pub indicators: CollectionMetrics,
    pub reports: CollectionMetrics,
    pub commits: u64,
}

///
/// Store
///

#[derive(Clone, Debug, Default)]
pub struct Store {
    reviews: Collection<Review>,
    indicators: Collection<IndicatorRecord>,
    reports: Collection<ReportRecord>,
    commits: u64,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn reviews(&self) -> &Collection<Review> {
        &self.reviews
    }

    pub const fn reviews_mut(&mut self) -> &mut Collection<Review> {
        &mut self.reviews
    }

    #[must_use]
    pub const fn indicators(&self) -> &Collection<IndicatorRecord> {
        &self.indicators
    }

    pub const fn indicators_mut(&mut self) -> &mut Collection<IndicatorRecord> {
        &mut self.indicators
    }

    #[must_use]
    pub const fn reports(&self) -> &Collection<ReportRecord> {
        &self.reports
    }

    pub const fn reports_mut(&mut self) -> &mut Collection<ReportRecord> {
        &mut self.reports
    }

    /// Write one normalization pass into all three collections.
    ///
    /// The three writes run back-to-back with no suspension points, so no
    /// reader can observe reviews committed but indicators not yet.
    pub fn commit(&mut self, normalized: NormalizedReport) {
        self.reviews.insert_many(normalized.reviews);
        self.indicators.insert_many(normalized.indicators);
        self.reports.insert_one(normalized.report);
        self.commits += 1;
    }

    /// Empty every collection.
    pub fn clear(&mut self) {
        self.reviews.clear();
        self.indicators.clear();
        self.reports.clear();
    }

    /// Snapshot all mutation counters.
    #[must_use]
    pub const fn metrics(&self) -> StoreMetrics {
        StoreMetrics {
            reviews: self.reviews.metrics(),
            indicators: self.indicators.metrics(),
            reports: self.reports.metrics(),
            commits: self.commits,
        }
    }
}
