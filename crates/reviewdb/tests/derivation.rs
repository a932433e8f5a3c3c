//! Derivation-layer contracts: memoization boundaries, lenient joins,
//! positional indicator selection, and propagation of targeted updates.

use reviewdb::{patch::ReviewPatch, prelude::*, record::Record};
use reviewdb_fixtures::{review, two_indicator_report};
use std::sync::Arc;

#[test]
fn unchanged_store_returns_the_identical_derived_value() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());

    let first = session.reports();
    let second = session.reports();

    assert!(Arc::ptr_eq(&first, &second));

    let stats = session.view_stats();
    assert_eq!(stats.reports.misses, 1);
    assert_eq!(stats.reports.hits, 1);
}

#[test]
fn mutation_of_an_input_collection_forces_recompute() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());

    let before = session.reviews();
    session
        .store_mut()
        .reviews_mut()
        .insert_one(review(3, 1, "late arrival"));
    let after = session.reviews();

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 3);
}

#[test]
fn unrelated_collection_changes_do_not_force_recompute() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());

    let indicators_before = session.indicators();
    let reviews_before = session.reviews();

    // Touch only the report collection.
    session.store_mut().reports_mut().insert_one(ReportRecord {
        id: ReportId::new(1),
        review_ids: vec![],
        indicator_ids: vec![],
    });

    assert!(Arc::ptr_eq(&indicators_before, &session.indicators()));
    assert!(Arc::ptr_eq(&reviews_before, &session.reviews()));
    assert_eq!(session.view_stats().indicators.misses, 1);

    // A review change invalidates the composed indicator view.
    session
        .store_mut()
        .reviews_mut()
        .remove_one(ReviewId::new(2));
    assert!(!Arc::ptr_eq(&indicators_before, &session.indicators()));
}

#[test]
fn review_updates_propagate_into_indicator_views_without_a_second_write() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());

    let patch = ReviewPatch {
        message: Some("revised wording".to_string()),
        ..ReviewPatch::default()
    };
    session
        .store_mut()
        .reviews_mut()
        .update_one(ReviewId::new(1), &patch)
        .unwrap();

    let reviews = session.reviews();
    assert_eq!(reviews[0].message, "revised wording");

    let indicators = session.indicators();
    let excellent = indicators
        .iter()
        .find(|indicator| indicator.category == Category::Excellent)
        .unwrap();
    assert_eq!(excellent.reviews[0].message, "revised wording");
}

#[test]
fn missing_review_ids_are_dropped_from_the_indicator_view() {
    let mut store = Store::new();
    let views = Views::new();

    store.reviews_mut().insert_one(review(1, 5, "kept"));
    store.indicators_mut().insert_one(IndicatorRecord {
        id: IndicatorId::new(0),
        category: Category::Good,
        growth: 3.0,
        review_ids: vec![ReviewId::new(1), ReviewId::new(42)],
    });

    let indicators = views.indicators(&store);

    assert_eq!(indicators.len(), 1);
    assert_eq!(indicators[0].reviews.len(), 1);
    assert_eq!(indicators[0].reviews[0].id, ReviewId::new(1));
}

#[test]
fn report_indicator_ids_select_by_position_not_stored_identifier() {
    let mut store = Store::new();
    let views = Views::new();

    // Stored identifiers deliberately disagree with positions.
    store.indicators_mut().insert_many(vec![
        IndicatorRecord {
            id: IndicatorId::new(5),
            category: Category::Worst,
            growth: -1.0,
            review_ids: vec![],
        },
        IndicatorRecord {
            id: IndicatorId::new(9),
            category: Category::Excellent,
            growth: 4.0,
            review_ids: vec![],
        },
    ]);
    store.reports_mut().insert_one(ReportRecord {
        id: ReportId::ROOT,
        review_ids: vec![],
        // Position 1 and an out-of-range position.
        indicator_ids: vec![IndicatorId::new(1), IndicatorId::new(7)],
    });

    let reports = views.reports(&store);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].indicators.len(), 1);
    assert_eq!(reports[0].indicators[0].category, Category::Excellent);
}

#[test]
fn removing_a_review_leaves_references_behind_and_reads_stay_lenient() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());

    session
        .store_mut()
        .reviews_mut()
        .remove_one(ReviewId::new(1));

    // The id lists still carry the dangling reference.
    let record = session
        .store()
        .reports()
        .get(&ReportId::ROOT)
        .unwrap()
        .clone();
    assert!(record.review_ids.contains(&ReviewId::new(1)));
    let excellent = session
        .store()
        .indicators()
        .get(&IndicatorId::new(0))
        .unwrap()
        .clone();
    assert!(excellent.review_ids.contains(&ReviewId::new(1)));
    assert_eq!(excellent.key(), IndicatorId::new(0));

    // Reads drop it silently.
    let report = session.report().unwrap();
    assert_eq!(report.reviews.len(), 1);
    assert!(report.indicators[0].reviews.is_empty());
}

#[test]
fn metrics_count_commits_and_collection_ops() {
    let mut session = Session::new();
    session.ingest(&two_indicator_report());
    session.ingest(&two_indicator_report());

    let metrics = session.metrics();
    assert_eq!(metrics.commits, 2);
    assert_eq!(metrics.reviews.inserts, 4);
    assert_eq!(metrics.reports.inserts, 2);
    assert_eq!(session.store().reports().len(), 1);
}
