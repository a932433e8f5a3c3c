//! Pure lowering from the nested report shape to flat records. No state, no
//! I/O, no error path: malformed-but-typed input (empty lists) just yields
//! empty output.

use crate::{
    model::{Report, Review},
    record::{IndicatorId, IndicatorRecord, ReportId, ReportRecord},
};

///
/// NormalizedReport
///
/// The three flat outputs of one normalization pass, ready to commit to a
/// store as a unit.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedReport {
    pub report: ReportRecord,
    pub reviews: Vec<Review>,
    pub indicators: Vec<IndicatorRecord>,
}

/// Flatten a nested report.
///
/// Reviews are taken from the top-level list unchanged and undeduplicated
/// (the upstream contract guarantees that list is unique by id). Indicator
/// ids are their source-list positions.
#[must_use]
pub fn normalize(report: &Report) -> NormalizedReport {
    let review_ids = report.reviews.iter().map(|review| review.id).collect();

    let indicators: Vec<IndicatorRecord> = report
        .indicators
        .iter()
        .enumerate()
        .map(|(index, indicator)| IndicatorRecord {
            id: IndicatorId::from_index(index),
            category: indicator.category,
            growth: indicator.growth,
            review_ids: indicator.reviews.iter().map(|review| review.id).collect(),
        })
        .collect();

    NormalizedReport {
        report: ReportRecord {
            id: ReportId::ROOT,
            review_ids,
            indicator_ids: (0..indicators.len()).map(IndicatorId::from_index).collect(),
        },
        reviews: report.reviews.clone(),
        indicators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Indicator, RecipientId, ReviewId, Timestamp};

    fn review(id: u64) -> Review {
        Review {
            id: ReviewId::new(id),
            message: format!("review {id}"),
            date: Timestamp::from_seconds(1_700_000_000 + id),
            recipient: RecipientId::new(10 + id),
            rating: 4,
            table_number: 7,
        }
    }

    #[test]
    fn empty_report_normalizes_to_empty_lists() {
        let normalized = normalize(&Report::default());

        assert_eq!(normalized.report.id, ReportId::ROOT);
        assert!(normalized.report.review_ids.is_empty());
        assert!(normalized.report.indicator_ids.is_empty());
        assert!(normalized.reviews.is_empty());
        assert!(normalized.indicators.is_empty());
    }

    #[test]
    fn indicator_ids_are_source_positions() {
        let report = Report {
            reviews: vec![review(1), review(2)],
            indicators: vec![
                Indicator {
                    category: Category::Good,
                    growth: 1.5,
                    reviews: vec![review(2)],
                },
                Indicator {
                    category: Category::Worst,
                    growth: -3.0,
                    reviews: vec![review(1)],
                },
            ],
        };

        let normalized = normalize(&report);

        let ids: Vec<_> = normalized.indicators.iter().map(|rec| rec.id).collect();
        assert_eq!(ids, vec![IndicatorId::new(0), IndicatorId::new(1)]);
        assert_eq!(normalized.report.indicator_ids, ids);
    }

    #[test]
    fn order_of_id_lists_follows_source_order() {
        let report = Report {
            reviews: vec![review(3), review(1), review(2)],
            indicators: vec![Indicator {
                category: Category::Normal,
                growth: 0.0,
                reviews: vec![review(2), review(3)],
            }],
        };

        let normalized = normalize(&report);

        assert_eq!(
            normalized.report.review_ids,
            vec![ReviewId::new(3), ReviewId::new(1), ReviewId::new(2)]
        );
        assert_eq!(
            normalized.indicators[0].review_ids,
            vec![ReviewId::new(2), ReviewId::new(3)]
        );
    }

    #[test]
    fn normalize_is_value_deterministic() {
        let report = Report {
            reviews: vec![review(1)],
            indicators: vec![Indicator {
                category: Category::Excellent,
                growth: 12.5,
                reviews: vec![review(1)],
            }],
        };

        assert_eq!(normalize(&report), normalize(&report));
    }
}
