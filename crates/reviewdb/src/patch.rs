//! Partial-change payloads for targeted store updates. Every field is
//! optional; absent fields leave the stored record untouched, so a service
//! boundary can deserialize a partial JSON body straight into a patch.

use crate::{
    model::{Category, RecipientId, ReviewId, Timestamp},
    record::{IndicatorId, IndicatorRecord, ReportRecord},
};
use serde::Deserialize;

///
/// Patch
///
/// Field-merge semantics for one record type: `Some` fields overwrite,
/// `None` fields are left alone.
///

pub trait Patch {
    type Target;

    /// Merge this patch into an existing record.
    fn apply_to(&self, target: &mut Self::Target);

    /// Returns `true` if applying this patch cannot change any record.
    fn is_empty(&self) -> bool;
}

///
/// ReviewPatch
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewPatch {
    pub message: Option<String>,
    pub date: Option<Timestamp>,
    pub recipient: Option<RecipientId>,
    pub rating: Option<u8>,
    pub table_number: Option<u32>,
}

impl Patch for ReviewPatch {
    type Target = crate::model::Review;

    fn apply_to(&self, target: &mut Self::Target) {
        if let Some(message) = &self.message {
            target.message.clone_from(message);
        }
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(recipient) = self.recipient {
            target.recipient = recipient;
        }
        if let Some(rating) = self.rating {
            target.rating = rating;
        }
        if let Some(table_number) = self.table_number {
            target.table_number = table_number;
        }
    }

    fn is_empty(&self) -> bool {
        self.message.is_none()
            && self.date.is_none()
            && self.recipient.is_none()
            && self.rating.is_none()
            && self.table_number.is_none()
    }
}

///
/// IndicatorRecordPatch
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorRecordPatch {
    #[serde(rename = "type")]
    pub category: Option<Category>,
    pub growth: Option<f64>,
    pub review_ids: Option<Vec<ReviewId>>,
}

impl Patch for IndicatorRecordPatch {
    type Target = IndicatorRecord;

    fn apply_to(&self, target: &mut Self::Target) {
        if let Some(category) = self.category {
            target.category = category;
        }
        if let Some(growth) = self.growth {
            target.growth = growth;
        }
        if let Some(review_ids) = &self.review_ids {
            target.review_ids.clone_from(review_ids);
        }
    }

    fn is_empty(&self) -> bool {
        self.category.is_none() && self.growth.is_none() && self.review_ids.is_none()
    }
}

///
/// ReportRecordPatch
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportRecordPatch {
    pub review_ids: Option<Vec<ReviewId>>,
    pub indicator_ids: Option<Vec<IndicatorId>>,
}

impl Patch for ReportRecordPatch {
    type Target = ReportRecord;

    fn apply_to(&self, target: &mut Self::Target) {
        if let Some(review_ids) = &self.review_ids {
            target.review_ids.clone_from(review_ids);
        }
        if let Some(indicator_ids) = &self.indicator_ids {
            target.indicator_ids.clone_from(indicator_ids);
        }
    }

    fn is_empty(&self) -> bool {
        self.review_ids.is_none() && self.indicator_ids.is_none()
    }
}
