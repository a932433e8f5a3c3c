//! Flat (normalized) record model: every entity once, keyed by identifier,
//! with relationships expressed as ordered id lists.

use crate::model::{Category, ReviewId};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

///
/// Record
///
/// The seam store collections are generic over: anything with an extractable
/// key can live in a keyed collection.
///

pub trait Record {
    type Key: Copy + Debug + Display + Eq + Hash;

    fn key(&self) -> Self::Key;
}

///
/// IndicatorId
///
/// Position-derived: the indicator's index in the source report's list.
/// Not stable across fetches if the upstream reorders its indicators; the
/// report view joins these by position, which keeps the two in lockstep.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct IndicatorId(u32);

impl IndicatorId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Derive an id from a source-list position.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// The position this id selects in the indicators view.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

///
/// ReportId
///
/// One report per scope, so producers only ever write [`ReportId::ROOT`].
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ReportId(u32);

impl ReportId {
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

///
/// IndicatorRecord
///
/// Flat form of an indicator: embedded reviews replaced by their ids, in the
/// embedded order.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRecord {
    pub id: IndicatorId,
    #[serde(rename = "type")]
    pub category: Category,
    pub growth: f64,
    pub review_ids: Vec<ReviewId>,
}

impl Record for IndicatorRecord {
    type Key = IndicatorId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

///
/// ReportRecord
///
/// Flat form of the report: ordered review ids and ordered indicator ids,
/// both preserving the nested report's list order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: ReportId,
    pub review_ids: Vec<ReviewId>,
    pub indicator_ids: Vec<IndicatorId>,
}

impl Record for ReportRecord {
    type Key = ReportId;

    fn key(&self) -> Self::Key {
        self.id
    }
}
