use crate::{model::Timestamp, record::Record};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// ReviewId
///
/// Upstream-assigned review identifier. Unlike indicator ids it is stable
/// across fetches; the flat model keys the review collection on it.
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
pub struct ReviewId(u64);

impl ReviewId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// RecipientId
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
pub struct RecipientId(u64);

impl RecipientId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

///
/// Review
///
/// A single customer review. Identical in nested and flat form; it is the
/// one entity normalization stores by value rather than by reference.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub message: String,
    pub date: Timestamp,
    pub recipient: RecipientId,
    /// Rating domain is 1–5 by upstream convention; not enforced here.
    pub rating: u8,
    pub table_number: u32,
}

impl Record for Review {
    type Key = ReviewId;

    fn key(&self) -> Self::Key {
        self.id
    }
}
