use crate::model::{Category, Review};
use serde::{Deserialize, Serialize};

///
/// Indicator
///
/// One category bucket of the report with its reviews embedded in full.
/// Carries no identifier of its own; the flat form derives one from list
/// position.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    #[serde(rename = "type")]
    pub category: Category,
    /// Month-over-month growth percentage, signed.
    pub growth: f64,
    pub reviews: Vec<Review>,
}

///
/// Report
///
/// The business-level nested view: every review once at the top level, and
/// again inside whichever indicator bucket it fell into.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub reviews: Vec<Review>,
    pub indicators: Vec<Indicator>,
}
