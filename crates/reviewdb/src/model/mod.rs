//! Nested (denormalized) entity model: the business-level shapes the service
//! boundary speaks. Related entities are embedded by value, so a review that
//! belongs to an indicator appears inside it in full.

mod category;
mod report;
mod review;
mod timestamp;

pub use category::Category;
pub use report::{Indicator, Report};
pub use review::{RecipientId, Review, ReviewId};
pub use timestamp::Timestamp;
