//! Normalized in-memory store and cached derivation layer for review
//! analytics: nested reports in, flat id-keyed collections inside, nested
//! views back out.
//!
//! Data flows one way through the crate: a service hands [`session::Session`]
//! a nested [`model::Report`], [`normalize::normalize`] flattens it, the
//! [`store::Store`] commits the flat records, and [`view::Views`] rebuilds
//! the nested shape on demand, re-deriving only when the collections it reads
//! have actually changed.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod model;
pub mod normalize;
pub mod patch;
pub mod record;
pub mod session;
pub mod store;
pub mod view;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, caches, or patch payloads are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{Category, Indicator, RecipientId, Report, Review, ReviewId, Timestamp},
        normalize::{NormalizedReport, normalize},
        record::{IndicatorId, IndicatorRecord, ReportId, ReportRecord},
        session::Session,
        store::Store,
        view::Views,
    };
}
