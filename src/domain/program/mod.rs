//! Program module - the static catalog of weeks and training days.
//!
//! A [`Program`] is supplied once per session and never mutated. The
//! progression engine derives everything else from it.

mod activity;
mod catalog;
#[allow(clippy::module_inception)]
mod program;
mod segment;

pub use activity::Activity;
pub use catalog::{
    parse_catalog_yaml, reference_program, ActivityDocument, CatalogDocument, CatalogError,
    SegmentDocument, REFERENCE_WEEKS,
};
pub use program::Program;
pub use segment::Segment;
