//! Invierte Core — domain model and pure record-processing routines.
//!
//! This crate holds everything that operates on an in-memory batch of
//! project records, independent of where the batch came from:
//!
//! - [`project`]: the `Project` record as served by the remote API
//! - [`text`]: comparison normalization and place-name display correction
//! - [`filter`]: client-side search over a record batch
//! - [`aggregate`]: categorical value counting for charting
//! - [`display`]: field validity and presentation rules
//!
//! All routines are synchronous and pure; they are safe to re-run on every
//! input change for batches of a few thousand records.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod display;
pub mod filter;
pub mod project;
pub mod text;

// Re-export key types at crate root for convenience
pub use aggregate::{AggregationEntry, CHART_FIELDS, count_field_values};
pub use filter::filter_projects;
pub use project::Project;
