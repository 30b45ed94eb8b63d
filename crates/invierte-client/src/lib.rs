//! # invierte-client
//!
//! Async HTTP client for the Invierte project-listing API.
//!
//! The remote surface is two GET operations over one base URL:
//!
//! - the collection endpoint, returning a JSON array of project records;
//! - the detail endpoint (base URL + investment code), returning a JSON
//!   array of the same shape, possibly richer and possibly empty.
//!
//! The client issues one request per call, never retries on its own, and
//! never treats an empty array as an error; re-triggering is the caller's
//! decision.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;

pub use client::ProjectsClient;
pub use error::{Error, Result};
