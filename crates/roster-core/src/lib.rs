//! Core types and the query engine for the roster people directory.
//!
//! Everything in this crate is pure, synchronous computation over in-memory
//! collections — no HTTP, no database, no hidden state. It is safe to run the
//! pipeline from any number of concurrent readers. The one async seam is the
//! [`store::DirectoryStore`] trait, implemented by storage backends.

pub mod category;
pub mod error;
pub mod person;
pub mod query;
pub mod research;
pub mod search;
pub mod sort;
pub mod state;
pub mod store;

pub use error::{Error, Result};
