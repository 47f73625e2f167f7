//! Error types for `roster-core`.
//!
//! The engine itself is total — querying, counting, classifying, and sorting
//! never fail. The only fallible surface is parsing user-supplied parameter
//! strings at the API/CLI boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown category: {0:?}")]
  UnknownCategory(String),

  #[error("unknown sort order: {0:?}")]
  UnknownSortOrder(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
