//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A deactivate or link targeted a row that does not exist.
  #[error("no {0} row with id {1}")]
  NotFound(&'static str, i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
