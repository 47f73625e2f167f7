//! Handlers for `/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | Full query pipeline; see [`ListParams`] |
//! | `GET`  | `/people/counts` | Badge counts for every tab |
//!
//! Each request loads a fresh snapshot from the store, so responses are
//! always all-or-nothing: either every collection loaded or the request
//! fails as a whole.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::{
  category::Category,
  person::Person,
  query::QueryParams,
  research::ResearchCategory,
  sort::SortOrder,
  store::{DirectoryStore, load_snapshot},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Tab to list, e.g. `faculty`. Defaults to `all`.
  pub category:      Option<String>,
  /// Free-text search over name, email, title, interests, degree program.
  pub q:             Option<String>,
  /// One of `name-asc`, `name-desc`, `title-asc`, `title-desc`, `email-asc`,
  /// `email-desc`, `office-asc`, `office-desc`, `recent`.
  pub sort:          Option<String>,
  /// Comma-separated research-area ids, e.g. `2,3`. Faculty tab only.
  pub areas:         Option<String>,
  /// Broad research-category label; ignored when `areas` is present.
  pub area_category: Option<String>,
}

impl ListParams {
  fn into_query(self) -> Result<QueryParams, ApiError> {
    let category = self
      .category
      .as_deref()
      .map(str::parse::<Category>)
      .transpose()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?
      .unwrap_or(Category::All);

    let sort = self
      .sort
      .as_deref()
      .map(str::parse::<SortOrder>)
      .transpose()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?
      .unwrap_or_default();

    let selected_area_ids = match self.areas.as_deref() {
      Some(s) => s
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
          t.parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("bad area id: {t:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?,
      None => Vec::new(),
    };

    Ok(QueryParams {
      category,
      search: self.q.unwrap_or_default(),
      sort,
      selected_area_ids,
      selected_area_category: self
        .area_category
        .as_deref()
        .map(ResearchCategory::from_label),
    })
  }
}

/// `GET /people[?category=...][&q=...][&sort=...][&areas=...][&area_category=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = params.into_query()?;
  let snapshot = load_snapshot(store.as_ref())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(snapshot.query(&query)))
}

// ─── Counts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct TabCount {
  pub category: Category,
  pub count:    usize,
}

/// `GET /people/counts` — one entry per tab, in display order.
pub async fn counts<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TabCount>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let snapshot = load_snapshot(store.as_ref())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let counts = Category::TABS
    .into_iter()
    .map(|category| TabCount { category, count: snapshot.count(category) })
    .collect();
  Ok(Json(counts))
}
