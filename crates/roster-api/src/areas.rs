//! Handler for `GET /research-areas`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use roster_core::{
  research::{ResearchArea, ResearchCategory},
  store::DirectoryStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Broad-category label to filter by, e.g. `Marine Biology`.
  pub category: Option<String>,
}

/// `GET /research-areas[?category=<label>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<ResearchArea>>, ApiError>
where
  S: DirectoryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut areas = store
    .list_research_areas()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if let Some(label) = params.category.as_deref() {
    let category = ResearchCategory::from_label(label);
    areas.retain(|a| a.category == category);
  }

  Ok(Json(areas))
}
