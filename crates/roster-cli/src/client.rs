//! Async HTTP client wrapping the roster JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use roster_core::{category::Category, person::Person, research::ResearchArea};
use serde::Deserialize;

/// Connection settings for the roster API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// One tab's badge count, as returned by `GET /api/people/counts`.
#[derive(Debug, Deserialize)]
pub struct TabCount {
  pub category: Category,
  pub count:    usize,
}

/// Async HTTP client for the roster JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `GET /api/people` with the given query-string pairs.
  pub async fn list_people(
    &self,
    query: &[(&str, String)],
  ) -> Result<Vec<Person>> {
    let resp = self
      .client
      .get(self.url("/people"))
      .query(query)
      .send()
      .await
      .context("GET /people failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /people → {}", resp.status()));
    }
    resp.json().await.context("deserialising people")
  }

  /// `GET /api/people/counts`
  pub async fn counts(&self) -> Result<Vec<TabCount>> {
    let resp = self
      .client
      .get(self.url("/people/counts"))
      .send()
      .await
      .context("GET /people/counts failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /people/counts → {}", resp.status()));
    }
    resp.json().await.context("deserialising counts")
  }

  /// `GET /api/research-areas[?category=<label>]`
  pub async fn list_areas(
    &self,
    category: Option<&str>,
  ) -> Result<Vec<ResearchArea>> {
    let mut req = self.client.get(self.url("/research-areas"));
    if let Some(label) = category {
      req = req.query(&[("category", label)]);
    }

    let resp = req.send().await.context("GET /research-areas failed")?;
    if !resp.status().is_success() {
      return Err(anyhow!("GET /research-areas → {}", resp.status()));
    }
    resp.json().await.context("deserialising research areas")
  }
}
