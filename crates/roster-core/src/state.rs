//! Caller-held query state and keystroke debouncing.
//!
//! The engine is stateless; these helpers codify the two disciplines its
//! callers must follow. First, switching tabs clears the search text and the
//! facet selection in the same step — stale filters must never silently apply
//! to a newly selected category. Second, keystroke-driven queries are
//! coalesced before they reach the matcher, so the pipeline is not recomputed
//! on every keypress.

use std::time::{Duration, Instant};

use crate::{
  category::Category, query::QueryParams, research::ResearchCategory,
  sort::SortOrder,
};

// ─── Directory state ─────────────────────────────────────────────────────────

/// The ephemeral per-view query state. Owned by the caller and passed
/// explicitly — never a hidden singleton.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
  params: QueryParams,
}

impl DirectoryState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn params(&self) -> &QueryParams {
    &self.params
  }

  /// Switch tabs. Clears the search text and the whole facet selection in the
  /// same call.
  pub fn set_category(&mut self, category: Category) {
    self.params.category = category;
    self.params.search.clear();
    self.params.selected_area_ids.clear();
    self.params.selected_area_category = None;
  }

  pub fn set_search(&mut self, text: impl Into<String>) {
    self.params.search = text.into();
  }

  pub fn clear_search(&mut self) {
    self.params.search.clear();
  }

  pub fn set_sort(&mut self, sort: SortOrder) {
    self.params.sort = sort;
  }

  /// Add or remove one research area from the explicit selection.
  pub fn toggle_area(&mut self, area_id: i64) {
    if let Some(pos) =
      self.params.selected_area_ids.iter().position(|id| *id == area_id)
    {
      self.params.selected_area_ids.remove(pos);
    } else {
      self.params.selected_area_ids.push(area_id);
    }
  }

  pub fn set_area_category(&mut self, category: Option<ResearchCategory>) {
    self.params.selected_area_category = category;
  }

  pub fn clear_facets(&mut self) {
    self.params.selected_area_ids.clear();
    self.params.selected_area_category = None;
  }
}

// ─── Debouncer ───────────────────────────────────────────────────────────────

/// Coalesces keystroke-driven query text: the pending value is released only
/// once `window` has elapsed with no further input.
///
/// The clock is passed in, so the same type works in a UI event loop, behind
/// a timer, or in tests with synthetic instants. No cancellation of in-flight
/// work is needed — each pipeline run is synchronous and fast.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
  window:   Duration,
  pending:  Option<String>,
  deadline: Option<Instant>,
}

impl SearchDebouncer {
  /// The recommended inactivity window.
  pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

  pub fn new(window: Duration) -> Self {
    Self { window, pending: None, deadline: None }
  }

  /// Record a keystroke; resets the inactivity timer.
  pub fn input(&mut self, text: impl Into<String>, now: Instant) {
    self.pending = Some(text.into());
    self.deadline = Some(now + self.window);
  }

  /// The settled query, if the window has elapsed since the last keystroke.
  /// Returns at most once per settled input.
  pub fn poll(&mut self, now: Instant) -> Option<String> {
    match self.deadline {
      Some(deadline) if now >= deadline => {
        self.deadline = None;
        self.pending.take()
      }
      _ => None,
    }
  }

  /// True when no input is waiting to settle.
  pub fn is_idle(&self) -> bool {
    self.pending.is_none()
  }
}

impl Default for SearchDebouncer {
  fn default() -> Self {
    Self::new(Self::DEFAULT_WINDOW)
  }
}
