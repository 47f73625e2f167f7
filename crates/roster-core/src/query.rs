//! The directory query pipeline: category selection → research-area facet →
//! search filter → sort.
//!
//! Deterministic, total, and side-effect-free. Badge counts and the filtered
//! list are computed from the same base-set rules, so the two can never
//! disagree. There is no error state here: empty inputs, an unset category,
//! and an empty search all produce well-defined (possibly empty) results.

use serde::{Deserialize, Serialize};

use crate::{
  category::Category,
  person::Person,
  research::{FacetIndex, ResearchArea, ResearchCategory},
  search, sort,
  sort::SortOrder,
};

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// The three normalised source collections, as loaded for one page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
  pub faculty:  Vec<Person>,
  pub staff:    Vec<Person>,
  pub students: Vec<Person>,
}

impl Directory {
  /// Total number of people across all three collections.
  pub fn len(&self) -> usize {
    self.faculty.len() + self.staff.len() + self.students.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The caller-held query parameters. Ephemeral — results are always
/// reconstructible from scratch, and implementations are free to cache only
/// if the outcome stays identical to a fresh recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
  pub category:               Category,
  pub search:                 String,
  pub sort:                   SortOrder,
  /// Explicit research-area selection; wins over `selected_area_category`
  /// when non-empty.
  pub selected_area_ids:      Vec<i64>,
  /// Broad-category facet, used only when no explicit areas are selected.
  pub selected_area_category: Option<ResearchCategory>,
}

impl Default for QueryParams {
  fn default() -> Self {
    Self {
      category:               Category::All,
      search:                 String::new(),
      sort:                   SortOrder::DEFAULT,
      selected_area_ids:      Vec::new(),
      selected_area_category: None,
    }
  }
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Run the full pipeline and return the ordered, filtered listing.
pub fn query(
  directory: &Directory,
  areas: &[ResearchArea],
  index: &FacetIndex,
  params: &QueryParams,
) -> Vec<Person> {
  // 1. Base set per category.
  let mut people = base_set(directory, params.category);

  // 2. Research-area facet — only meaningful on the faculty tab. Selecting a
  //    facet while on another tab has no effect; callers clear facet state on
  //    tab switches (see `state::DirectoryState`).
  if params.category == Category::Faculty
    && let Some(selected) = index.selection(
      areas,
      &params.selected_area_ids,
      params.selected_area_category,
    )
  {
    people.retain(|p| selected.contains(&p.id));
  }

  // 3. Search filter.
  if !params.search.trim().is_empty() {
    people.retain(|p| search::matches(p, &params.search));
  }

  // 4. Sort.
  sort::sort_people(&mut people, params.sort);

  people
}

/// Badge count for a tab: the size of its unfiltered base set, ignoring
/// search, facets, and sort. Equals `query(...).len()` with empty search and
/// no facets.
pub fn count_by_category(directory: &Directory, category: Category) -> usize {
  match category {
    Category::All => directory.len(),
    Category::Staff => directory.staff.len(),
    Category::Students => directory.students.len(),
    derived => {
      directory.faculty.iter().filter(|p| derived.matches(p)).count()
    }
  }
}

fn base_set(directory: &Directory, category: Category) -> Vec<Person> {
  match category {
    Category::All => directory
      .faculty
      .iter()
      .chain(&directory.staff)
      .chain(&directory.students)
      .cloned()
      .collect(),
    Category::Staff => directory.staff.clone(),
    Category::Students => directory.students.clone(),
    derived => directory
      .faculty
      .iter()
      .filter(|p| derived.matches(p))
      .cloned()
      .collect(),
  }
}
