//! Research areas, their broad categories, and the faculty facet index.
//!
//! Areas are a facet dimension layered on top of the faculty tab: each area
//! belongs to exactly one broad [`ResearchCategory`], and faculty are linked
//! to areas through a many-to-many edge list. The index built here is pure —
//! removing a faculty or area record upstream never cascades through it.

use std::{
  collections::{HashMap, HashSet},
  fmt,
};

use serde::{Deserialize, Serialize};

// ─── Broad categories ────────────────────────────────────────────────────────

/// Broad field grouping for research areas (distinct from role categories).
///
/// Labels match the content store's enum; anything unrecognised degrades to
/// [`ResearchCategory::Other`] rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ResearchCategory {
  Ecology,
  Evolution,
  #[serde(rename = "Marine Biology")]
  MarineBiology,
  #[serde(rename = "Molecular Biology")]
  MolecularBiology,
  Conservation,
  #[serde(rename = "Climate Science")]
  ClimateScience,
  Microbiology,
  Genomics,
  Physiology,
  Biodiversity,
  Other,
}

impl ResearchCategory {
  pub fn as_label(&self) -> &'static str {
    match self {
      ResearchCategory::Ecology => "Ecology",
      ResearchCategory::Evolution => "Evolution",
      ResearchCategory::MarineBiology => "Marine Biology",
      ResearchCategory::MolecularBiology => "Molecular Biology",
      ResearchCategory::Conservation => "Conservation",
      ResearchCategory::ClimateScience => "Climate Science",
      ResearchCategory::Microbiology => "Microbiology",
      ResearchCategory::Genomics => "Genomics",
      ResearchCategory::Physiology => "Physiology",
      ResearchCategory::Biodiversity => "Biodiversity",
      ResearchCategory::Other => "Other",
    }
  }

  /// Total parse: unknown labels fold into `Other`.
  pub fn from_label(label: &str) -> Self {
    match label {
      "Ecology" => ResearchCategory::Ecology,
      "Evolution" => ResearchCategory::Evolution,
      "Marine Biology" => ResearchCategory::MarineBiology,
      "Molecular Biology" => ResearchCategory::MolecularBiology,
      "Conservation" => ResearchCategory::Conservation,
      "Climate Science" => ResearchCategory::ClimateScience,
      "Microbiology" => ResearchCategory::Microbiology,
      "Genomics" => ResearchCategory::Genomics,
      "Physiology" => ResearchCategory::Physiology,
      "Biodiversity" => ResearchCategory::Biodiversity,
      _ => ResearchCategory::Other,
    }
  }
}

impl From<String> for ResearchCategory {
  fn from(label: String) -> Self {
    ResearchCategory::from_label(&label)
  }
}

impl fmt::Display for ResearchCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_label())
  }
}

// ─── Areas and edges ─────────────────────────────────────────────────────────

/// A research area a faculty member can be associated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchArea {
  pub id:       i64,
  pub name:     String,
  pub category: ResearchCategory,
  pub slug:     Option<String>,
}

/// One many-to-many edge between a faculty member and a research area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchAreaLink {
  pub faculty_id:       i64,
  pub research_area_id: i64,
}

// ─── Facet index ─────────────────────────────────────────────────────────────

/// Map from research-area id to the set of faculty ids associated with it.
/// Built once per snapshot from the edge list, O(edges).
#[derive(Debug, Clone, Default)]
pub struct FacetIndex {
  by_area: HashMap<i64, HashSet<i64>>,
}

impl FacetIndex {
  pub fn build(links: &[ResearchAreaLink]) -> Self {
    let mut by_area: HashMap<i64, HashSet<i64>> = HashMap::new();
    for link in links {
      by_area
        .entry(link.research_area_id)
        .or_default()
        .insert(link.faculty_id);
    }
    Self { by_area }
  }

  /// Faculty associated with a single area, if any are.
  pub fn faculty_for_area(&self, area_id: i64) -> Option<&HashSet<i64>> {
    self.by_area.get(&area_id)
  }

  /// Faculty matching any of the selected areas — a union, not an
  /// intersection.
  pub fn faculty_for_areas(&self, area_ids: &[i64]) -> HashSet<i64> {
    let mut out = HashSet::new();
    for id in area_ids {
      if let Some(faculty) = self.by_area.get(id) {
        out.extend(faculty.iter().copied());
      }
    }
    out
  }

  /// Faculty matching any area belonging to `category`.
  pub fn faculty_for_category(
    &self,
    areas: &[ResearchArea],
    category: ResearchCategory,
  ) -> HashSet<i64> {
    let ids: Vec<i64> = areas
      .iter()
      .filter(|a| a.category == category)
      .map(|a| a.id)
      .collect();
    self.faculty_for_areas(&ids)
  }

  /// Resolve the active facet selection, or `None` when no facet is active.
  ///
  /// A non-empty explicit area selection always wins; the broad category
  /// selection only filters when no specific areas are picked (it may still
  /// drive UI state above this layer).
  pub fn selection(
    &self,
    areas: &[ResearchArea],
    selected_ids: &[i64],
    selected_category: Option<ResearchCategory>,
  ) -> Option<HashSet<i64>> {
    if !selected_ids.is_empty() {
      return Some(self.faculty_for_areas(selected_ids));
    }
    selected_category.map(|c| self.faculty_for_category(areas, c))
  }
}
