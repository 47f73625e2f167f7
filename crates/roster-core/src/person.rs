//! The unified person view model and the normalizer that produces it.
//!
//! The content store exposes three heterogeneous record shapes — faculty,
//! staff, graduate student — each with its own id sequence and field set.
//! Normalisation folds them into one [`Person`] tagged with [`PersonType`],
//! so downstream code pattern-matches on the discriminant instead of probing
//! for field presence. Fields a source shape lacks come out `None`/empty;
//! absence is never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Discriminant ────────────────────────────────────────────────────────────

/// Which source collection a person came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonType {
  Faculty,
  Staff,
  Student,
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// Cross-collection identity. Ids are unique only within their source table,
/// so the `(person_type, id)` pair is the real key. Callers holding
/// presentation state (e.g. an image-error set) should key it on this, not on
/// the bare id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonKey {
  pub person_type: PersonType,
  pub id:          i64,
}

// ─── Advisor back-reference ──────────────────────────────────────────────────

/// A non-owning reference from a student to their faculty advisor.
///
/// Carries only what a listing needs to display and link — never the full
/// advisor record. Faculty do not own their advisees; this must stay a flat
/// summary, not an object graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorRef {
  pub id:        i64,
  pub full_name: Option<String>,
  pub last_name: Option<String>,
  pub slug:      Option<String>,
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// The unified view model the directory engine operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
  pub id:                 i64,
  pub person_type:        PersonType,
  pub first_name:         String,
  pub last_name:          String,
  /// Precomputed display name; [`Person::display_name`] falls back to
  /// `"{first_name} {last_name}"` when absent.
  pub full_name:          Option<String>,
  /// URL-safe identifier; presence determines whether a profile link exists.
  pub slug:               Option<String>,
  /// Free-text role label (faculty/staff only) — the sole input to role
  /// classification.
  pub title:              Option<String>,
  /// Students only, e.g. "PhD", "MS", "Combined BS-MS". Kept free-form so
  /// malformed values degrade instead of erroring.
  pub degree_program:     Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  /// Faculty and students only; staff normalise to empty.
  pub research_interests: Vec<String>,
  pub active:             bool,
  pub advisor:            Option<AdvisorRef>,
}

impl Person {
  pub fn key(&self) -> PersonKey {
    PersonKey { person_type: self.person_type, id: self.id }
  }

  /// The precomputed full name when present, otherwise first + last.
  pub fn display_name(&self) -> String {
    match &self.full_name {
      Some(name) => name.clone(),
      None => format!("{} {}", self.first_name, self.last_name),
    }
  }
}

// ─── Source records ──────────────────────────────────────────────────────────

/// A row from the faculty collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
  pub id:                 i64,
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub title:              Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  #[serde(default)]
  pub research_interests: Vec<String>,
  pub active:             bool,
  /// Store metadata; the engine never orders by it (`recent` uses the id).
  pub created_at:         DateTime<Utc>,
}

impl FacultyRecord {
  pub fn into_person(self) -> Person {
    Person {
      id:                 self.id,
      person_type:        PersonType::Faculty,
      first_name:         self.first_name,
      last_name:          self.last_name,
      full_name:          self.full_name,
      slug:               self.slug,
      title:              self.title,
      degree_program:     None,
      email:              self.email,
      phone:              self.phone,
      office:             self.office,
      research_interests: self.research_interests,
      active:             self.active,
      advisor:            None,
    }
  }
}

/// A row from the staff collection. Staff carry no research interests and no
/// degree program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub full_name:  Option<String>,
  pub slug:       Option<String>,
  pub title:      Option<String>,
  pub email:      String,
  pub phone:      Option<String>,
  pub office:     Option<String>,
  pub active:     bool,
  pub created_at: DateTime<Utc>,
}

impl StaffRecord {
  pub fn into_person(self) -> Person {
    Person {
      id:                 self.id,
      person_type:        PersonType::Staff,
      first_name:         self.first_name,
      last_name:          self.last_name,
      full_name:          self.full_name,
      slug:               self.slug,
      title:              self.title,
      degree_program:     None,
      email:              self.email,
      phone:              self.phone,
      office:             self.office,
      research_interests: Vec::new(),
      active:             self.active,
      advisor:            None,
    }
  }
}

/// A row from the graduate-student collection. Students carry no title; their
/// role label is the degree program, and they reference (but never own) a
/// faculty advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
  pub id:                 i64,
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub degree_program:     Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  #[serde(default)]
  pub research_interests: Vec<String>,
  pub advisor:            Option<AdvisorRef>,
  pub active:             bool,
  pub created_at:         DateTime<Utc>,
}

impl StudentRecord {
  pub fn into_person(self) -> Person {
    Person {
      id:                 self.id,
      person_type:        PersonType::Student,
      first_name:         self.first_name,
      last_name:          self.last_name,
      full_name:          self.full_name,
      slug:               self.slug,
      title:              None,
      degree_program:     self.degree_program,
      email:              self.email,
      phone:              self.phone,
      office:             self.office,
      research_interests: self.research_interests,
      active:             self.active,
      advisor:            self.advisor,
    }
  }
}
