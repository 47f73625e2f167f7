//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Research interests are
//! stored as compact JSON arrays. Research-category labels are stored as the
//! content store's display strings and decoded totally (unknown labels fold
//! into `Other`).

use chrono::{DateTime, Utc};
use roster_core::{
  person::{AdvisorRef, FacultyRecord, StaffRecord, StudentRecord},
  research::{ResearchArea, ResearchCategory},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Research interests ──────────────────────────────────────────────────────

pub fn encode_interests(interests: &[String]) -> Result<String> {
  Ok(serde_json::to_string(interests)?)
}

pub fn decode_interests(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `faculty` row.
pub struct RawFaculty {
  pub id:                 i64,
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub title:              Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  pub research_interests: String,
  pub active:             bool,
  pub created_at:         String,
}

impl RawFaculty {
  pub fn into_record(self) -> Result<FacultyRecord> {
    Ok(FacultyRecord {
      id:                 self.id,
      first_name:         self.first_name,
      last_name:          self.last_name,
      full_name:          self.full_name,
      slug:               self.slug,
      title:              self.title,
      email:              self.email,
      phone:              self.phone,
      office:             self.office,
      research_interests: decode_interests(&self.research_interests)?,
      active:             self.active,
      created_at:         decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `staff` row.
pub struct RawStaff {
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
  pub created_at: String,
}

impl RawStaff {
  pub fn into_record(self) -> Result<StaffRecord> {
    Ok(StaffRecord {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      full_name:  self.full_name,
      slug:       self.slug,
      title:      self.title,
      email:      self.email,
      phone:      self.phone,
      office:     self.office,
      active:     self.active,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read from a `students` row joined with the advisor's summary
/// columns.
pub struct RawStudent {
  pub id:                 i64,
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub degree_program:     Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  pub research_interests: String,
  pub active:             bool,
  pub created_at:         String,
  // faculty join
  pub advisor_id:         Option<i64>,
  pub advisor_full_name:  Option<String>,
  pub advisor_last_name:  Option<String>,
  pub advisor_slug:       Option<String>,
}

impl RawStudent {
  pub fn into_record(self) -> Result<StudentRecord> {
    let advisor = self.advisor_id.map(|id| AdvisorRef {
      id,
      full_name: self.advisor_full_name,
      last_name: self.advisor_last_name,
      slug:      self.advisor_slug,
    });

    Ok(StudentRecord {
      id:                 self.id,
      first_name:         self.first_name,
      last_name:          self.last_name,
      full_name:          self.full_name,
      slug:               self.slug,
      degree_program:     self.degree_program,
      email:              self.email,
      phone:              self.phone,
      office:             self.office,
      research_interests: decode_interests(&self.research_interests)?,
      advisor,
      active:             self.active,
      created_at:         decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `research_areas` row.
pub struct RawArea {
  pub id:       i64,
  pub name:     String,
  pub category: String,
  pub slug:     Option<String>,
}

impl RawArea {
  pub fn into_area(self) -> ResearchArea {
    let category = ResearchCategory::from_label(&self.category);
    if category == ResearchCategory::Other && self.category != "Other" {
      tracing::warn!(
        area = %self.name,
        label = %self.category,
        "unknown research category label, treating as Other"
      );
    }

    ResearchArea {
      id: self.id,
      name: self.name,
      category,
      slug: self.slug,
    }
  }
}
