//! Deterministic ordering of directory listings.
//!
//! All sorts are stable: tied elements keep their input order, so repeated
//! renders over unchanged data paginate identically. Descending is defined as
//! the ascending comparator with its arguments swapped — the two directions
//! are perfect mirrors, ties included, rather than a reversed list.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Error, person::Person};

// ─── Keys ────────────────────────────────────────────────────────────────────

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  /// Last name.
  Name,
  /// Title, falling back to degree program for students.
  Title,
  Email,
  Office,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Asc,
  Desc,
}

/// A complete ordering choice: one of the four keys in either direction, or
/// the insertion-recency proxy (descending id — no creation timestamp is
/// exposed to the engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  ByKey {
    key:       SortKey,
    direction: SortDirection,
  },
  Recent,
}

impl SortOrder {
  /// The directory's default ordering: last name, A to Z.
  pub const DEFAULT: SortOrder = SortOrder::ByKey {
    key:       SortKey::Name,
    direction: SortDirection::Asc,
  };

  pub fn as_str(&self) -> &'static str {
    match self {
      SortOrder::ByKey { key, direction } => match (key, direction) {
        (SortKey::Name, SortDirection::Asc) => "name-asc",
        (SortKey::Name, SortDirection::Desc) => "name-desc",
        (SortKey::Title, SortDirection::Asc) => "title-asc",
        (SortKey::Title, SortDirection::Desc) => "title-desc",
        (SortKey::Email, SortDirection::Asc) => "email-asc",
        (SortKey::Email, SortDirection::Desc) => "email-desc",
        (SortKey::Office, SortDirection::Asc) => "office-asc",
        (SortKey::Office, SortDirection::Desc) => "office-desc",
      },
      SortOrder::Recent => "recent",
    }
  }
}

impl Default for SortOrder {
  fn default() -> Self {
    SortOrder::DEFAULT
  }
}

impl fmt::Display for SortOrder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortOrder {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    let by = |key, direction| SortOrder::ByKey { key, direction };
    match s {
      "name-asc" => Ok(by(SortKey::Name, SortDirection::Asc)),
      "name-desc" => Ok(by(SortKey::Name, SortDirection::Desc)),
      "title-asc" => Ok(by(SortKey::Title, SortDirection::Asc)),
      "title-desc" => Ok(by(SortKey::Title, SortDirection::Desc)),
      "email-asc" => Ok(by(SortKey::Email, SortDirection::Asc)),
      "email-desc" => Ok(by(SortKey::Email, SortDirection::Desc)),
      "office-asc" => Ok(by(SortKey::Office, SortDirection::Asc)),
      "office-desc" => Ok(by(SortKey::Office, SortDirection::Desc)),
      "recent" => Ok(SortOrder::Recent),
      other => Err(Error::UnknownSortOrder(other.to_owned())),
    }
  }
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// Stable in-place sort by `order`.
pub fn sort_people(people: &mut [Person], order: SortOrder) {
  match order {
    SortOrder::ByKey { key, direction: SortDirection::Asc } => {
      people.sort_by(|a, b| cmp_asc(a, b, key));
    }
    SortOrder::ByKey { key, direction: SortDirection::Desc } => {
      // Mirror of ascending, not a list reversal: ties still keep input order.
      people.sort_by(|a, b| cmp_asc(b, a, key));
    }
    SortOrder::Recent => {
      people.sort_by(|a, b| b.id.cmp(&a.id));
    }
  }
}

/// The ascending comparator for `key`. String comparison is case-insensitive;
/// missing optional fields compare as the empty string.
fn cmp_asc(a: &Person, b: &Person, key: SortKey) -> Ordering {
  match key {
    SortKey::Name => fold(&a.last_name).cmp(&fold(&b.last_name)),
    SortKey::Title => fold(title_or_degree(a)).cmp(&fold(title_or_degree(b))),
    SortKey::Email => fold(&a.email).cmp(&fold(&b.email)),
    SortKey::Office => {
      fold(a.office.as_deref().unwrap_or(""))
        .cmp(&fold(b.office.as_deref().unwrap_or("")))
    }
  }
}

fn title_or_degree(p: &Person) -> &str {
  p.title
    .as_deref()
    .or(p.degree_program.as_deref())
    .unwrap_or("")
}

fn fold(s: &str) -> String {
  s.to_lowercase()
}
