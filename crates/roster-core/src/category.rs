//! Role categories — the eight directory tabs — and the title classifier.
//!
//! `all`, `staff`, and `students` partition the source collections directly.
//! The middle five are derived views over the faculty collection, computed by
//! substring matching on free-text titles. They are neither exhaustive (a
//! faculty member whose title matches nothing appears only under `all`) nor
//! disjoint (an "Adjunct Research Professor" counts under both `adjunct` and
//! `researchers`); both behaviors are kept as-is for compatibility with the
//! upstream directory.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
  Error,
  person::{Person, PersonType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  All,
  Faculty,
  Researchers,
  Adjunct,
  Emeriti,
  Lecturers,
  Staff,
  Students,
}

impl Category {
  /// Every tab, in display order.
  pub const TABS: [Category; 8] = [
    Category::All,
    Category::Faculty,
    Category::Researchers,
    Category::Adjunct,
    Category::Emeriti,
    Category::Lecturers,
    Category::Staff,
    Category::Students,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::All => "all",
      Category::Faculty => "faculty",
      Category::Researchers => "researchers",
      Category::Adjunct => "adjunct",
      Category::Emeriti => "emeriti",
      Category::Lecturers => "lecturers",
      Category::Staff => "staff",
      Category::Students => "students",
    }
  }

  /// Whether `person` belongs under this tab.
  pub fn matches(&self, person: &Person) -> bool {
    match self {
      Category::All => true,
      Category::Staff => person.person_type == PersonType::Staff,
      Category::Students => person.person_type == PersonType::Student,
      derived => {
        person.person_type == PersonType::Faculty
          && derived
            .title_matches(&person.title.as_deref().unwrap_or("").to_lowercase())
      }
    }
  }

  /// Substring rules for the five derived faculty categories.
  /// `title` must already be lower-cased; matches are substring, not
  /// whole-word.
  fn title_matches(&self, title: &str) -> bool {
    match self {
      Category::Faculty => {
        title.contains("professor")
          && !title.contains("emeritus")
          && !title.contains("lecturer")
          && !title.contains("adjunct")
          && !title.contains("research")
      }
      Category::Researchers => {
        title.contains("research professor")
          || title.contains("research biologist")
          || title.contains("postdoctoral")
      }
      Category::Adjunct => title.contains("adjunct"),
      Category::Emeriti => title.contains("emeritus"),
      Category::Lecturers => {
        title.contains("lecturer") || title.contains("teaching professor")
      }
      // Direct partitions are resolved in `matches` before we get here.
      Category::All | Category::Staff | Category::Students => true,
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "all" => Ok(Category::All),
      "faculty" => Ok(Category::Faculty),
      "researchers" => Ok(Category::Researchers),
      "adjunct" => Ok(Category::Adjunct),
      "emeriti" => Ok(Category::Emeriti),
      "lecturers" => Ok(Category::Lecturers),
      "staff" => Ok(Category::Staff),
      "students" => Ok(Category::Students),
      other => Err(Error::UnknownCategory(other.to_owned())),
    }
  }
}
