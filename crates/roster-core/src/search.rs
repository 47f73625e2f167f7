//! Case-insensitive substring search over a fixed set of person fields.
//!
//! No tokenization, no fuzziness, no ranking — a pure boolean test. Keystroke
//! debouncing belongs to the caller (see [`crate::state::SearchDebouncer`]);
//! the matcher itself is synchronous and stateless.

use crate::person::Person;

/// True when `query` (trimmed, lower-cased) is a substring of any of: display
/// name, email, title, space-joined research interests, or degree program.
/// An empty or whitespace-only query matches everyone.
pub fn matches(person: &Person, query: &str) -> bool {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return true;
  }

  if person.display_name().to_lowercase().contains(&needle) {
    return true;
  }
  if person.email.to_lowercase().contains(&needle) {
    return true;
  }
  if let Some(title) = &person.title
    && title.to_lowercase().contains(&needle)
  {
    return true;
  }
  if !person.research_interests.is_empty()
    && person
      .research_interests
      .join(" ")
      .to_lowercase()
      .contains(&needle)
  {
    return true;
  }
  person
    .degree_program
    .as_deref()
    .is_some_and(|d| d.to_lowercase().contains(&needle))
}
