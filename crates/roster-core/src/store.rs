//! The `DirectoryStore` trait and the all-or-nothing snapshot loader.
//!
//! The content store is an external collaborator: it owns every record's
//! lifecycle, enforces the `active` filter, and may sit behind any transport.
//! The engine only ever consumes the five list operations below. All methods
//! return `Send` futures so the trait works in multi-threaded async runtimes.

use std::future::Future;

use crate::{
  person::{FacultyRecord, Person, StaffRecord, StudentRecord},
  query::{self, Directory, QueryParams},
  research::{FacetIndex, ResearchArea, ResearchAreaLink},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the directory's content store backend.
///
/// Every list operation returns only active records; inactive rows never
/// reach the engine.
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn list_faculty(
    &self,
  ) -> impl Future<Output = Result<Vec<FacultyRecord>, Self::Error>> + Send + '_;

  fn list_staff(
    &self,
  ) -> impl Future<Output = Result<Vec<StaffRecord>, Self::Error>> + Send + '_;

  /// Active students, each with their advisor summary resolved (id, name,
  /// slug only — never the full faculty record).
  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<StudentRecord>, Self::Error>> + Send + '_;

  fn list_research_areas(
    &self,
  ) -> impl Future<Output = Result<Vec<ResearchArea>, Self::Error>> + Send + '_;

  fn list_research_area_links(
    &self,
  ) -> impl Future<Output = Result<Vec<ResearchAreaLink>, Self::Error>> + Send + '_;
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Everything one directory view needs, assembled in one shot.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
  pub directory: Directory,
  pub areas:     Vec<ResearchArea>,
  pub index:     FacetIndex,
}

impl DirectorySnapshot {
  /// Run the query pipeline over this snapshot.
  pub fn query(&self, params: &QueryParams) -> Vec<Person> {
    query::query(&self.directory, &self.areas, &self.index, params)
  }

  /// Badge count for one tab.
  pub fn count(&self, category: crate::category::Category) -> usize {
    query::count_by_category(&self.directory, category)
  }
}

/// Fetch all five collections and assemble a snapshot.
///
/// Any single failure fails the whole load — a partial directory (say, staff
/// without faculty) is never handed to the pipeline. Retry means calling this
/// again from scratch.
pub async fn load_snapshot<S: DirectoryStore>(
  store: &S,
) -> Result<DirectorySnapshot, S::Error> {
  let faculty = store.list_faculty().await?;
  let staff = store.list_staff().await?;
  let students = store.list_students().await?;
  let areas = store.list_research_areas().await?;
  let links = store.list_research_area_links().await?;

  let directory = Directory {
    faculty:  faculty.into_iter().map(FacultyRecord::into_person).collect(),
    staff:    staff.into_iter().map(StaffRecord::into_person).collect(),
    students: students.into_iter().map(StudentRecord::into_person).collect(),
  };
  let index = FacetIndex::build(&links);

  Ok(DirectorySnapshot { directory, areas, index })
}
