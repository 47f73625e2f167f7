//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{
  category::Category,
  query::QueryParams,
  research::ResearchCategory,
  store::{load_snapshot, DirectoryStore},
};

use crate::{NewFaculty, NewResearchArea, NewStaff, NewStudent, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn professor(last_name: &str, title: &str) -> NewFaculty {
  NewFaculty {
    first_name: "Ada".into(),
    last_name: last_name.into(),
    title: Some(title.into()),
    email: format!("{}@example.edu", last_name.to_lowercase()),
    ..Default::default()
  }
}

fn coordinator(last_name: &str) -> NewStaff {
  NewStaff {
    first_name: "May".into(),
    last_name: last_name.into(),
    title: Some("Program Coordinator".into()),
    email: format!("{}@example.edu", last_name.to_lowercase()),
    ..Default::default()
  }
}

fn grad(last_name: &str, advisor_id: Option<i64>) -> NewStudent {
  NewStudent {
    first_name: "Iris".into(),
    last_name: last_name.into(),
    degree_program: Some("PhD".into()),
    email: format!("{}@example.edu", last_name.to_lowercase()),
    advisor_id,
    ..Default::default()
  }
}

// ─── Faculty ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_faculty() {
  let s = store().await;

  let mut input = professor("Young", "Professor");
  input.research_interests =
    vec!["Kelp forests".into(), "Ocean acidification".into()];
  let added = s.add_faculty(input).await.unwrap();

  let listed = s.list_faculty().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, added.id);
  assert_eq!(listed[0].title.as_deref(), Some("Professor"));
  assert_eq!(
    listed[0].research_interests,
    ["Kelp forests", "Ocean acidification"]
  );
}

#[tokio::test]
async fn ids_are_assigned_sequentially_per_table() {
  let s = store().await;

  let f = s.add_faculty(professor("Young", "Professor")).await.unwrap();
  let st = s.add_staff(coordinator("Chu")).await.unwrap();

  // Independent sequences: both tables start at 1.
  assert_eq!(f.id, 1);
  assert_eq!(st.id, 1);
}

#[tokio::test]
async fn deactivated_faculty_are_filtered_from_lists() {
  let s = store().await;

  let keep = s.add_faculty(professor("Young", "Professor")).await.unwrap();
  let gone = s.add_faculty(professor("Briggs", "Lecturer")).await.unwrap();

  s.deactivate_faculty(gone.id).await.unwrap();

  let listed = s.list_faculty().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, keep.id);
}

#[tokio::test]
async fn deactivate_missing_row_errors() {
  let s = store().await;
  let err = s.deactivate_faculty(99).await.unwrap_err();
  assert!(matches!(err, crate::Error::NotFound("faculty", 99)));
}

// ─── Staff and students ──────────────────────────────────────────────────────

#[tokio::test]
async fn deactivated_staff_and_students_are_filtered() {
  let s = store().await;

  s.add_staff(coordinator("Chu")).await.unwrap();
  let gone = s.add_staff(coordinator("Marsh")).await.unwrap();
  s.deactivate_staff(gone.id).await.unwrap();

  s.add_student(grad("Vale", None)).await.unwrap();
  let dropped = s.add_student(grad("Finch", None)).await.unwrap();
  s.deactivate_student(dropped.id).await.unwrap();

  assert_eq!(s.list_staff().await.unwrap().len(), 1);
  assert_eq!(s.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn student_advisor_summary_is_joined() {
  let s = store().await;

  let advisor = s
    .add_faculty(NewFaculty {
      full_name: Some("Todd Young".into()),
      slug: Some("todd-young".into()),
      ..professor("Young", "Professor")
    })
    .await
    .unwrap();
  s.add_student(grad("Vale", Some(advisor.id))).await.unwrap();

  let students = s.list_students().await.unwrap();
  assert_eq!(students.len(), 1);

  let a = students[0].advisor.as_ref().unwrap();
  assert_eq!(a.id, advisor.id);
  assert_eq!(a.full_name.as_deref(), Some("Todd Young"));
  assert_eq!(a.last_name.as_deref(), Some("Young"));
  assert_eq!(a.slug.as_deref(), Some("todd-young"));
}

#[tokio::test]
async fn student_without_advisor_lists_fine() {
  let s = store().await;
  s.add_student(grad("Vale", None)).await.unwrap();

  let students = s.list_students().await.unwrap();
  assert!(students[0].advisor.is_none());
}

// ─── Research areas ──────────────────────────────────────────────────────────

#[tokio::test]
async fn areas_decode_their_category_labels() {
  let s = store().await;

  s.add_research_area(NewResearchArea {
    name: "Coral Reefs".into(),
    category: "Marine Biology".into(),
    ..Default::default()
  })
  .await
  .unwrap();
  s.add_research_area(NewResearchArea {
    name: "Mystery Studies".into(),
    category: "Cryptozoology".into(),
    ..Default::default()
  })
  .await
  .unwrap();

  let areas = s.list_research_areas().await.unwrap();
  assert_eq!(areas.len(), 2);

  let coral = areas.iter().find(|a| a.name == "Coral Reefs").unwrap();
  assert_eq!(coral.category, ResearchCategory::MarineBiology);

  // Unknown labels fold into Other instead of failing the whole load.
  let odd = areas.iter().find(|a| a.name == "Mystery Studies").unwrap();
  assert_eq!(odd.category, ResearchCategory::Other);
}

#[tokio::test]
async fn linking_is_idempotent() {
  let s = store().await;

  let f = s.add_faculty(professor("Young", "Professor")).await.unwrap();
  let area = s
    .add_research_area(NewResearchArea {
      name: "Coral Reefs".into(),
      category: "Marine Biology".into(),
      ..Default::default()
    })
    .await
    .unwrap();

  s.link_research_area(f.id, area.id).await.unwrap();
  s.link_research_area(f.id, area.id).await.unwrap();

  let links = s.list_research_area_links().await.unwrap();
  assert_eq!(links.len(), 1);
  assert_eq!(links[0].faculty_id, f.id);
  assert_eq!(links[0].research_area_id, area.id);
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn snapshot_assembles_and_queries() {
  let s = store().await;

  let young = s.add_faculty(professor("Young", "Professor")).await.unwrap();
  s.add_faculty(professor("Reef", "Professor Emeritus"))
    .await
    .unwrap();
  s.add_staff(coordinator("Chu")).await.unwrap();
  s.add_student(grad("Vale", Some(young.id))).await.unwrap();

  let area = s
    .add_research_area(NewResearchArea {
      name: "Coral Reefs".into(),
      category: "Marine Biology".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  s.link_research_area(young.id, area.id).await.unwrap();

  let snapshot = load_snapshot(&s).await.unwrap();
  assert_eq!(snapshot.directory.len(), 4);
  assert_eq!(snapshot.count(Category::All), 4);
  assert_eq!(snapshot.count(Category::Faculty), 1);
  assert_eq!(snapshot.count(Category::Emeriti), 1);

  let faceted = snapshot.query(&QueryParams {
    category: Category::Faculty,
    selected_area_ids: vec![area.id],
    ..QueryParams::default()
  });
  assert_eq!(faceted.len(), 1);
  assert_eq!(faceted[0].last_name, "Young");
}
