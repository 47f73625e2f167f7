//! [`SqliteStore`] — the SQLite implementation of [`DirectoryStore`].

use std::path::Path;

use chrono::Utc;

use roster_core::{
  person::{FacultyRecord, StaffRecord, StudentRecord},
  research::{ResearchArea, ResearchAreaLink},
  store::DirectoryStore,
};

use crate::{
  encode::{
    encode_dt, encode_interests, RawArea, RawFaculty, RawStaff, RawStudent,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster directory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

// ─── Seed inputs ─────────────────────────────────────────────────────────────

/// Input for a new faculty row; the id and creation time are store-assigned.
#[derive(Debug, Clone, Default)]
pub struct NewFaculty {
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub title:              Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  pub research_interests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewStaff {
  pub first_name: String,
  pub last_name:  String,
  pub full_name:  Option<String>,
  pub slug:       Option<String>,
  pub title:      Option<String>,
  pub email:      String,
  pub phone:      Option<String>,
  pub office:     Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewStudent {
  pub first_name:         String,
  pub last_name:          String,
  pub full_name:          Option<String>,
  pub slug:               Option<String>,
  pub degree_program:     Option<String>,
  pub email:              String,
  pub phone:              Option<String>,
  pub office:             Option<String>,
  pub research_interests: Vec<String>,
  /// Must reference an existing faculty row; enforced by the schema.
  pub advisor_id:         Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewResearchArea {
  pub name:     String,
  /// Broad-category label, stored verbatim and decoded totally on read.
  pub category: String,
  pub slug:     Option<String>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  pub async fn add_faculty(&self, input: NewFaculty) -> Result<FacultyRecord> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let interests_str = encode_interests(&input.research_interests)?;
    let row = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO faculty (
             first_name, last_name, full_name, slug, title,
             email, phone, office, research_interests, active, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1, ?10)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.full_name,
            row.slug,
            row.title,
            row.email,
            row.phone,
            row.office,
            interests_str,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(FacultyRecord {
      id,
      first_name: input.first_name,
      last_name: input.last_name,
      full_name: input.full_name,
      slug: input.slug,
      title: input.title,
      email: input.email,
      phone: input.phone,
      office: input.office,
      research_interests: input.research_interests,
      active: true,
      created_at,
    })
  }

  pub async fn add_staff(&self, input: NewStaff) -> Result<StaffRecord> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let row = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO staff (
             first_name, last_name, full_name, slug, title,
             email, phone, office, active, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1, ?9)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.full_name,
            row.slug,
            row.title,
            row.email,
            row.phone,
            row.office,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(StaffRecord {
      id,
      first_name: input.first_name,
      last_name: input.last_name,
      full_name: input.full_name,
      slug: input.slug,
      title: input.title,
      email: input.email,
      phone: input.phone,
      office: input.office,
      active: true,
      created_at,
    })
  }

  /// Insert a student row. The advisor summary on the returned record is
  /// resolved on the next read, not here.
  pub async fn add_student(&self, input: NewStudent) -> Result<StudentRecord> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let interests_str = encode_interests(&input.research_interests)?;
    let row = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO students (
             first_name, last_name, full_name, slug, degree_program,
             email, phone, office, research_interests, advisor_id,
             active, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 1, ?11)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.full_name,
            row.slug,
            row.degree_program,
            row.email,
            row.phone,
            row.office,
            interests_str,
            row.advisor_id,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(StudentRecord {
      id,
      first_name: input.first_name,
      last_name: input.last_name,
      full_name: input.full_name,
      slug: input.slug,
      degree_program: input.degree_program,
      email: input.email,
      phone: input.phone,
      office: input.office,
      research_interests: input.research_interests,
      advisor: None,
      active: true,
      created_at,
    })
  }

  pub async fn add_research_area(
    &self,
    input: NewResearchArea,
  ) -> Result<ResearchArea> {
    let row = input.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO research_areas (name, category, slug) VALUES (?1, ?2, ?3)",
          rusqlite::params![row.name, row.category, row.slug],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(ResearchArea {
      id,
      name: input.name,
      category: input.category.into(),
      slug: input.slug,
    })
  }

  /// Associate a faculty member with a research area. Idempotent — relinking
  /// an existing pair is a no-op.
  pub async fn link_research_area(
    &self,
    faculty_id: i64,
    research_area_id: i64,
  ) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR IGNORE INTO faculty_research_areas
             (faculty_id, research_area_id) VALUES (?1, ?2)",
          rusqlite::params![faculty_id, research_area_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Soft-delete: the row stays for referential integrity but no longer
  /// reaches the engine.
  pub async fn deactivate_faculty(&self, id: i64) -> Result<()> {
    self.deactivate("faculty", id).await
  }

  pub async fn deactivate_staff(&self, id: i64) -> Result<()> {
    self.deactivate("staff", id).await
  }

  pub async fn deactivate_student(&self, id: i64) -> Result<()> {
    self.deactivate("students", id).await
  }

  async fn deactivate(&self, table: &'static str, id: i64) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        let sql = format!("UPDATE {table} SET active = 0 WHERE id = ?1");
        Ok(conn.execute(&sql, rusqlite::params![id])?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::NotFound(table, id));
    }
    Ok(())
  }
}

// ─── DirectoryStore impl ─────────────────────────────────────────────────────

impl DirectoryStore for SqliteStore {
  type Error = Error;

  async fn list_faculty(&self) -> Result<Vec<FacultyRecord>> {
    let raws: Vec<RawFaculty> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, first_name, last_name, full_name, slug, title,
                  email, phone, office, research_interests, active, created_at
           FROM faculty
           WHERE active = 1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawFaculty {
              id:                 row.get(0)?,
              first_name:         row.get(1)?,
              last_name:          row.get(2)?,
              full_name:          row.get(3)?,
              slug:               row.get(4)?,
              title:              row.get(5)?,
              email:              row.get(6)?,
              phone:              row.get(7)?,
              office:             row.get(8)?,
              research_interests: row.get(9)?,
              active:             row.get(10)?,
              created_at:         row.get(11)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFaculty::into_record).collect()
  }

  async fn list_staff(&self) -> Result<Vec<StaffRecord>> {
    let raws: Vec<RawStaff> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, first_name, last_name, full_name, slug, title,
                  email, phone, office, active, created_at
           FROM staff
           WHERE active = 1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawStaff {
              id:         row.get(0)?,
              first_name: row.get(1)?,
              last_name:  row.get(2)?,
              full_name:  row.get(3)?,
              slug:       row.get(4)?,
              title:      row.get(5)?,
              email:      row.get(6)?,
              phone:      row.get(7)?,
              office:     row.get(8)?,
              active:     row.get(9)?,
              created_at: row.get(10)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStaff::into_record).collect()
  }

  async fn list_students(&self) -> Result<Vec<StudentRecord>> {
    let raws: Vec<RawStudent> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             st.id, st.first_name, st.last_name, st.full_name, st.slug,
             st.degree_program, st.email, st.phone, st.office,
             st.research_interests, st.active, st.created_at,
             f.id        AS advisor_id,
             f.full_name AS advisor_full_name,
             f.last_name AS advisor_last_name,
             f.slug      AS advisor_slug
           FROM students st
           LEFT JOIN faculty f ON f.id = st.advisor_id
           WHERE st.active = 1
           ORDER BY st.id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawStudent {
              id:                 row.get(0)?,
              first_name:         row.get(1)?,
              last_name:          row.get(2)?,
              full_name:          row.get(3)?,
              slug:               row.get(4)?,
              degree_program:     row.get(5)?,
              email:              row.get(6)?,
              phone:              row.get(7)?,
              office:             row.get(8)?,
              research_interests: row.get(9)?,
              active:             row.get(10)?,
              created_at:         row.get(11)?,
              advisor_id:         row.get(12)?,
              advisor_full_name:  row.get(13)?,
              advisor_last_name:  row.get(14)?,
              advisor_slug:       row.get(15)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStudent::into_record).collect()
  }

  async fn list_research_areas(&self) -> Result<Vec<ResearchArea>> {
    let raws: Vec<RawArea> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, category, slug FROM research_areas ORDER BY name",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawArea {
              id:       row.get(0)?,
              name:     row.get(1)?,
              category: row.get(2)?,
              slug:     row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(raws.into_iter().map(RawArea::into_area).collect())
  }

  async fn list_research_area_links(&self) -> Result<Vec<ResearchAreaLink>> {
    let links: Vec<ResearchAreaLink> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT faculty_id, research_area_id FROM faculty_research_areas",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(ResearchAreaLink {
              faculty_id:       row.get(0)?,
              research_area_id: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(links)
  }
}
