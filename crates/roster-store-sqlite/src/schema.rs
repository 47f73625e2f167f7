//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- The three people collections keep independent id sequences, matching the
-- upstream content store. Cross-collection identity is (collection, id).
CREATE TABLE IF NOT EXISTS faculty (
    id                 INTEGER PRIMARY KEY,
    first_name         TEXT NOT NULL,
    last_name          TEXT NOT NULL,
    full_name          TEXT,
    slug               TEXT,
    title              TEXT,            -- free text; classified by substring
    email              TEXT NOT NULL,
    phone              TEXT,
    office             TEXT,
    research_interests TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    active             INTEGER NOT NULL DEFAULT 1,
    created_at         TEXT NOT NULL    -- ISO 8601 UTC
);

CREATE TABLE IF NOT EXISTS staff (
    id         INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    full_name  TEXT,
    slug       TEXT,
    title      TEXT,
    email      TEXT NOT NULL,
    phone      TEXT,
    office     TEXT,
    active     INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS students (
    id                 INTEGER PRIMARY KEY,
    first_name         TEXT NOT NULL,
    last_name          TEXT NOT NULL,
    full_name          TEXT,
    slug               TEXT,
    degree_program     TEXT,            -- 'PhD' | 'MS' | 'Combined BS-MS' | ...
    email              TEXT NOT NULL,
    phone              TEXT,
    office             TEXT,
    research_interests TEXT NOT NULL DEFAULT '[]',
    advisor_id         INTEGER REFERENCES faculty(id),
    active             INTEGER NOT NULL DEFAULT 1,
    created_at         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS research_areas (
    id       INTEGER PRIMARY KEY,
    name     TEXT NOT NULL,
    category TEXT NOT NULL,   -- broad-category label, e.g. 'Marine Biology'
    slug     TEXT
);

-- Many-to-many edges between faculty and research areas.
CREATE TABLE IF NOT EXISTS faculty_research_areas (
    faculty_id       INTEGER NOT NULL REFERENCES faculty(id),
    research_area_id INTEGER NOT NULL REFERENCES research_areas(id),
    UNIQUE (faculty_id, research_area_id)
);

CREATE INDEX IF NOT EXISTS faculty_active_idx  ON faculty(active);
CREATE INDEX IF NOT EXISTS staff_active_idx    ON staff(active);
CREATE INDEX IF NOT EXISTS students_active_idx ON students(active);
CREATE INDEX IF NOT EXISTS fra_area_idx ON faculty_research_areas(research_area_id);

PRAGMA user_version = 1;
";
