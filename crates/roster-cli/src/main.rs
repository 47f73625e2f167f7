//! `roster` — command-line client for the roster directory server.
//!
//! # Usage
//!
//! ```
//! roster people --category faculty --search marine --sort name-desc
//! roster people --areas 2,3
//! roster counts
//! roster areas --category "Marine Biology"
//! roster --url http://directory.example.edu people
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use roster_core::person::Person;
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Command-line client for the roster directory")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the roster server (default: http://localhost:8080).
  #[arg(long, env = "ROSTER_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List people, optionally filtered and sorted.
  People {
    /// Tab to list: all, faculty, researchers, adjunct, emeriti, lecturers,
    /// staff, students.
    #[arg(long)]
    category: Option<String>,

    /// Free-text search over name, email, title, interests, degree program.
    #[arg(long)]
    search: Option<String>,

    /// Sort order, e.g. name-asc, title-desc, recent.
    #[arg(long)]
    sort: Option<String>,

    /// Comma-separated research-area ids (faculty tab only).
    #[arg(long)]
    areas: Option<String>,

    /// Broad research-category label (faculty tab only).
    #[arg(long)]
    area_category: Option<String>,
  },

  /// Show badge counts for every tab.
  Counts,

  /// List research areas.
  Areas {
    /// Broad-category label to filter by.
    #[arg(long)]
    category: Option<String>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
  };

  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::People { category, search, sort, areas, area_category } => {
      let mut query: Vec<(&str, String)> = Vec::new();
      if let Some(v) = category {
        query.push(("category", v));
      }
      if let Some(v) = search {
        query.push(("q", v));
      }
      if let Some(v) = sort {
        query.push(("sort", v));
      }
      if let Some(v) = areas {
        query.push(("areas", v));
      }
      if let Some(v) = area_category {
        query.push(("area_category", v));
      }

      let people = client.list_people(&query).await?;
      print_people(&people);
    }

    Command::Counts => {
      let counts = client.counts().await?;
      for tc in counts {
        println!("{:<12} {}", tc.category, tc.count);
      }
    }

    Command::Areas { category } => {
      let areas = client.list_areas(category.as_deref()).await?;
      for area in areas {
        println!("{:<5} {:<18} {}", area.id, area.category, area.name);
      }
    }
  }

  Ok(())
}

// ─── Output ───────────────────────────────────────────────────────────────────

fn print_people(people: &[Person]) {
  for p in people {
    let role = p
      .title
      .as_deref()
      .or(p.degree_program.as_deref())
      .unwrap_or("-");
    println!(
      "{:<28} {:<30} {:<34} {}",
      p.display_name(),
      role,
      p.email,
      p.office.as_deref().unwrap_or("-"),
    );
  }
  eprintln!("{} people", people.len());
}
