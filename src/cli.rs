//! Offline command-line tooling for the importer and the list cache.

use clap::{Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::bulk::BulkCreateRequest;
use crate::api::filter::{GameFilter, GameOrder};
use crate::cache::CollectionKey;
use crate::config::Config;
use crate::importer::{ImportBatch, RECOGNIZED_COLUMNS};

#[derive(Parser, Debug)]
#[command(name = "questlog")]
#[command(about = "Import tooling and cache diagnostics for the Questlog achievement tracker")]
#[command(version)]
pub struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/questlog/config.yaml)
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Parse an achievement CSV and preview the records it would create
  Import {
    /// CSV file to read
    file: PathBuf,

    /// Achievement set the records belong to (falls back to `import.default_set`)
    #[arg(short, long)]
    set: Option<String>,

    /// Emit the bulk-create mutation variables as JSON instead of a preview
    #[arg(long)]
    json: bool,
  },

  /// Print a CSV template with the recognized columns
  Template,

  /// Show the cache signature a games request resolves to
  CacheKey {
    /// Search text filter
    #[arg(long)]
    search: Option<String>,

    /// Platform id filter
    #[arg(long)]
    platform: Option<String>,

    /// Keep only games with achievements (or without, when false)
    #[arg(long)]
    has_achievements: Option<bool>,

    /// Sort order, e.g. TITLE_ASC or CREATED_AT_DESC
    #[arg(long, default_value = "TITLE_ASC", value_parser = parse_game_order)]
    order: GameOrder,
  },
}

pub fn run(args: Args) -> Result<()> {
  let config = Config::load(args.config.as_deref())?;

  match args.command {
    Command::Import { file, set, json } => run_import(&config, &file, set, json),
    Command::Template => {
      print_template();
      Ok(())
    }
    Command::CacheKey {
      search,
      platform,
      has_achievements,
      order,
    } => run_cache_key(search, platform, has_achievements, order),
  }
}

fn run_import(config: &Config, file: &Path, set: Option<String>, json: bool) -> Result<()> {
  let raw = std::fs::read_to_string(file)
    .map_err(|e| eyre!("Failed to read {}: {}", file.display(), e))?;
  let batch = ImportBatch::parse(strip_bom(&raw)).map_err(|e| eyre!("{e}"))?;
  let set = set.or_else(|| config.import.default_set.clone());

  if json {
    let set = set.ok_or_else(|| {
      eyre!("An achievement set is required for --json; pass --set or configure import.default_set")
    })?;
    let request = BulkCreateRequest::new(set, batch);
    println!("{}", serde_json::to_string_pretty(&request)?);
    return Ok(());
  }

  info!(file = %file.display(), records = batch.len(), "parsed import file");
  println!("{} record(s) ready to import", batch.len());
  for record in batch.records() {
    match &record.description {
      Some(description) => println!("  [{:>3} pts] {} - {}", record.points, record.title, description),
      None => println!("  [{:>3} pts] {}", record.points, record.title),
    }
  }
  match set {
    Some(set) => println!("Target achievement set: {set}"),
    None => println!("No achievement set selected; pass --set to build mutation variables"),
  }
  Ok(())
}

fn print_template() {
  println!("{}", RECOGNIZED_COLUMNS.join(","));
  println!("First Blood,Defeat your first boss,10,https://cdn.example.com/icons/first-blood.png");
  println!("Collector,\"Find 50 relics, in any order\",25,");
}

fn run_cache_key(
  search: Option<String>,
  platform: Option<String>,
  has_achievements: Option<bool>,
  order: GameOrder,
) -> Result<()> {
  let key = CollectionKey::Games {
    filter: GameFilter {
      search,
      platform_id: platform,
      has_achievements,
    },
    order,
  };
  println!("list:      {}", key.describe());
  println!("signature: {}", key.signature());
  Ok(())
}

/// Spreadsheet exports often lead with a UTF-8 byte-order mark; without
/// stripping it the first header cell would read as "\u{feff}title" and
/// never match.
fn strip_bom(text: &str) -> &str {
  text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn parse_game_order(value: &str) -> Result<GameOrder, String> {
  value.parse()
}
