use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub import: ImportConfig,
  /// Page size for collection requests.
  #[serde(default = "default_page_size")]
  pub page_size: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      import: ImportConfig::default(),
      page_size: default_page_size(),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportConfig {
  /// Achievement set to target when the command line does not name one
  #[serde(default)]
  pub default_set: Option<String>,
}

fn default_page_size() -> u32 {
  DEFAULT_PAGE_SIZE
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./questlog.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/questlog/config.yaml
  /// 4. ~/.config/questlog/config.yaml
  ///
  /// Every setting has a default, so when no file exists anywhere the
  /// defaults are used. An explicit path that does not exist is still an
  /// error, since the caller clearly expected that file to be read.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    match path {
      Some(p) => Self::load_from_path(&p),
      None => Ok(Self::default()),
    }
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("questlog.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("questlog").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    let config: Config = serde_yaml::from_str(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

    Ok(config)
  }
}
