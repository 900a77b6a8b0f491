use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use habits_core::config::{DEFAULT_ENTRIES_FILE, DEFAULT_GOALS_FILE};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitsConfig {
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageSection {
    pub entries_path: Option<String>,
    pub goals_path: Option<String>,
}

impl HabitsConfig {
    pub fn new(entries_path: PathBuf, goals_path: PathBuf) -> Self {
        Self {
            storage: StorageSection {
                entries_path: Some(entries_path.to_string_lossy().to_string()),
                goals_path: Some(goals_path.to_string_lossy().to_string()),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_entries_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_ENTRIES_FILE))
}

pub fn default_goals_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_GOALS_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<HabitsConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &HabitsConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("habits"));
        }
    }
    Ok(home_dir()?.join(".config").join("habits"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("habits"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("habits"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
