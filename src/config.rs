//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the shipped `config.toml` (connection, ui, colors and
//! keybinds), extracts embedded defaults on first run and resolves the data
//! directory (`~/.devotion-tui`, overridable via `DEVOTION_TUI_DIR`).

use crate::core::actions::KeyAction;
use crate::data::{InteractionMode, StarVisual};
use crate::protocol::Affinity;
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration files at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");
pub const DEFAULT_STARS: &str = include_str!("../defaults/stars.toml");

// Embed entire directory - automatically includes all files
static DEFAULTS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/defaults");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "DEVOTION_TUI_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_keybinds")]
    pub keybinds: HashMap<String, KeyAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub default_mode: InteractionMode,
    #[serde(default = "default_true")]
    pub show_tooltips: bool,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Hex colors for every star visual and affinity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub disabled: String,
    pub disabled_glow: String,
    pub unlockable: String,
    pub unlockable_glow: String,
    pub unlocked: String,
    pub unlocked_glow: String,
    pub skill: String,
    pub skill_glow: String,
    pub ascendant: String,
    pub chaos: String,
    pub eldritch: String,
    pub order: String,
    pub primordial: String,
    pub active_button: String,
    pub inactive_button: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_mode: InteractionMode::default(),
            show_tooltips: true,
            poll_interval_ms: default_poll_interval_ms(),
            colors: ColorConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            disabled: "#5f5f5f".to_string(),
            disabled_glow: "#9e9e9e".to_string(),
            unlockable: "#87d7ff".to_string(),
            unlockable_glow: "#d7ffff".to_string(),
            unlocked: "#ffd75f".to_string(),
            unlocked_glow: "#ffff87".to_string(),
            skill: "#af87ff".to_string(),
            skill_glow: "#d7afff".to_string(),
            ascendant: "#5fd75f".to_string(),
            chaos: "#d75f5f".to_string(),
            eldritch: "#af5fd7".to_string(),
            order: "#ffd700".to_string(),
            primordial: "#5fafff".to_string(),
            active_button: "#90ee90".to_string(),
            inactive_button: "#9baba8".to_string(),
        }
    }
}

impl ColorConfig {
    pub fn star_color(&self, visual: StarVisual) -> &str {
        match visual {
            StarVisual::Disabled => &self.disabled,
            StarVisual::DisabledGlow => &self.disabled_glow,
            StarVisual::Unlockable => &self.unlockable,
            StarVisual::UnlockableGlow => &self.unlockable_glow,
            StarVisual::Unlocked => &self.unlocked,
            StarVisual::UnlockedGlow => &self.unlocked_glow,
            StarVisual::Skill => &self.skill,
            StarVisual::SkillGlow => &self.skill_glow,
        }
    }

    pub fn affinity_color(&self, affinity: Affinity) -> &str {
        match affinity {
            Affinity::Ascendant => &self.ascendant,
            Affinity::Chaos => &self.chaos,
            Affinity::Eldritch => &self.eldritch,
            Affinity::Order => &self.order,
            Affinity::Primordial => &self.primordial,
        }
    }

    pub fn mode_button(&self, active: bool) -> &str {
        if active {
            &self.active_button
        } else {
            &self.inactive_button
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_poll_interval_ms() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

/// Keybinds shipped in the embedded `config.toml`
pub fn default_keybinds() -> HashMap<String, KeyAction> {
    #[derive(Deserialize)]
    struct KeybindsOnly {
        keybinds: HashMap<String, KeyAction>,
    }

    match toml::from_str::<KeybindsOnly>(DEFAULT_CONFIG) {
        Ok(parsed) => parsed.keybinds,
        Err(e) => {
            tracing::error!("Embedded keybinds are invalid: {}", e);
            HashMap::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            ui: UiConfig::default(),
            keybinds: default_keybinds(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the data directory, extracting defaults first
    pub fn load() -> Result<Self> {
        // Idempotent - only creates missing files
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::parse_file(&config_path)
    }

    /// Load config from a custom file path
    ///
    /// Defaults are still extracted so the star catalog is available.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        Self::extract_defaults()?;
        Self::parse_file(path)
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse config TOML content
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.keybinds.is_empty() {
            tracing::warn!("No keybinds configured, keyboard input will be ignored");
        }
        Ok(config)
    }

    /// Extract default files on first run
    ///
    /// Writes every embedded file from `defaults/` that does not exist yet:
    /// - ~/.devotion-tui/config.toml
    /// - ~/.devotion-tui/stars.toml
    fn extract_defaults() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;

        for file in DEFAULTS_DIR.files() {
            let filename = file
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .context("Invalid default filename")?;
            let target = dir.join(filename);

            if !target.exists() {
                fs::write(&target, file.contents())
                    .with_context(|| format!("Failed to write {}", filename))?;
                tracing::info!("Extracted {} to {:?}", filename, target);
            }
        }

        Ok(())
    }

    /// Get the base directory (~/.devotion-tui/)
    /// Can be overridden with DEVOTION_TUI_DIR environment variable
    fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".devotion-tui"))
    }

    /// Returns: ~/.devotion-tui/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns: ~/.devotion-tui/stars.toml
    pub fn stars_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("stars.toml"))
    }
}
