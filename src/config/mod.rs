//! Configuration Management
//!
//! Loads devnanny configuration from TOML files.
//! Configuration includes:
//! - Balloon layout (line budget, padding glyph, vertical padding, art file)
//! - Hook settings (command run by the installed hook, force replace)
//!
//! Values are fixed once loaded; the renderer receives them explicitly
//! instead of reading globals.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::NannyError;
use crate::ui::balloon::check_limits;
use crate::ui::{ArtTemplate, BalloonRenderer};

pub const CONFIG_FILE_NAME: &str = "devnanny.toml";

pub const ENV_LINE_BUDGET: &str = "DEVNANNY_LINE_BUDGET";
pub const ENV_ART: &str = "DEVNANNY_ART";
pub const ENV_PADDING_GLYPH: &str = "DEVNANNY_PADDING_GLYPH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub balloon: BalloonSettings,

    #[serde(default)]
    pub hook: HookSettings,
}

/// Layout of the speech balloon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalloonSettings {
    /// Total columns available per output row (art + balloon)
    #[serde(default = "default_line_budget")]
    pub line_budget: usize,
    /// Glyph used to pad art rows and center text
    #[serde(default = "default_padding_glyph")]
    pub padding_glyph: char,
    /// Blank rows inside the balloon above and below the message
    #[serde(default = "default_vertical_padding")]
    pub vertical_padding: usize,
    /// Art file to draw instead of the built-in nanny
    #[serde(default)]
    pub art_path: Option<PathBuf>,
}

impl Default for BalloonSettings {
    fn default() -> Self {
        Self {
            line_budget: default_line_budget(),
            padding_glyph: default_padding_glyph(),
            vertical_padding: default_vertical_padding(),
            art_path: None,
        }
    }
}

/// What the installed git hook does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookSettings {
    /// Shell command the pre-commit hook runs
    #[serde(default = "default_hook_command")]
    pub command: String,
    /// Replace a foreign hook instead of refusing
    #[serde(default)]
    pub force: bool,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            command: default_hook_command(),
            force: false,
        }
    }
}

fn default_line_budget() -> usize {
    78
}
fn default_padding_glyph() -> char {
    ' '
}
fn default_vertical_padding() -> usize {
    1
}
fn default_hook_command() -> String {
    "dev-nanny pre-commit".to_string()
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_file(Path::new(p))?,
            None => {
                let mut default_paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
                if let Some(home) = dirs::home_dir() {
                    default_paths.push(home.join(".config/devnanny/config.toml"));
                }

                match default_paths.iter().find(|p| p.is_file()) {
                    Some(p) => Self::load_file(p)?,
                    None => {
                        debug!("No config file found, using defaults");
                        Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse one config file. A relative `art_path` is taken relative to the
    /// directory holding the file.
    pub fn load_file(path: &Path) -> std::result::Result<Self, NannyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NannyError::Config(format!(
                "Failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            NannyError::Config(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            ))
        })?;

        if let (Some(art), Some(dir)) = (&config.balloon.art_path, path.parent()) {
            if art.is_relative() {
                config.balloon.art_path = Some(dir.join(art));
            }
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Override values from environment-style lookups. Unparseable values are
    /// ignored with a warning.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(budget) = lookup(ENV_LINE_BUDGET) {
            match budget.trim().parse::<usize>() {
                Ok(n) => self.balloon.line_budget = n,
                Err(_) => warn!(value = %budget, "Ignoring invalid {}", ENV_LINE_BUDGET),
            }
        }
        if let Some(art) = lookup(ENV_ART) {
            if !art.is_empty() {
                self.balloon.art_path = Some(PathBuf::from(art));
            }
        }
        if let Some(glyph) = lookup(ENV_PADDING_GLYPH) {
            let mut chars = glyph.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.balloon.padding_glyph = c,
                _ => warn!(value = %glyph, "Ignoring invalid {}", ENV_PADDING_GLYPH),
            }
        }
    }

    /// Reject values no renderer or hook could work with.
    pub fn validate(&self) -> std::result::Result<(), NannyError> {
        check_limits(&self.balloon)?;
        if self.balloon.padding_glyph.is_control() {
            return Err(NannyError::Config(
                "balloon.padding_glyph must be a printable character".to_string(),
            ));
        }
        if self.hook.command.trim().is_empty() {
            return Err(NannyError::Config(
                "hook.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the configured art and build the renderer.
    ///
    /// Fails fast: a missing art file or a budget too small for the art
    /// stops startup rather than any later message.
    pub fn renderer(&self) -> std::result::Result<BalloonRenderer, NannyError> {
        let art = match &self.balloon.art_path {
            Some(path) => ArtTemplate::load(path)?,
            None => ArtTemplate::nanny(),
        };
        BalloonRenderer::new(art, &self.balloon)
    }
}
