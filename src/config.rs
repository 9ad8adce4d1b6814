//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gss/gss.toml`
//! 3. Local config: `.gss.toml` in the directory of the entry file
//! 4. Environment variables: `GSS_*` prefix

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::GraphNode;

/// Order applied to the children of every node after a graph is loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChildOrder {
    /// Keep edge-creation order.
    #[default]
    Insertion,
    /// Sort by node key.
    Key,
    /// Sort by node contents.
    Contents,
}

impl ChildOrder {
    /// Comparator for this order, `None` for insertion order.
    pub fn comparator<C: Ord>(self) -> Option<fn(&GraphNode<C>, &GraphNode<C>) -> Ordering> {
        match self {
            ChildOrder::Insertion => None,
            ChildOrder::Key => Some(by_key::<C>),
            ChildOrder::Contents => Some(by_contents::<C>),
        }
    }
}

fn by_key<C>(a: &GraphNode<C>, b: &GraphNode<C>) -> Ordering {
    a.key().cmp(b.key())
}

fn by_contents<C: Ord>(a: &GraphNode<C>, b: &GraphNode<C>) -> Ordering {
    a.contents().cmp(b.contents())
}

impl FromStr for ChildOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(ChildOrder::Insertion),
            "key" => Ok(ChildOrder::Key),
            "contents" => Ok(ChildOrder::Contents),
            other => Err(format!(
                "unknown child order '{}', expected insertion, key or contents",
                other
            )),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub child_order: Option<ChildOrder>,
    pub show_contents: Option<bool>,
    pub mark_shared: Option<bool>,
}

/// Unified configuration for gss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Child order applied after loading
    pub child_order: ChildOrder,
    /// Show node contents next to keys in tree output
    pub show_contents: bool,
    /// Mark nodes reachable through more than one parent
    pub mark_shared: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            child_order: ChildOrder::Insertion,
            show_contents: true,
            mark_shared: true,
        }
    }
}

/// Get the XDG config directory for gss.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gss").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gss.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".gss.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            child_order: overlay.child_order.unwrap_or(self.child_order),
            show_contents: overlay.show_contents.unwrap_or(self.show_contents),
            mark_shared: overlay.mark_shared.unwrap_or(self.mark_shared),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.gss.toml` (usually the
    ///   directory of the entry file)
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply GSS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("GSS").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("child_order") {
            settings.child_order = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("show_contents") {
            settings.show_contents = val;
        }
        if let Ok(val) = config.get_bool("mark_shared") {
            settings.mark_shared = val;
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
