use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::explorer::{
    ExplorerOptions, DEFAULT_LABEL, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT,
};
use crate::model::NodeId;
use crate::render::IndentMetrics;
use crate::state::SelectionMode;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub explorer: ExplorerConfig,
    pub indent: IndentMetrics,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Accessibility label, shown as the tree title
    pub label: String,
    /// Fixed row height used for virtualization
    pub row_height: u32,
    /// Rows materialized beyond each edge of the viewport
    pub overscan: usize,
    /// Selection mode: single, none
    pub selection_mode: SelectionMode,
    /// Ids expanded on startup. Unset means the sample defaults for the
    /// built-in forest and nothing for a loaded one
    pub default_expanded: Option<Vec<NodeId>>,
    /// Ids selected on startup, unset as above
    pub default_selected: Option<Vec<NodeId>>,
    /// Forest document to load instead of the sample data
    pub forest: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color scheme: auto, none
    pub color_scheme: String,
    /// Capture mouse clicks and wheel
    pub mouse: bool,
    /// Indentation of terminal rows, in cells
    #[serde(deserialize_with = "cell_indent")]
    pub indent: IndentMetrics,
}

/// Fields of an indent section; missing ones keep a base value.
#[derive(Debug, Default, Deserialize)]
struct IndentOverrides {
    unit: Option<u32>,
    base: Option<u32>,
    leaf_offset: Option<u32>,
}

impl IndentOverrides {
    fn over(self, metrics: IndentMetrics) -> IndentMetrics {
        IndentMetrics {
            unit: self.unit.unwrap_or(metrics.unit),
            base: self.base.unwrap_or(metrics.base),
            leaf_offset: self.leaf_offset.unwrap_or(metrics.leaf_offset),
        }
    }
}

/// `[tui.indent]` fills unset fields from the cell metrics, not the pixel ones.
fn cell_indent<'de, D>(deserializer: D) -> Result<IndentMetrics, D::Error>
where
    D: Deserializer<'de>,
{
    IndentOverrides::deserialize(deserializer).map(|overrides| overrides.over(IndentMetrics::CELLS))
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            selection_mode: SelectionMode::Single,
            default_expanded: None,
            default_selected: None,
            forest: None,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            color_scheme: "auto".to_string(),
            mouse: true,
            indent: IndentMetrics::CELLS,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/file-explorer/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("file-explorer").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.explorer.row_height == 0 {
            return Err(ConfigError::Invalid(
                "explorer.row_height must be greater than 0".into(),
            ));
        }
        if !matches!(self.tui.color_scheme.as_str(), "auto" | "none") {
            return Err(ConfigError::Invalid(format!(
                "tui.color_scheme must be 'auto' or 'none', got '{}'",
                self.tui.color_scheme
            )));
        }
        Ok(())
    }

    /// Explorer construction properties described by this configuration.
    ///
    /// Unset startup ids leave nothing expanded or selected.
    pub fn explorer_options(&self) -> ExplorerOptions {
        ExplorerOptions::new()
            .with_label(self.explorer.label.clone())
            .with_row_height(self.explorer.row_height)
            .with_overscan(self.explorer.overscan)
            .with_selection_mode(self.explorer.selection_mode)
            .with_expanded(self.explorer.default_expanded.iter().flatten().copied())
            .with_selected(self.explorer.default_selected.iter().flatten().copied())
            .with_indent(self.indent)
    }
}
