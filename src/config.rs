//! Build configuration: optional TOML file plus command-line overrides.
//!
//! ```toml
//! [dataset]
//! input = "restaurants.csv"
//! name_column = "name"
//! clean_cells = false
//!
//! [output]
//! dir = "docs"
//!
//! [site]
//! title = "Restaurants"
//! lang = "en"
//! summary_columns = ["category", "address"]
//! image_column = "photo"
//! ```
//!
//! Every table and key is optional. Relative paths in the file are resolved
//! against the directory containing the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::site::RenderOptions;
use crate::storage::{DEFAULT_NAME_COLUMN, LoadOptions};
use crate::{SiteError, SiteResult};

pub const DEFAULT_INPUT: &str = "restaurants.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub input: PathBuf,
    pub name_column: String,
    pub clean_cells: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            clean_cells: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    pub lang: String,
    pub summary_columns: Vec<String>,
    pub image_column: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        let render = RenderOptions::default();
        SiteSection {
            title: render.title,
            lang: render.lang,
            summary_columns: render.summary_columns,
            image_column: render.image_column,
        }
    }
}

/// Complete build configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub dataset: DatasetConfig,
    pub output: OutputConfig,
    pub site: SiteSection,
}

/// Values given on the command line; `None` / `false` leave the config untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub name_column: Option<String>,
    pub clean_cells: bool,
}

impl SiteConfig {
    /// Parse a config from TOML text. `base` is the directory relative paths resolve against.
    pub fn from_toml(text: &str, source: &Path, base: &Path) -> SiteResult<Self> {
        let mut cfg: SiteConfig = toml::from_str(text).map_err(|e| SiteError::Config {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        if cfg.dataset.input.is_relative() {
            cfg.dataset.input = base.join(&cfg.dataset.input);
        }
        if cfg.output.dir.is_relative() {
            cfg.output.dir = base.join(&cfg.output.dir);
        }
        Ok(cfg)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SiteError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml(&text, path, base)
    }

    /// Load `path` if given, otherwise start from defaults, then apply overrides.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> SiteResult<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => SiteConfig::default(),
        };
        cfg.apply(overrides);
        Ok(cfg)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(input) = overrides.input {
            self.dataset.input = input;
        }
        if let Some(dir) = overrides.output {
            self.output.dir = dir;
        }
        if let Some(column) = overrides.name_column {
            self.dataset.name_column = column;
        }
        if overrides.clean_cells {
            self.dataset.clean_cells = true;
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            name_column: self.dataset.name_column.clone(),
            clean_cells: self.dataset.clean_cells,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.site.title.clone(),
            lang: self.site.lang.clone(),
            summary_columns: self.site.summary_columns.clone(),
            image_column: self.site.image_column.clone(),
        }
    }
}
