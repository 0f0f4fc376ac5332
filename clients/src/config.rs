//! Viewer configuration: a TOML file, overridden by command-line flags.
//!
//! ```toml
//! ontology = "data/BasicGeometryOntology.owl"
//! format = "rdfxml"
//! resolution = "suffix"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use geo_ontology::{Format, Resolution};
use serde::Deserialize;

/// Configuration file read from the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "geo-viewer.toml";

/// Ontology loaded when neither the config file nor the command line names
/// one.
pub const DEFAULT_ONTOLOGY: &str = "data/BasicGeometryOntology.owl";

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Path of the ontology document.
    pub ontology: PathBuf,
    /// Syntax of the document; detected from the extension when absent.
    pub format: Option<Format>,
    /// How class and individual names are matched.
    pub resolution: Resolution,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            ontology: PathBuf::from(DEFAULT_ONTOLOGY),
            format: None,
            resolution: Resolution::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--ontology`.
    pub ontology: Option<PathBuf>,
    /// `--format`.
    pub format: Option<Format>,
    /// `--resolution`.
    pub resolution: Option<Resolution>,
}

impl ViewerConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` is not valid TOML or contains unknown keys.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).context("Invalid viewer configuration")
    }

    /// Reads a configuration file. A relative `ontology` path is taken
    /// relative to the directory holding the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&src)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if config.ontology.is_relative() {
            if let Some(dir) = path.parent() {
                config.ontology = dir.join(&config.ontology);
            }
        }
        Ok(config)
    }

    /// Loads the explicit configuration file, or [`DEFAULT_CONFIG_FILE`] in
    /// `dir` if it exists, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if any file that
    /// is read cannot be parsed.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let default = dir.join(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            tracing::debug!(path = %default.display(), "using configuration file");
            Self::load_from(&default)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(ontology) = overrides.ontology {
            self.ontology = ontology;
        }
        if overrides.format.is_some() {
            self.format = overrides.format;
        }
        if let Some(resolution) = overrides.resolution {
            self.resolution = resolution;
        }
        self
    }
}
