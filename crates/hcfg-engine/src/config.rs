//! Engine configuration
//!
//! Loaded from TOML or JSON; every field has a default so an empty document
//! is a valid configuration.
//!
//! ```toml
//! create_missing = true
//! atomic_writes = true
//! search_root = "/mnt/chroot"
//! xml_indent = "    "
//!
//! [extra_dirs]
//! hdfs = ["/srv/hadoop/conf"]
//! ```

use hcfg_mutate::{EnvSource, Locator, Mutator};
use hcfg_registry::{Component, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors while loading or applying configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid JSON
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither `.toml` nor `.json`
    #[error("unsupported config file extension: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// `extra_dirs` names a component that does not exist
    #[error("invalid extra_dirs entry: {0}")]
    UnknownComponent(#[from] RegistryError),

    /// XML indentation must be whitespace only
    #[error("xml_indent must contain only spaces or tabs, got {0:?}")]
    InvalidIndent(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Create missing config directories and files
    pub create_missing: bool,
    /// Stage writes in a temp file and rename into place
    pub atomic_writes: bool,
    /// Prefix for the OS-default config directories
    pub search_root: Option<PathBuf>,
    /// Extra candidate directories per component id
    pub extra_dirs: BTreeMap<String, Vec<PathBuf>>,
    /// Indentation for rewritten XML
    pub xml_indent: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            create_missing: true,
            atomic_writes: true,
            search_root: None,
            extra_dirs: BTreeMap::new(),
            xml_indent: "  ".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With directory creation enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// With atomic writes enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    /// With a search root for default directories
    #[inline]
    #[must_use]
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = Some(root.into());
        self
    }

    /// With an extra candidate directory for `component`
    #[must_use]
    pub fn with_extra_dir(mut self, component: Component, dir: impl Into<PathBuf>) -> Self {
        self.extra_dirs
            .entry(component.as_str().to_string())
            .or_default()
            .push(dir.into());
        self
    }

    /// With XML indentation
    #[inline]
    #[must_use]
    pub fn with_xml_indent(mut self, indent: impl Into<String>) -> Self {
        self.xml_indent = indent.into();
        self
    }

    /// Parse TOML
    ///
    /// # Errors
    /// `ConfigError::Toml` on syntax or type errors
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON
    ///
    /// # Errors
    /// `ConfigError::Json` on syntax or type errors
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    ///
    /// # Errors
    /// IO, parse or validation failures
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Check component ids and indentation
    ///
    /// # Errors
    /// `UnknownComponent` or `InvalidIndent`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_extra_dirs()?;
        if !self.xml_indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConfigError::InvalidIndent(self.xml_indent.clone()));
        }
        Ok(())
    }

    fn parsed_extra_dirs(&self) -> Result<Vec<(Component, &[PathBuf])>, ConfigError> {
        self.extra_dirs
            .iter()
            .map(|(id, dirs)| -> Result<_, ConfigError> { Ok((id.parse::<Component>()?, dirs.as_slice())) })
            .collect()
    }

    /// Build a mutator reading environment variables from `env`
    ///
    /// # Errors
    /// Validation failures, see [`EngineConfig::validate`]
    pub fn mutator<E: EnvSource>(&self, env: E) -> Result<Mutator<E>, ConfigError> {
        self.validate()?;
        let mut locator = Locator::with_env(env).with_create_missing(self.create_missing);
        if let Some(root) = &self.search_root {
            locator = locator.with_search_root(root.clone());
        }
        for (component, dirs) in self.parsed_extra_dirs()? {
            locator = locator.with_extra_dirs(component, dirs.iter().cloned());
        }
        Ok(Mutator::new(locator)
            .with_atomic_writes(self.atomic_writes)
            .with_xml_indent(self.xml_indent.clone()))
    }
}
