//! Locate, load, update and persist a single parameter

use crate::error::MutationError;
use crate::lines::LineConfig;
use crate::locate::{EnvSource, Locator, ProcessEnv};
use crate::persist::write_file;
use crate::xml::{XmlConfig, XmlShape};
use hcfg_registry::{Component, ConfigFormat};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Steps of one mutation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStage {
    Start,
    Locate,
    Found,
    Create,
    Load,
    Scan,
    Update,
    Append,
    Persist,
    Success,
    Failure,
}

impl fmt::Display for MutationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MutationStage::Start => "start",
            MutationStage::Locate => "locate",
            MutationStage::Found => "found",
            MutationStage::Create => "create",
            MutationStage::Load => "load",
            MutationStage::Scan => "scan",
            MutationStage::Update => "update",
            MutationStage::Append => "append",
            MutationStage::Persist => "persist",
            MutationStage::Success => "success",
            MutationStage::Failure => "failure",
        };
        f.write_str(s)
    }
}

/// What happened to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationAction {
    /// An existing entry was rewritten
    Updated,
    /// A new entry was added at the end
    Appended,
}

impl MutationAction {
    /// Stage this action corresponds to
    #[inline]
    #[must_use]
    pub fn stage(self) -> MutationStage {
        match self {
            MutationAction::Updated => MutationStage::Update,
            MutationAction::Appended => MutationStage::Append,
        }
    }
}

/// Result of a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// File that was written
    pub path: PathBuf,
    /// Format used for the file
    pub format: ConfigFormat,
    /// Whether the entry was replaced or appended
    pub action: MutationAction,
    /// Whether the file did not exist before
    pub created: bool,
}

/// Applies single-key updates to component config files
#[derive(Debug, Clone)]
pub struct Mutator<E = ProcessEnv> {
    locator: Locator<E>,
    atomic_writes: bool,
    xml_indent: String,
}

impl Default for Mutator<ProcessEnv> {
    fn default() -> Self {
        Self::new(Locator::new())
    }
}

impl<E: EnvSource> Mutator<E> {
    /// Mutator using `locator` to find files
    #[must_use]
    pub fn new(locator: Locator<E>) -> Self {
        Self {
            locator,
            atomic_writes: true,
            xml_indent: "  ".to_string(),
        }
    }

    /// Stage writes in a temp file and rename (builder pattern)
    #[must_use]
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic_writes = atomic;
        self
    }

    /// Indentation used when pretty-printing XML (builder pattern)
    #[must_use]
    pub fn with_xml_indent(mut self, indent: impl Into<String>) -> Self {
        self.xml_indent = indent.into();
        self
    }

    /// Locator in use
    #[inline]
    #[must_use]
    pub fn locator(&self) -> &Locator<E> {
        &self.locator
    }

    /// Set `key` to `value` in `file` of `component`
    ///
    /// # Errors
    /// Any [`MutationError`]; the first failing stage aborts the request and
    /// nothing is written unless the update fully succeeded in memory.
    pub fn apply(
        &self,
        component: Component,
        file: &str,
        key: &str,
        value: &str,
    ) -> Result<MutationOutcome, MutationError> {
        debug!(stage = %MutationStage::Start, %component, file, key, "mutation requested");
        let result = self.run(component, file, key, value);
        match &result {
            Ok(outcome) => {
                debug!(stage = %MutationStage::Success, path = %outcome.path.display(), "mutation done");
                info!(
                    %component,
                    key,
                    path = %outcome.path.display(),
                    action = ?outcome.action,
                    "config updated"
                );
            }
            Err(e) => warn!(stage = %MutationStage::Failure, %component, file, key, error = %e, "mutation failed"),
        }
        result
    }

    fn run(&self, component: Component, file: &str, key: &str, value: &str) -> Result<MutationOutcome, MutationError> {
        let format = ConfigFormat::for_file(component, file)
            .ok_or_else(|| MutationError::InvalidConfigFileType { file: file.to_string() })?;

        debug!(stage = %MutationStage::Locate, %component, file, "locating");
        let location = self.locator.locate(component, file)?;
        let stage = if location.exists {
            MutationStage::Found
        } else {
            MutationStage::Create
        };
        debug!(%stage, path = %location.path.display(), "located");

        let action = self.apply_at(&location.path, format, key, value)?;
        Ok(MutationOutcome {
            path: location.path,
            format,
            action,
            created: !location.exists,
        })
    }

    /// Update a file at a known path
    ///
    /// # Errors
    /// Load, update and persist failures as [`MutationError`]
    pub fn apply_at(
        &self,
        path: &Path,
        format: ConfigFormat,
        key: &str,
        value: &str,
    ) -> Result<MutationAction, MutationError> {
        let create = self.locator.create_missing();
        debug!(stage = %MutationStage::Load, path = %path.display(), %format, "loading");

        match format {
            ConfigFormat::XmlProperty { root } => self.apply_xml(path, root, XmlShape::Property, create, key, value),
            ConfigFormat::XmlFlat { root } => self.apply_xml(path, root, XmlShape::Flat, create, key, value),
            ConfigFormat::Lines(style) => {
                let mut cfg = LineConfig::load(path, style, create)?;
                debug!(stage = %MutationStage::Scan, lines = cfg.lines().len(), "scanning");
                let action = cfg.set(key, value);
                debug!(stage = %action.stage(), key, "entry set");
                let rendered = cfg.render();
                debug!(stage = %MutationStage::Persist, bytes = rendered.len(), "persisting");
                write_file(path, &rendered, self.atomic_writes)
                    .map_err(|e| MutationError::write_error(path, e))?;
                Ok(action)
            }
        }
    }

    fn apply_xml(
        &self,
        path: &Path,
        root: &str,
        shape: XmlShape,
        create: bool,
        key: &str,
        value: &str,
    ) -> Result<MutationAction, MutationError> {
        let mut doc = XmlConfig::load(path, root, shape, create)?;
        debug!(stage = %MutationStage::Scan, entries = doc.len(), "scanning");
        let action = doc.set(key, value)?;
        debug!(stage = %action.stage(), key, "entry set");
        let rendered = doc.render(&self.xml_indent)?;
        debug!(stage = %MutationStage::Persist, bytes = rendered.len(), "persisting");
        write_file(path, rendered.as_bytes(), self.atomic_writes).map_err(|e| MutationError::save_failed(path, e))?;
        Ok(action)
    }

    /// Current value of `key` in `file`, `None` when the file or key is absent
    ///
    /// Never creates directories or files.
    ///
    /// # Errors
    /// Unknown file type, unreadable or malformed files
    pub fn read(&self, component: Component, file: &str, key: &str) -> Result<Option<String>, MutationError> {
        let format = ConfigFormat::for_file(component, file)
            .ok_or_else(|| MutationError::InvalidConfigFileType { file: file.to_string() })?;
        let Some(path) = self.locator.find(component, file)? else {
            return Ok(None);
        };
        read_at(&path, format, key)
    }
}

/// Current value of `key` in an existing file
///
/// # Errors
/// Read and parse failures as [`MutationError`]
pub fn read_at(path: &Path, format: ConfigFormat, key: &str) -> Result<Option<String>, MutationError> {
    let value = match format {
        ConfigFormat::XmlProperty { root } => XmlConfig::load(path, root, XmlShape::Property, true)?.get(key),
        ConfigFormat::XmlFlat { root } => XmlConfig::load(path, root, XmlShape::Flat, true)?.get(key),
        ConfigFormat::Lines(style) => LineConfig::load(path, style, true)?.get(key),
    };
    Ok(value)
}
