//! Config file discovery across install layouts
//!
//! A component's config directory can live in several places depending on
//! how it was installed. The [`Locator`] probes, in order:
//!
//! 1. `$HOME_ENV/<subdir>` when the component's home variable is set
//! 2. extra directories configured for the component
//! 3. the layout's OS-convention defaults, under an optional search root
//!
//! The first directory that already holds the file wins. When none does, the
//! first candidate is created and returned with `exists == false`.

use crate::error::MutationError;
use hcfg_registry::Component;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Component as PathComponent, Path, PathBuf};
use tracing::{debug, warn};

/// Read access to environment variables
pub trait EnvSource {
    /// Value of `key`; unset and empty are both `None`
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Fixed in-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable (builder pattern)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Where a config file lives, and whether it is already there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileLocation {
    /// Full path to the file
    pub path: PathBuf,
    /// `false` when the directory was just created and the file is still absent
    pub exists: bool,
}

/// Finds config files for a component
#[derive(Debug, Clone)]
pub struct Locator<E = ProcessEnv> {
    env: E,
    search_root: Option<PathBuf>,
    extra_dirs: BTreeMap<Component, Vec<PathBuf>>,
    create_missing: bool,
}

impl Default for Locator<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl Locator<ProcessEnv> {
    /// Locator over the process environment
    #[must_use]
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl<E: EnvSource> Locator<E> {
    /// Locator over a custom environment
    #[must_use]
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            search_root: None,
            extra_dirs: BTreeMap::new(),
            create_missing: true,
        }
    }

    /// Resolve default directories under `root` (builder pattern)
    #[must_use]
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = Some(root.into());
        self
    }

    /// Add candidate directories for `component` (builder pattern)
    #[must_use]
    pub fn with_extra_dirs(mut self, component: Component, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.extra_dirs.entry(component).or_default().extend(dirs);
        self
    }

    /// Allow or forbid creating missing directories (builder pattern)
    #[must_use]
    pub fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Whether missing directories and files may be created
    #[inline]
    #[must_use]
    pub fn create_missing(&self) -> bool {
        self.create_missing
    }

    /// Candidate config directories for `component`, in probe order
    #[must_use]
    pub fn candidates(&self, component: Component) -> Vec<PathBuf> {
        let layout = component.layout();
        let mut dirs = Vec::new();

        if let Some(home) = self.env.var(layout.home_env) {
            let home = PathBuf::from(home);
            if layout.home_subdir.is_empty() {
                dirs.push(home);
            } else {
                dirs.push(home.join(layout.home_subdir));
            }
        }

        if let Some(extra) = self.extra_dirs.get(&component) {
            dirs.extend(extra.iter().cloned());
        }

        dirs.extend(layout.default_dirs.iter().map(|d| self.rooted(d)));
        dirs
    }

    fn rooted(&self, dir: &str) -> PathBuf {
        match &self.search_root {
            Some(root) => root.join(dir.trim_start_matches('/')),
            None => PathBuf::from(dir),
        }
    }

    /// Path of an existing `file` for `component`, without creating anything
    ///
    /// # Errors
    /// `InvalidConfigFileType` if `file` escapes the config directory
    pub fn find(&self, component: Component, file: &str) -> Result<Option<PathBuf>, MutationError> {
        check_relative(file)?;
        for dir in self.candidates(component) {
            let path = dir.join(file);
            debug!(%component, path = %path.display(), "probing candidate");
            if path.is_file() {
                debug!(%component, path = %path.display(), "config file found");
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Find `file` for `component`, creating its directory if needed
    ///
    /// # Errors
    /// - `InvalidConfigFileType` if `file` escapes the config directory
    /// - `FileNotFound` if no candidate holds the file and creation is
    ///   disabled or fails
    pub fn locate(&self, component: Component, file: &str) -> Result<ConfigFileLocation, MutationError> {
        if let Some(path) = self.find(component, file)? {
            return Ok(ConfigFileLocation { path, exists: true });
        }
        let candidates = self.candidates(component);

        // Every layout declares at least one default directory
        let Some(first) = candidates.first() else {
            return Err(MutationError::not_found(file, "no candidate directories"));
        };
        let path = first.join(file);

        if !self.create_missing {
            warn!(%component, file, "config file missing and creation disabled");
            return Err(MutationError::not_found(
                path,
                format!("not present in any of {} candidate directories", candidates.len()),
            ));
        }

        let parent = path.parent().unwrap_or(first);
        fs::create_dir_all(parent).map_err(|e| {
            warn!(%component, dir = %parent.display(), error = %e, "cannot create config directory");
            MutationError::not_found(&path, format!("cannot create {}: {e}", parent.display()))
        })?;

        debug!(%component, path = %path.display(), "config directory created");
        Ok(ConfigFileLocation { path, exists: false })
    }
}

fn check_relative(file: &str) -> Result<(), MutationError> {
    let path = Path::new(file);
    let ok = !file.is_empty()
        && path
            .components()
            .all(|c| matches!(c, PathComponent::Normal(_)));
    if ok {
        Ok(())
    } else {
        Err(MutationError::InvalidConfigFileType { file: file.to_string() })
    }
}
