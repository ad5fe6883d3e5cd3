//! Parameter registries
//!
//! A [`Registry`] is the immutable, per-component list of [`ParamSpec`]
//! entries. Built-in registries are compiled once per process and shared.
//!
//! Declaration order is significant: canonicalization scans entries in order
//! and the first match wins, which also decides between duplicate canonical
//! names declared for different target files.

use crate::component::Component;
use crate::data::{self, ComponentTable};
use crate::error::RegistryError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// How a registry derives `matchPattern` from a canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStyle {
    /// `.`, `_` and `-` all become `[._-]`, so `dfs_replication` matches `dfs.replication`
    SeparatorClass,
    /// Only `\.` is accepted; `_` and `-` variants are rejected
    EscapedDots,
}

impl PatternStyle {
    /// Build the anchored pattern for `canonical`
    #[must_use]
    pub fn derive(self, canonical: &str) -> String {
        let mut pattern = String::with_capacity(canonical.len() * 2 + 2);
        pattern.push('^');
        let mut buf = [0u8; 4];
        for ch in canonical.chars() {
            match (self, ch) {
                (PatternStyle::SeparatorClass, '.' | '_' | '-') => pattern.push_str("[._-]"),
                _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
            }
        }
        pattern.push('$');
        pattern
    }
}

/// Static declaration of one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecDef {
    /// Canonical parameter name
    pub canonical: &'static str,
    /// Explicit pattern; derived from the registry style when `None`
    pub pattern: Option<&'static str>,
    /// Target config file
    pub file: &'static str,
}

/// Declare an entry whose pattern is derived from the registry style
#[inline]
#[must_use]
pub const fn param(canonical: &'static str, file: &'static str) -> SpecDef {
    SpecDef {
        canonical,
        pattern: None,
        file,
    }
}

/// Declare an entry with an explicit pattern (aliases, legacy spellings)
#[inline]
#[must_use]
pub const fn param_re(canonical: &'static str, pattern: &'static str, file: &'static str) -> SpecDef {
    SpecDef {
        canonical,
        pattern: Some(pattern),
        file,
    }
}

/// One compiled registry entry
#[derive(Debug, Clone)]
pub struct ParamSpec {
    canonical_name: String,
    pattern: Regex,
    target_file: String,
}

impl ParamSpec {
    /// Compile an entry
    ///
    /// # Errors
    /// `RegistryError::InvalidPattern` if `pattern` does not compile
    pub fn new(
        canonical_name: impl Into<String>,
        pattern: &str,
        target_file: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let canonical_name = canonical_name.into();
        let pattern =
            Regex::new(pattern).map_err(|e| RegistryError::invalid_pattern(&canonical_name, &e))?;
        Ok(Self {
            canonical_name,
            pattern,
            target_file: target_file.into(),
        })
    }

    /// Canonical parameter name
    #[inline]
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// Compiled match pattern
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Config file the parameter lives in
    #[inline]
    #[must_use]
    pub fn target_file(&self) -> &str {
        &self.target_file
    }

    /// Whether `raw_name` is a spelling of this parameter
    #[inline]
    #[must_use]
    pub fn matches(&self, raw_name: &str) -> bool {
        self.pattern.is_match(raw_name)
    }
}

/// Immutable parameter registry for one component
#[derive(Debug, Clone)]
pub struct Registry {
    component: Component,
    entries: Vec<ParamSpec>,
    /// Canonical name → index of its first declaration
    exact: IndexMap<String, usize>,
}

static BUILTIN: Lazy<Vec<Registry>> = Lazy::new(|| {
    Component::ALL
        .into_iter()
        .map(|component| {
            Registry::from_table(data::table(component)).unwrap_or_else(|err| {
                panic!("built-in registry for {component} is invalid: {err}")
            })
        })
        .collect()
});

impl Registry {
    /// Built-in registry for `component`
    #[inline]
    #[must_use]
    pub fn for_component(component: Component) -> &'static Registry {
        &BUILTIN[component.index()]
    }

    /// Build a registry from already compiled entries
    #[must_use]
    pub fn new(component: Component, entries: Vec<ParamSpec>) -> Self {
        let mut exact = IndexMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            exact.entry(entry.canonical_name.clone()).or_insert(i);
        }
        tracing::debug!(%component, entries = entries.len(), "registry built");
        Self {
            component,
            entries,
            exact,
        }
    }

    /// Compile a registry from static declarations
    ///
    /// # Errors
    /// `RegistryError::InvalidPattern` on the first pattern that does not compile
    pub fn from_specs(
        component: Component,
        style: PatternStyle,
        specs: &[SpecDef],
    ) -> Result<Self, RegistryError> {
        let entries = specs
            .iter()
            .map(|def| {
                let pattern = match def.pattern {
                    Some(explicit) => explicit.to_string(),
                    None => style.derive(def.canonical),
                };
                ParamSpec::new(def.canonical, &pattern, def.file)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(component, entries))
    }

    fn from_table(table: &ComponentTable) -> Result<Self, RegistryError> {
        Self::from_specs(table.component, table.style, table.params)
    }

    /// Component this registry belongs to
    #[inline]
    #[must_use]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Entries in declaration order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ParamSpec] {
        &self.entries
    }

    /// Number of entries (duplicates included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain string-equality lookup of an already canonical name
    #[inline]
    #[must_use]
    pub fn exists_exact(&self, canonical_name: &str) -> bool {
        self.exact.contains_key(canonical_name)
    }

    /// First declared entry with this exact canonical name
    #[must_use]
    pub fn get_exact(&self, canonical_name: &str) -> Option<&ParamSpec> {
        self.exact.get(canonical_name).map(|&i| &self.entries[i])
    }

    /// Entry with this canonical name declared for `target_file`
    #[must_use]
    pub fn get_exact_in_file(&self, canonical_name: &str, target_file: &str) -> Option<&ParamSpec> {
        self.entries
            .iter()
            .find(|e| e.canonical_name == canonical_name && e.target_file == target_file)
    }

    /// Distinct target files, in order of first appearance
    #[must_use]
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !files.contains(&entry.target_file.as_str()) {
                files.push(&entry.target_file);
            }
        }
        files
    }
}
