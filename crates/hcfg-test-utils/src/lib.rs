//! Testing utilities for the hcfg workspace
//!
//! Temp-dir sandboxes standing in for a host's config layout, plus helpers to
//! inspect the files the engine writes.

#![allow(missing_docs)]

use hcfg_mutate::{Locator, MapEnv};
use hcfg_registry::Component;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xmltree::{Element, XMLNode};

/// A throwaway search root with its own environment
#[derive(Debug)]
pub struct Sandbox {
    dir: TempDir,
    env: MapEnv,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            env: MapEnv::new(),
        }
    }

    /// Point the component's home variable at `rel` below the root
    pub fn with_home(mut self, component: Component, rel: &str) -> Self {
        let home = self.dir.path().join(rel);
        fs::create_dir_all(&home).unwrap();
        self.env.set(component.layout().home_env, home.to_string_lossy());
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn env(&self) -> MapEnv {
        self.env.clone()
    }

    pub fn locator(&self) -> Locator<MapEnv> {
        Locator::with_env(self.env()).with_search_root(self.root())
    }

    /// First OS-default directory of `component`, under the root
    pub fn default_dir(&self, component: Component) -> PathBuf {
        self.root()
            .join(component.layout().default_dirs[0].trim_start_matches('/'))
    }

    /// Write `contents` to `file` in the component's default directory
    pub fn write(&self, component: Component, file: &str, contents: &str) -> PathBuf {
        let path = self.default_dir(component).join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    /// Read `file` from the component's default directory
    pub fn read(&self, component: Component, file: &str) -> String {
        fs::read_to_string(self.default_dir(component).join(file)).unwrap()
    }

    /// Number of entries (files and directories) directly under the root
    pub fn entry_count(&self) -> usize {
        fs::read_dir(self.root()).unwrap().count()
    }
}

fn child_text(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .and_then(|c| c.get_text())
        .map(|t| t.trim().to_string())
}

fn properties(xml: &str) -> Vec<Element> {
    let root = Element::parse(xml.as_bytes()).unwrap();
    root.children
        .into_iter()
        .filter_map(|node| match node {
            XMLNode::Element(e) if e.name == "property" => Some(e),
            _ => None,
        })
        .collect()
}

/// Values of every `<property>` named `name`, in document order
pub fn property_values(xml: &str, name: &str) -> Vec<String> {
    properties(xml)
        .iter()
        .filter(|p| child_text(p, "name").as_deref() == Some(name))
        .map(|p| child_text(p, "value").unwrap_or_default())
        .collect()
}

/// Number of `<property>` children of the root
pub fn property_count(xml: &str) -> usize {
    properties(xml).len()
}

/// Indices of lines that differ between two texts of equal line count
pub fn changed_lines(before: &str, after: &str) -> Vec<usize> {
    let before: Vec<&str> = before.split_inclusive('\n').collect();
    let after: Vec<&str> = after.split_inclusive('\n').collect();
    assert_eq!(before.len(), after.len(), "line count changed");
    before
        .iter()
        .zip(&after)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}
