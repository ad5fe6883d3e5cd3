//! Line-oriented config files
//!
//! Properties, `key: value` YAML-ish files, spark-defaults, shell env files
//! and shiro.ini all share one model: an ordered list of raw lines, each kept
//! byte-for-byte (terminator included) unless it is the line being updated.

use crate::error::MutationError;
use crate::mutator::MutationAction;
use hcfg_registry::LineStyle;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A line-oriented config file held in memory
///
/// Lines are raw bytes: Java properties files are ISO-8859-1 by convention,
/// and only the ASCII key prefix of a line is ever inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConfig {
    path: PathBuf,
    style: LineStyle,
    lines: Vec<Vec<u8>>,
}

impl LineConfig {
    /// Empty file
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>, style: LineStyle) -> Self {
        Self {
            path: path.into(),
            style,
            lines: Vec::new(),
        }
    }

    /// Read `path`; a missing file is empty when `create` is set
    ///
    /// # Errors
    /// `FileNotFound` when missing and `create` is off, `FileReadError` otherwise
    pub fn load(path: &Path, style: LineStyle, create: bool) -> Result<Self, MutationError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Self::parse(path, bytes, style)),
            Err(e) if e.kind() == io::ErrorKind::NotFound && create => Ok(Self::empty(path, style)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(MutationError::not_found(path, "file does not exist"))
            }
            Err(e) => Err(MutationError::read_error(path, e)),
        }
    }

    /// Split `text` into raw lines
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, text: impl AsRef<[u8]>, style: LineStyle) -> Self {
        Self {
            path: path.into(),
            style,
            lines: text
                .as_ref()
                .split_inclusive(|&b| b == b'\n')
                .map(<[u8]>::to_vec)
                .collect(),
        }
    }

    /// File this config belongs to
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines, terminators included
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line_key(line, self.style) == Some(key.as_bytes()))
    }

    /// Current value of `key`, from the first line that sets it
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let line = &self.lines[self.position(key)?];
        let rest = trim(&strip_export(trim_start(line), self.style)[key.len()..]);
        let value = match (self.style, rest.first()) {
            (LineStyle::Space, _) => rest,
            (_, Some(b'=' | b':')) => trim_start(&rest[1..]),
            _ => rest,
        };
        Some(String::from_utf8_lossy(value).into_owned())
    }

    /// Replace the first line setting `key`, or append one
    pub fn set(&mut self, key: &str, value: &str) -> MutationAction {
        let mut rendered = self.style.render(key, value).into_bytes();
        rendered.push(b'\n');

        if let Some(i) = self.position(key) {
            self.lines[i] = rendered;
            return MutationAction::Updated;
        }

        if let Some(last) = self.lines.last_mut() {
            if !last.ends_with(b"\n") {
                last.push(b'\n');
            }
        }
        self.lines.push(rendered);
        MutationAction::Appended
    }

    /// File contents
    #[must_use]
    pub fn render(&self) -> Vec<u8> {
        self.lines.concat()
    }
}

fn trim_start(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &bytes[n..]
}

fn trim(bytes: &[u8]) -> &[u8] {
    let bytes = trim_start(bytes);
    let n = bytes.iter().rev().take_while(|b| b.is_ascii_whitespace()).count();
    &bytes[..bytes.len() - n]
}

fn strip_export(line: &[u8], style: LineStyle) -> &[u8] {
    if style != LineStyle::Export {
        return line;
    }
    match line.strip_prefix(b"export") {
        Some(rest) if matches!(rest.first(), Some(b' ' | b'\t')) => trim_start(rest),
        _ => line,
    }
}

/// Key a line sets, or `None` for blanks, comments and section markers
fn line_key(line: &[u8], style: LineStyle) -> Option<&[u8]> {
    let trimmed = trim_start(line);
    match trimmed.first() {
        None | Some(b'#' | b'!') => return None,
        Some(b'[' | b';') if style == LineStyle::Ini => return None,
        _ => {}
    }
    let body = strip_export(trimmed, style);
    let end = body
        .iter()
        .position(|b| matches!(b, b'=' | b':' | b' ' | b'\t' | b'\r' | b'\n'))
        .unwrap_or(body.len());
    let key = &body[..end];
    (!key.is_empty()).then_some(key)
}
