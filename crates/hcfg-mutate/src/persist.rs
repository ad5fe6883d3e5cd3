//! Whole-file persistence

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the contents of `path`
///
/// With `atomic`, the data is staged in a temp file in the same directory and
/// renamed over the target, so readers see either the old or the new file.
/// The existing file's permissions are carried over.
pub(crate) fn write_file(path: &Path, contents: &[u8], atomic: bool) -> io::Result<()> {
    if !atomic {
        return fs::write(path, contents);
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents)?;
    staged.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(staged.path(), meta.permissions())?;
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
