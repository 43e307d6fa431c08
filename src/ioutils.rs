use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ext::PathExt;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, overwriting any existing file.
///
/// With `create_dirs` the missing parents are created first; without it a
/// missing parent is reported as [`Error::OutputDirectoryMissing`].
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P, create_dirs: bool) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if create_dirs {
            create_dir_all(parent)?;
        } else if !parent.is_dir() {
            return Err(Error::OutputDirectoryMissing {
                output: dest_path.display().to_string(),
                parent: parent.display().to_string(),
            });
        }
    }

    debug!("Writing {} bytes to '{}'", content.len(), dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path).map_err(Error::IoError)
}

/// Recursively collects regular files under `root` as sorted, `/`-separated
/// names relative to `root`. A missing root yields an empty list. Files whose
/// relative path is not valid UTF-8 cannot be addressed by name and are skipped.
pub fn list_files<P: AsRef<Path>>(root: P, skip_hidden: bool) -> Vec<String> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Vec::new();
    }

    let mut names: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| !(skip_hidden && entry.path().is_hidden()))
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(root).ok()?;
            match rel.to_str_checked() {
                Ok(_) => Some(rel.to_template_name()),
                Err(e) => {
                    warn!("Skipping template: {e}");
                    None
                }
            }
        })
        .collect();

    names.sort();
    names
}

pub fn absolute<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
