//! Template discovery across an ordered list of search directories.

use crate::environment::Environment;
use crate::ioutils::{absolute, list_files};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File details reported for a resolved template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateInfo {
    /// Name the template was looked up by.
    pub name: String,
    /// Absolute location of the template file.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub modified: DateTime<Local>,
}

/// Resolves template names against search paths, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct TemplateLocator {
    search_paths: Vec<PathBuf>,
}

impl TemplateLocator {
    /// Creates a locator over `extra_paths`, preceded by the bundled template
    /// directory and, when it exists, the user template directory of `env`.
    ///
    /// Resulting priority: user directory, bundled directory, `extra_paths`.
    pub fn new<I, P>(env: &dyn Environment, extra_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut locator = Self::with_paths(extra_paths);

        locator.add_search_path(env.bundled_template_dir());

        if let Some(user_dir) = env.user_template_dir().filter(|dir| dir.is_dir()) {
            locator.add_search_path(user_dir);
        }

        locator
    }

    /// Creates a locator over exactly `paths`, without default directories.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut search_paths: Vec<PathBuf> = Vec::new();
        for path in paths {
            let path = path.into();
            if !search_paths.contains(&path) {
                search_paths.push(path);
            }
        }
        Self { search_paths }
    }

    /// Search paths in priority order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Puts `path` at the front of the search order unless it is already present.
    pub fn add_search_path<P: Into<PathBuf>>(&mut self, path: P) {
        let path = path.into();
        if self.search_paths.contains(&path) {
            debug!("Search path '{}' already registered", path.display());
            return;
        }
        self.search_paths.insert(0, path);
    }

    /// First `search_path/name` that is a regular file.
    pub fn find_template(&self, name: &str) -> Option<PathBuf> {
        let found = self
            .search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file());

        match &found {
            Some(path) => debug!("Resolved template '{}' to '{}'", name, path.display()),
            None => debug!("Template '{}' not found in {} search paths", name, self.search_paths.len()),
        }
        found
    }

    /// Non-hidden templates of every search path, keyed by search path in
    /// priority order. Search paths without templates are left out.
    pub fn list_all_templates(&self) -> IndexMap<PathBuf, Vec<String>> {
        self.search_paths
            .iter()
            .filter_map(|dir| {
                let templates = list_templates_in_path(dir);
                (!templates.is_empty()).then(|| (dir.clone(), templates))
            })
            .collect()
    }

    /// Name, location, size and modification time of `name`, if it resolves.
    pub fn get_template_info(&self, name: &str) -> Option<TemplateInfo> {
        let path = self.find_template(name)?;
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Cannot read metadata of '{}': {e}", path.display());
                return None;
            }
        };
        let modified = metadata.modified().ok()?;

        Some(TemplateInfo {
            name: name.to_string(),
            path: absolute(&path),
            size: metadata.len(),
            modified: DateTime::<Local>::from(modified),
        })
    }
}

/// Sorted, non-hidden template names below `path`.
pub fn list_templates_in_path<P: AsRef<Path>>(path: P) -> Vec<String> {
    list_files(path, true)
}
