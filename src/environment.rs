//! Discovery of the default template directories.
//!
//! Process-wide lookups (home directory, bundled resources) go through the
//! [`Environment`] trait so that callers and tests can substitute fixed roots.

use crate::constants::{BUNDLED_TEMPLATE_DIR, TEMPLATE_DIR_ENV, USER_TEMPLATE_DIR};
use std::path::PathBuf;

/// Source of the default template locations.
pub trait Environment {
    /// The current user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Directory holding the templates shipped with the tool.
    fn bundled_template_dir(&self) -> PathBuf;

    /// `~/.auto_templates/templates`, whether or not it exists.
    fn user_template_dir(&self) -> Option<PathBuf> {
        self.home_dir()
            .map(|home| USER_TEMPLATE_DIR.iter().fold(home, |acc, part| acc.join(part)))
    }
}

/// The real process environment.
///
/// Without `AUTO_TEMPLATES_DIR`, the bundled directory is the `templates/`
/// folder of the source tree the binary was compiled from. An installed
/// binary whose build tree is gone needs `AUTO_TEMPLATES_DIR` pointing at a
/// copy of those templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn bundled_template_dir(&self) -> PathBuf {
        match std::env::var_os(TEMPLATE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_TEMPLATE_DIR),
        }
    }
}

/// Fixed roots, independent of the process environment.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    pub home: Option<PathBuf>,
    pub bundled: PathBuf,
}

impl StaticEnvironment {
    pub fn new(home: Option<PathBuf>, bundled: impl Into<PathBuf>) -> Self {
        Self { home, bundled: bundled.into() }
    }
}

impl Environment for StaticEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn bundled_template_dir(&self) -> PathBuf {
        self.bundled.clone()
    }
}
