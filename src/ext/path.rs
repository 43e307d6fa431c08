use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Extension trait for Path used by template discovery
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use auto_templates::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Renders a relative path as a template name, joining components with `/`
    /// regardless of platform, which is the form the template loader expects.
    ///
    /// # Examples
    /// ```
    /// use auto_templates::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("python").join("class.py.j2").to_template_name(), "python/class.py.j2");
    /// ```
    fn to_template_name(&self) -> String;

    /// Whether the final component starts with a dot.
    fn is_hidden(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_template_name(&self) -> String {
        self.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn is_hidden(&self) -> bool {
        self.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.'))
    }
}
