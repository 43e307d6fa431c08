//! Configuration store backed by a YAML document.
//!
//! The document is kept as an ordered [`Mapping`] so unknown keys and key
//! order survive a load/save cycle. Nested values are addressed with
//! dot-path keys such as `variables.author`.

use crate::constants::{
    keys, DEFAULT_CONFIG_VERSION, DEFAULT_OUTPUT_DIR, DEFAULT_VARIABLES, KEY_SEPARATOR,
};
use crate::error::{Error, Result};
use crate::ioutils::{read_to_string, write_file};
use log::{debug, info, warn};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Template definitions as stored under the `templates` key.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateDefinitions {
    /// `name -> metadata` mapping, the canonical shape.
    Map(Mapping),
    /// Older documents store a plain list of definitions.
    List(Vec<Value>),
}

impl Default for TemplateDefinitions {
    fn default() -> Self {
        TemplateDefinitions::Map(Mapping::new())
    }
}

impl TemplateDefinitions {
    pub fn len(&self) -> usize {
        match self {
            TemplateDefinitions::Map(map) => map.len(),
            TemplateDefinitions::List(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the defined templates. List entries contribute either their
    /// string value or the `name` field of a mapping entry.
    pub fn names(&self) -> Vec<String> {
        match self {
            TemplateDefinitions::Map(map) => {
                map.keys().filter_map(|k| k.as_str().map(str::to_owned)).collect()
            }
            TemplateDefinitions::List(list) => list
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(name) => Some(name.clone()),
                    Value::Mapping(m) => m.get("name").and_then(Value::as_str).map(str::to_owned),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// In-memory configuration document with an optional backing file.
#[derive(Debug, Clone, Default)]
pub struct TemplateConfig {
    path: Option<PathBuf>,
    data: Mapping,
}

impl TemplateConfig {
    /// Creates an empty configuration with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration loaded from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::new();
        config.load(path)?;
        Ok(config)
    }

    /// Replaces the document with the contents of `path` and remembers the path.
    ///
    /// # Errors
    /// * `Error::ConfigNotFound` if `path` does not exist
    ///
    /// A document that fails to parse, or whose root is not a mapping, loads
    /// as an empty configuration.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound { path: path.display().to_string() });
        }

        let content = read_to_string(path)?;
        self.data = parse_document(&content, path);
        self.path = Some(path.to_path_buf());
        debug!("Loaded {} top-level keys from '{}'", self.data.len(), path.display());
        Ok(())
    }

    /// Writes the document as YAML to `path`, or to the loaded path when `None`.
    ///
    /// # Errors
    /// * `Error::ConfigPathMissing` if neither path is known
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = path.or(self.path.as_deref()).ok_or(Error::ConfigPathMissing)?;
        let content = serde_yaml::to_string(&self.data)?;
        write_file(&content, path, true)?;
        debug!("Saved configuration to '{}'", path.display());
        Ok(())
    }

    /// Looks up a dot-path key. Missing segments, non-mapping intermediates
    /// and null leaves all yield `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split(KEY_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.data.get(first)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// Like [`TemplateConfig::get`] but falls back to `default`.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Assigns a dot-path key, creating intermediate mappings on the way.
    /// Intermediate values that are not mappings are replaced.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        set_path(&mut self.data, &segments, value.into());
    }

    /// The `variables` sub-map, empty when absent or not a mapping.
    pub fn variables(&self) -> Mapping {
        self.data.get(keys::VARIABLES).and_then(Value::as_mapping).cloned().unwrap_or_default()
    }

    /// The `templates` sub-tree in whichever shape it was stored.
    pub fn templates(&self) -> TemplateDefinitions {
        match self.data.get(keys::TEMPLATES) {
            Some(Value::Mapping(map)) => TemplateDefinitions::Map(map.clone()),
            Some(Value::Sequence(list)) => TemplateDefinitions::List(list.clone()),
            _ => TemplateDefinitions::default(),
        }
    }

    /// Inserts or replaces the definition of `name` under `templates`.
    pub fn add_template(&mut self, name: &str, metadata: impl Into<Value>) {
        let templates = self
            .data
            .entry(Value::from(keys::TEMPLATES))
            .or_insert(Value::Mapping(Mapping::new()));
        if !templates.is_mapping() {
            debug!("Replacing non-mapping '{}' value", keys::TEMPLATES);
            *templates = Value::Mapping(Mapping::new());
        }
        if let Value::Mapping(map) = templates {
            map.insert(Value::from(name), metadata.into());
        }
    }

    /// Builds the starter document and writes it to `path`.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut variables = Mapping::new();
        for (name, value) in DEFAULT_VARIABLES {
            variables.insert(Value::from(*name), Value::from(*value));
        }

        let mut data = Mapping::new();
        data.insert(keys::VERSION.into(), DEFAULT_CONFIG_VERSION.into());
        data.insert(keys::VARIABLES.into(), Value::Mapping(variables));
        data.insert(keys::TEMPLATES.into(), Value::Mapping(Mapping::new()));
        data.insert(keys::OUTPUT_DIR.into(), DEFAULT_OUTPUT_DIR.into());

        let config = Self { path: Some(path.to_path_buf()), data };
        config.save(None)?;
        info!("Created default configuration at '{}'", path.display());
        Ok(config)
    }

    /// Path the configuration was loaded from or created at.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The whole document.
    pub fn as_mapping(&self) -> &Mapping {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn parse_document(content: &str, path: &Path) -> Mapping {
    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            warn!("Configuration '{}' is not a mapping, ignoring its contents", path.display());
            Mapping::new()
        }
        Err(e) => {
            warn!("Failed to parse configuration '{}': {e}. Using an empty configuration.", path.display());
            Mapping::new()
        }
    }
}

fn set_path(map: &mut Mapping, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(Value::from(*last), value);
        }
        [head, rest @ ..] => {
            let child = map.entry(Value::from(*head)).or_insert(Value::Mapping(Mapping::new()));
            if let Value::Mapping(child) = child {
                set_path(child, rest, value);
                return;
            }
            debug!("Replacing non-mapping value at '{head}'");
            let mut fresh = Mapping::new();
            set_path(&mut fresh, rest, value);
            *child = Value::Mapping(fresh);
        }
    }
}
