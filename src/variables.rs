//! Variable mappings handed to the renderer.
//!
//! Configuration values arrive as YAML and command-line overrides arrive as
//! `KEY=VALUE` strings; both end up in a flat, ordered [`Variables`] map of
//! JSON values, which is what the template engine serializes from.

use crate::config::TemplateConfig;
use crate::constants::VAR_SEPARATOR;
use crate::error::Result;
use indexmap::IndexMap;
use log::{debug, warn};
use serde_yaml::{Mapping, Value as YamlValue};

/// Flat substitution values, in insertion order.
pub type Variables = IndexMap<String, serde_json::Value>;

/// Parses `KEY=VALUE` overrides. Keys and values are trimmed and the value
/// keeps any further `=` characters. Entries without a separator or with an
/// empty key are skipped with a warning.
pub fn parse_overrides<S: AsRef<str>>(overrides: &[S]) -> Variables {
    let mut variables = Variables::new();
    for raw in overrides {
        let raw = raw.as_ref();
        match raw.split_once(VAR_SEPARATOR) {
            Some((key, value)) if !key.trim().is_empty() => {
                variables.insert(
                    key.trim().to_string(),
                    serde_json::Value::String(value.trim().to_string()),
                );
            }
            _ => warn!("Ignoring invalid variable format: {raw}"),
        }
    }
    variables
}

/// Converts a YAML mapping into [`Variables`]. Scalar keys are stringified;
/// mappings or sequences used as keys are skipped.
pub fn from_mapping(mapping: &Mapping) -> Result<Variables> {
    let mut variables = Variables::new();
    for (key, value) in mapping {
        let Some(key) = scalar_key(key) else {
            warn!("Skipping variable with non-scalar key: {key:?}");
            continue;
        };
        variables.insert(key, serde_json::to_value(value)?);
    }
    Ok(variables)
}

/// The `variables` section of `config` as [`Variables`].
pub fn from_config(config: &TemplateConfig) -> Result<Variables> {
    from_mapping(&config.variables())
}

/// Config variables first, overrides on top.
pub fn merge_variables(config: Option<&TemplateConfig>, overrides: &[String]) -> Result<Variables> {
    let mut variables = match config {
        Some(config) => from_config(config)?,
        None => Variables::new(),
    };

    for (key, value) in parse_overrides(overrides) {
        if variables.insert(key.clone(), value).is_some() {
            debug!("Command-line value overrides configured variable '{key}'");
        }
    }
    Ok(variables)
}

fn scalar_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
