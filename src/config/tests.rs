//! Tests for the config module

use super::*;
use crate::error::ErrorKind;
use serde_yaml::Value;
use std::fs;

fn config_from(yaml: &str) -> TemplateConfig {
    let data = serde_yaml::from_str(yaml).unwrap();
    TemplateConfig { path: None, data }
}

#[test]
fn test_create_default_config() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_file = tmp_dir.path().join("config.yaml");

    let config = TemplateConfig::create_default(&config_file).unwrap();

    assert!(config_file.exists());
    assert_eq!(config.get("version"), Some(&Value::from("1.0.0")));
    assert!(config.get("variables").unwrap().is_mapping());
    assert!(config.as_mapping().get("templates").unwrap().is_mapping());
    assert_eq!(config.get("output_dir"), Some(&Value::from("./output")));
    assert_eq!(config.path(), Some(config_file.as_path()));

    let reloaded = TemplateConfig::from_file(&config_file).unwrap();
    assert_eq!(reloaded.get("variables.author"), Some(&Value::from("Your Name")));
    assert_eq!(reloaded.variables().len(), 4);
}

#[test]
fn test_load_config() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_file = tmp_dir.path().join("config.yaml");
    fs::write(
        &config_file,
        "version: '1.0.0'\nvariables:\n  name: Test\n  value: 123\ntemplates: {}\n",
    )
    .unwrap();

    let config = TemplateConfig::from_file(&config_file).unwrap();
    assert_eq!(config.get("version"), Some(&Value::from("1.0.0")));
    assert_eq!(config.get("variables.name"), Some(&Value::from("Test")));
    assert_eq!(config.get("variables.value"), Some(&Value::from(123)));
}

#[test]
fn test_load_nonexistent_config() {
    let err = TemplateConfig::from_file("/nonexistent/config.yaml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_load_malformed_yaml_is_empty() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_file = tmp_dir.path().join("broken.yaml");
    fs::write(&config_file, "variables: [unclosed\n  - : :").unwrap();

    let config = TemplateConfig::from_file(&config_file).unwrap();
    assert!(config.is_empty());
    assert!(config.variables().is_empty());
}

#[test]
fn test_load_empty_and_scalar_documents() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let empty = tmp_dir.path().join("empty.yaml");
    let scalar = tmp_dir.path().join("scalar.yaml");
    fs::write(&empty, "").unwrap();
    fs::write(&scalar, "just a string").unwrap();

    assert!(TemplateConfig::from_file(&empty).unwrap().is_empty());
    assert!(TemplateConfig::from_file(&scalar).unwrap().is_empty());
}

#[test]
fn test_get_with_dot_notation() {
    let config = config_from("level1:\n  level2:\n    level3: value\n");

    assert_eq!(config.get("level1.level2.level3"), Some(&Value::from("value")));
    let level2 = config.get("level1.level2").unwrap().as_mapping().unwrap();
    assert_eq!(level2.get("level3"), Some(&Value::from("value")));
}

#[test]
fn test_get_with_default() {
    let config = config_from("key: value\nnothing: ~\n");

    assert_eq!(config.get("key"), Some(&Value::from("value")));
    assert_eq!(config.get("nonexistent"), None);
    assert_eq!(config.get_or("nonexistent", "default"), Value::from("default"));
    assert_eq!(config.get_or("nested.key", "default"), Value::from("default"));
    // walking through a scalar stops the lookup
    assert_eq!(config.get_or("key.deeper", "default"), Value::from("default"));
    // null counts as missing
    assert_eq!(config.get_or("nothing", "default"), Value::from("default"));
}

#[test]
fn test_set_simple_value() {
    let mut config = TemplateConfig::new();
    config.set("key", "value");
    assert_eq!(config.get("key"), Some(&Value::from("value")));
}

#[test]
fn test_set_nested_value() {
    let mut config = TemplateConfig::new();
    config.set("level1.level2.key", "value");

    assert_eq!(config.get("level1.level2.key"), Some(&Value::from("value")));
    assert!(config.get("level1").unwrap().is_mapping());
    assert!(config.get("level1.level2").unwrap().is_mapping());
}

#[test]
fn test_set_replaces_scalar_intermediate() {
    let mut config = config_from("a: 1\n");
    config.set("a.b", true);

    assert_eq!(config.get("a.b"), Some(&Value::from(true)));
}

#[test]
fn test_set_replaces_sequence_deep_in_path() {
    let mut config = config_from("a:\n  keep: 1\n  list: [1, 2]\n");
    config.set("a.list.b.c", "leaf");

    assert_eq!(config.get("a.list.b.c"), Some(&Value::from("leaf")));
    assert!(config.get("a.list").unwrap().is_mapping());
    assert_eq!(config.get("a.keep"), Some(&Value::from(1)));
}

#[test]
fn test_set_empty_segments() {
    let mut config = TemplateConfig::new();
    config.set("a..b", 1);

    assert_eq!(config.get("a..b"), Some(&Value::from(1)));
}

#[test]
fn test_set_keeps_siblings() {
    let mut config = config_from("variables:\n  author: Ann\n");
    config.set("variables.email", "ann@example.com");

    let variables = config.variables();
    assert_eq!(variables.get("author"), Some(&Value::from("Ann")));
    assert_eq!(variables.get("email"), Some(&Value::from("ann@example.com")));
}

#[test]
fn test_get_variables() {
    let config = config_from("variables:\n  name: Test\n  version: '1.0.0'\n");

    let variables = config.variables();
    assert_eq!(variables.get("name"), Some(&Value::from("Test")));
    assert_eq!(variables.get("version"), Some(&Value::from("1.0.0")));
}

#[test]
fn test_get_variables_empty() {
    assert!(TemplateConfig::new().variables().is_empty());
    assert!(config_from("variables: not-a-map\n").variables().is_empty());
}

#[test]
fn test_templates_shapes() {
    assert!(TemplateConfig::new().templates().is_empty());

    let map = config_from("templates:\n  readme:\n    file: readme.md.j2\n");
    assert_eq!(map.templates().names(), vec!["readme".to_string()]);

    let list = config_from("templates:\n  - class.py.j2\n  - name: readme\n    file: readme.md.j2\n");
    match list.templates() {
        TemplateDefinitions::List(entries) => assert_eq!(entries.len(), 2),
        other => panic!("expected a list, got {other:?}"),
    }
    assert_eq!(list.templates().names(), vec!["class.py.j2", "readme"]);
}

#[test]
fn test_add_template() {
    let mut config = TemplateConfig::new();
    let mut metadata = Mapping::new();
    metadata.insert("file".into(), "template.j2".into());
    metadata.insert("description".into(), "Test template".into());

    config.add_template("my_template", metadata);

    assert_eq!(config.get("templates.my_template.file"), Some(&Value::from("template.j2")));
    assert_eq!(config.templates().len(), 1);
}

#[test]
fn test_add_template_replaces_list() {
    let mut config = config_from("templates:\n  - old\n");
    config.add_template("new", Value::Mapping(Mapping::new()));

    assert!(matches!(config.templates(), TemplateDefinitions::Map(_)));
    assert_eq!(config.templates().names(), vec!["new"]);
}

#[test]
fn test_save_and_load_config() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_file = tmp_dir.path().join("nested/dir/config.yaml");

    let mut config1 = TemplateConfig::new();
    config1.set("test_key", "test_value");
    config1.set("nested.key", "nested_value");
    config1.set("custom_section.enabled", true);
    config1.save(Some(&config_file)).unwrap();

    let config2 = TemplateConfig::from_file(&config_file).unwrap();
    assert_eq!(config2.get("test_key"), Some(&Value::from("test_value")));
    assert_eq!(config2.get("nested.key"), Some(&Value::from("nested_value")));
    assert_eq!(config2.get("custom_section.enabled"), Some(&Value::from(true)));

    let keys: Vec<_> = config2.as_mapping().keys().filter_map(Value::as_str).collect();
    assert_eq!(keys, vec!["test_key", "nested", "custom_section"]);
}

#[test]
fn test_save_to_loaded_path() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_file = tmp_dir.path().join("config.yaml");
    fs::write(&config_file, "version: '1.0.0'\n").unwrap();

    let mut config = TemplateConfig::from_file(&config_file).unwrap();
    config.set("variables.author", "Jane");
    config.save(None).unwrap();

    let reloaded = TemplateConfig::from_file(&config_file).unwrap();
    assert_eq!(reloaded.get("variables.author"), Some(&Value::from("Jane")));
    assert_eq!(reloaded.get("version"), Some(&Value::from("1.0.0")));
}

#[test]
fn test_save_without_path_fails() {
    let err = TemplateConfig::new().save(None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
