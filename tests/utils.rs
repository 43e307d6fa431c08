#![allow(dead_code)]

use auto_templates::cli::{Cli, Runner};
use auto_templates::StaticEnvironment;
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root of the fixture templates shipped with the test suite.
pub fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/templates").join(name)
}

/// Expected output for the fixture `name`.
pub fn expected_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/expected").join(name)
}

/// The templates bundled with the crate.
pub fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Writes `content` to `root/name`, creating parent directories.
pub fn write(root: &Path, name: &str, content: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Parses `args` as a command line and runs it against `env`, returning
/// everything the command printed.
pub fn run_cli(env: &StaticEnvironment, args: &[&str]) -> auto_templates::Result<String> {
    let cli = Cli::parse_from(std::iter::once("auto-templates").chain(args.iter().copied()));
    let mut runner = Runner::new(env, Vec::new());
    runner.run(cli.command)?;
    Ok(String::from_utf8(runner.into_output()).unwrap())
}

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints files present on one side only and files whose content differs.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");

    for file in actual_files.difference(&expected_files) {
        println!("  + {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {file:?}");
    }
    for file in actual_files.intersection(&expected_files) {
        let left = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let right = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if left != right {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{left}");
            println!("  --- Expected content:\n{right}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Fails the test when `actual` and `expected` do not hold the same files
/// with the same content.
pub fn assert_dirs_equal(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
