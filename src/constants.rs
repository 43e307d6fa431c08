//! Constants used throughout auto-templates

/// Default configuration file written by `init`
pub const DEFAULT_CONFIG_FILE: &str = "auto_templates.yaml";

/// Version stamped into freshly created configuration files
pub const DEFAULT_CONFIG_VERSION: &str = "1.0.0";

/// Default value of the `output_dir` key in a fresh configuration
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Environment variable overriding the bundled template directory
pub const TEMPLATE_DIR_ENV: &str = "AUTO_TEMPLATES_DIR";

/// Bundled template directory, relative to the crate root
pub const BUNDLED_TEMPLATE_DIR: &str = "templates";

/// Per-user template directory, relative to the home directory
pub const USER_TEMPLATE_DIR: &[&str] = &[".auto_templates", "templates"];

/// Separator for nested configuration keys
pub const KEY_SEPARATOR: char = '.';

/// Separator for `KEY=VALUE` variable overrides
pub const VAR_SEPARATOR: char = '=';

/// Well-known top-level configuration keys
pub mod keys {
    pub const VERSION: &str = "version";
    pub const VARIABLES: &str = "variables";
    pub const TEMPLATES: &str = "templates";
    pub const OUTPUT_DIR: &str = "output_dir";
}

/// Starter variables written by `init`
pub const DEFAULT_VARIABLES: &[(&str, &str)] = &[
    ("author", "Your Name"),
    ("email", "your.email@example.com"),
    ("project_name", "my_project"),
    ("description", "A new project"),
];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
