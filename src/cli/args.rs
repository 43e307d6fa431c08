use crate::constants::{exit_codes, verbosity, DEFAULT_CONFIG_FILE};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Auto Templates - generate files and projects from templates.
#[derive(Parser, Debug)]
#[command(name = "auto-templates", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a file from a template.
    ///
    /// Example: auto-templates generate python/class.py.j2 myclass.py --var class_name=MyClass
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// List all available templates.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Initialize a new configuration file.
    Init(InitArgs),

    /// Show the content of a template.
    Show(ShowArgs),

    /// Render a template string directly.
    ///
    /// Example: auto-templates render "Hello {{ name }}!" --var name=World
    Render(RenderArgs),
}

/// Arguments for the generate command.
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Name of the template to use, relative to the template directory.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Where to save the generated file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Configuration file with variables.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Variables in KEY=VALUE format; they override configured values.
    #[arg(short = 'D', long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Custom template directory.
    #[arg(short = 't', long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

/// Arguments for the list command.
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Custom template directory to list.
    #[arg(short = 't', long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path to save the configuration.
    #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output_file: PathBuf,

    /// Overwrite an existing file without asking.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Name of the template to display.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Custom template directory, searched before the defaults.
    #[arg(short = 't', long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

/// Arguments for the render command.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Template string to render.
    #[arg(value_name = "TEMPLATE_STRING")]
    pub template_string: String,

    /// Variables in KEY=VALUE format; they override configured values.
    #[arg(short = 'D', long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Configuration file with variables.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Parse command line arguments, printing help and failing when no
/// subcommand was given.
pub fn get_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        }
        _ => e.exit(),
    })
}

/// Map `-v` counts to the appropriate log level. Warnings stay visible by
/// default so that skipped `--var` entries are reported.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
