pub mod args;
pub mod prompt;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, Cli, Commands, GenerateArgs, InitArgs, ListArgs,
    RenderArgs, ShowArgs,
};
pub use runner::{run, Runner};
