use crate::error::{Error, Result};
use dialoguer::Confirm;
use std::io::IsTerminal;

/// Asks a yes/no question, defaulting to no. `skip` answers yes without asking.
///
/// # Errors
/// * `Error::NonInteractive` if a question is needed but stdin or stderr is
///   not a terminal
pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
    confirm_with(skip, prompt, interactive)
}

fn confirm_with(skip: bool, prompt: String, interactive: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    if !interactive {
        return Err(Error::NonInteractive { prompt });
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
