use crate::error::Result;
use dialoguer::Confirm;

/// Yes/no decision source, injected so the fetch/extract sequencing can
/// be driven without a real console.
pub trait ConfirmationProvider {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Asks on the interactive terminal. The default answer is no, so only an
/// explicit yes confirms.
pub struct ConsolePrompt;

impl ConfirmationProvider for ConsolePrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

/// Confirms everything without asking; backs the `--yes` flag.
pub struct AssumeYes;

impl ConfirmationProvider for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
