use crate::error::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

/// Single-select prompt. Returns the position of the chosen label.
pub trait Prompter {
    fn select(&mut self, message: &str, labels: &[String]) -> Result<usize>;
}

/// Arrow-key list prompt drawn on stderr.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, message: &str, labels: &[String]) -> Result<usize> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(labels)
            .default(0)
            .interact()?;
        Ok(choice)
    }
}
