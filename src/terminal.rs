// Terminal seam: everything the menus need from the console. The real
// implementation uses `dialoguer` for prompts, `crossterm` for styling
// and `indicatif` for the payment spinner; tests plug in a scripted one.

use anyhow::Result;
use crossterm::style::{style, Stylize};
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

use crate::config::Config;

/// Console operations used by the UI flows.
pub trait Terminal {
    /// Print a normal message on its own line.
    fn info(&mut self, text: &str);

    /// Print an error message on its own line.
    fn error(&mut self, text: &str);

    /// Read one line of free text.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Read a non-negative integer, asking again until one is given.
    fn number(&mut self, prompt: &str) -> Result<u64>;

    /// Read a password without echoing it.
    fn password(&mut self, prompt: &str) -> Result<String>;

    /// Show `message` with a spinner while a simulated operation runs.
    fn busy(&mut self, message: &str) -> Result<()>;
}

/// Interactive terminal on stdin/stdout.
pub struct DialoguerTerminal {
    color: bool,
    busy_delay: Duration,
}

impl DialoguerTerminal {
    pub fn new(config: &Config) -> Self {
        Self {
            color: config.color,
            busy_delay: config.payment_delay,
        }
    }
}

impl Terminal for DialoguerTerminal {
    fn info(&mut self, text: &str) {
        if self.color {
            println!("{}", style(text).bold().italic().blue());
        } else {
            println!("{text}");
        }
    }

    fn error(&mut self, text: &str) {
        if self.color {
            println!("{}", style(text).bold().red());
        } else {
            println!("{text}");
        }
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn number(&mut self, prompt: &str) -> Result<u64> {
        // `Input` re-asks on its own when the answer does not parse.
        let value: u64 = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(value)
    }

    fn busy(&mut self, message: &str) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        thread::sleep(self.busy_delay);
        spinner.finish_and_clear();
        Ok(())
    }
}
