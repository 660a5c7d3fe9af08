// Runtime settings, read once from the environment at start-up.

use anyhow::{bail, Context, Result};
use std::time::Duration;

/// How account numbers are handed out at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountNumbering {
    /// The account number is the phone number. Re-using a phone number
    /// produces a second account with the same number.
    #[default]
    Phone,
    /// Unique numbers counting up from 1000.
    Sequential,
}

impl AccountNumbering {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "sequential" => Ok(Self::Sequential),
            other => bail!("unknown account numbering {other:?} (expected `phone` or `sequential`)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub account_numbering: AccountNumbering,
    /// How long the simulated payment spinner stays on screen.
    pub payment_delay: Duration,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_numbering: AccountNumbering::Phone,
            payment_delay: Duration::from_millis(300),
            color: true,
        }
    }
}

impl Config {
    /// Build a `Config` from `PHARMAGO_ACCOUNT_NUMBERS`,
    /// `PHARMAGO_SPINNER_MS` and `NO_COLOR`, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("PHARMAGO_ACCOUNT_NUMBERS") {
            config.account_numbering = AccountNumbering::parse(&value)
                .context("Invalid PHARMAGO_ACCOUNT_NUMBERS")?;
        }
        if let Some(value) = lookup("PHARMAGO_SPINNER_MS") {
            let millis: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid PHARMAGO_SPINNER_MS {value:?}"))?;
            config.payment_delay = Duration::from_millis(millis);
        }
        // https://no-color.org: any non-empty value disables color.
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }
}
