use std::{env, io};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::commands::{self, CommandSpec};
use crate::cli::output;
use crate::config::{Config, ConfigManager};
use crate::core::services::ServiceError;
use crate::currency::{self, CurrencyCode, FormatOptions, LocaleConfig, NegativeStyle};
use crate::errors::LedgerError;
use crate::labels::Language;
use crate::ledger::Ledger;

const TODAY_ENV: &str = "FINPATH_TODAY";

/// Failures that abort the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Failures of a single command; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Ledger(err) => CommandError::Ledger(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// State owned by one shell run: a single session ledger plus preferences.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    pub(crate) ledger: Ledger,
    pub(crate) config: Config,
    config_manager: Option<ConfigManager>,
    pub(crate) locale: LocaleConfig,
    pub(crate) currency: CurrencyCode,
    pub(crate) today: NaiveDate,
    pub(crate) last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let mut context = Self::with_config(mode, config, today_from_env());
        context.config_manager = Some(manager);
        Ok(context)
    }

    /// Context that never touches the config file.
    pub fn with_config(mode: CliMode, config: Config, today: NaiveDate) -> Self {
        Self {
            mode,
            running: true,
            ledger: Ledger::new("Session"),
            locale: config.locale_config(),
            currency: config.currency_code(),
            config,
            config_manager: None,
            today,
            last_command: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.locale.language
    }

    pub(crate) fn prompt(&self) -> String {
        format!("finpath [{}]> ", self.ledger.transaction_count())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        commands::COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub(crate) fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match commands::find(command) {
            Some(CommandSpec { handler, .. }) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some(first) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&first.to_lowercase(), first, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = commands::COMMANDS
            .iter()
            .map(|spec| (levenshtein(spec.name, &input.to_lowercase()), spec.name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        tracing::debug!(command = ?self.last_command, error = %err, "command failed");
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    /// Applies `change` to the config, refreshes derived preferences, and
    /// persists it when a config file is in use.
    pub(crate) fn update_config(&mut self, change: impl FnOnce(&mut Config)) -> Result<(), CommandError> {
        change(&mut self.config);
        self.locale = self.config.locale_config();
        self.currency = self.config.currency_code();
        if let Some(manager) = &self.config_manager {
            manager.save(&self.config)?;
        }
        Ok(())
    }

    pub(crate) fn money(&self, amount: Decimal) -> String {
        let options = FormatOptions {
            negative_style: NegativeStyle::Sign,
            ..FormatOptions::default()
        };
        currency::format_currency_value(amount, &self.currency, &self.locale, &options)
    }

    pub(crate) fn date(&self, date: NaiveDate) -> String {
        currency::format_date(&self.locale, date)
    }
}

fn today_from_env() -> NaiveDate {
    env::var(TODAY_ENV)
        .ok()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}
