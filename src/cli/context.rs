use std::{path::PathBuf, sync::Arc};

use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::{
        rollover::{RolloverOutcome, RolloverState},
        time::{Clock, SystemClock},
    },
    domain::Tenant,
    errors::RentalError,
    storage::{JsonFileStore, KeyValueStore},
    store::RentalStore,
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

const REPORTS_DIR: &str = "reports";

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] RentalError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single command; the shell reports it and keeps going.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] RentalError),
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub store: RentalStore,
    pub config: Config,
    base_dir: PathBuf,
    /// Most recently removed tenant, kept so `undo` can put it back.
    pub(crate) last_removed: Option<Tenant>,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Opens the store in the configured data directory with the system clock.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let backend = JsonFileStore::new(config.resolve_data_dir(manager.base_dir()))?;
        Ok(Self::from_parts(
            mode,
            config,
            manager.base_dir().to_path_buf(),
            Arc::new(backend),
            Arc::new(SystemClock),
        ))
    }

    pub fn from_parts(
        mode: CliMode,
        config: Config,
        base_dir: PathBuf,
        backend: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (store, outcome) = RentalStore::open(backend, config.units.clone(), clock);
        report_rollover(&outcome);

        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }

        Self {
            mode,
            registry,
            store,
            config,
            base_dir,
            last_removed: None,
            running: true,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn default_report_dir(&self) -> PathBuf {
        self.base_dir.join(REPORTS_DIR)
    }

    pub fn prompt(&self) -> String {
        format!("rental [{}]> ", self.store.current_month())
    }

    pub(crate) fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match self.registry.handler(command) {
            Some(handler) => {
                handler(self, args)?;
                if self.running {
                    Ok(LoopControl::Continue)
                } else {
                    Ok(LoopControl::Exit)
                }
            }
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => output::error(message),
            CommandError::Core(core) => output::error(core),
        }
    }
}

fn report_rollover(outcome: &RolloverOutcome) {
    if let RolloverState::Stale { last, current } = outcome.state {
        output::warning(format!(
            "New month {} (last reset {}): tenants, expenses and notes were reset.",
            current, last
        ));
    }
}
