//! Top-level error for running the machine end to end.

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::ScriptError;
use crate::machine::ControllerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error("cannot write to the display ({failures} notice(s) lost): {source}")]
    Output {
        failures: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot render snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
