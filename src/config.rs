//! Run configuration.
//!
//! Loaded from JSON, overridden by command-line flags, and validated as a
//! whole so that every problem is reported at once.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

use crate::error::Error;
use crate::input::{InputSource, RandomInput, ScriptedInput};
use crate::machine::DEFAULT_HISTORY_LIMIT;

/// Where inputs come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Random,
    Script,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// Newline-delimited JSON
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `vendfsm::machine=trace`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: InputMode,
    /// Script file, required in script mode.
    pub script: Option<PathBuf>,
    /// Seed for random mode; entropy when absent.
    pub seed: Option<u64>,
    /// Random inputs before the source yields `STOP`.
    pub max_inputs: usize,
    /// Transitions the controller keeps in memory; `0` disables history.
    pub history_limit: usize,
    pub log: LogConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: InputMode::default(),
            script: None,
            seed: None,
            max_inputs: 50,
            history_limit: DEFAULT_HISTORY_LIMIT,
            log: LogConfig::default(),
        }
    }
}

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("script input requires a script path")]
    MissingScript,

    #[error("random input requires max_inputs > 0")]
    ZeroMaxInputs,

    #[error("log level must not be empty")]
    EmptyLogLevel,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {}", describe(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("cannot initialize logging: {0}")]
    Logging(String),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

impl RunConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every rule, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: Vec<Check> = vec![
            self.check_script(),
            self.check_max_inputs(),
            self.check_log_level(),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    fn check_script(&self) -> Check {
        if self.input == InputMode::Script && self.script.is_none() {
            Validation::fail(ConfigViolation::MissingScript)
        } else {
            Validation::success(())
        }
    }

    fn check_max_inputs(&self) -> Check {
        if self.input == InputMode::Random && self.max_inputs == 0 {
            Validation::fail(ConfigViolation::ZeroMaxInputs)
        } else {
            Validation::success(())
        }
    }

    fn check_log_level(&self) -> Check {
        if self.log.level.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyLogLevel)
        } else {
            Validation::success(())
        }
    }

    /// Build the configured input source.
    pub fn input_source(&self) -> Result<Box<dyn InputSource>, Error> {
        match (self.input, &self.script) {
            (InputMode::Script, Some(path)) => Ok(Box::new(ScriptedInput::from_path(path)?)),
            (InputMode::Script, None) => {
                Err(ConfigError::Invalid(vec![ConfigViolation::MissingScript]).into())
            }
            (InputMode::Random, _) => {
                let source = match self.seed {
                    Some(seed) => RandomInput::seeded(seed),
                    None => RandomInput::from_entropy(),
                };
                Ok(Box::new(source.with_limit(self.max_inputs)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, ScriptError};

    #[test]
    fn default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "input": "script", "script": "coins.txt" }"#).unwrap();

        assert_eq!(config.input, InputMode::Script);
        assert_eq!(config.script, Some(PathBuf::from("coins.txt")));
        assert_eq!(config.max_inputs, 50);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn log_section_parses() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "log": { "level": "debug", "format": "json" } }"#).unwrap();

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn validation_reports_all_violations() {
        let config = RunConfig {
            input: InputMode::Script,
            script: None,
            log: LogConfig {
                level: "  ".to_string(),
                format: LogFormat::Compact,
            },
            ..RunConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![ConfigViolation::MissingScript, ConfigViolation::EmptyLogLevel]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn zero_max_inputs_only_matters_for_random() {
        let random = RunConfig {
            max_inputs: 0,
            ..RunConfig::default()
        };
        assert!(random.validate().is_err());

        let script = RunConfig {
            input: InputMode::Script,
            script: Some(PathBuf::from("x.txt")),
            max_inputs: 0,
            ..RunConfig::default()
        };
        assert!(script.validate().is_ok());
    }

    #[test]
    fn seeded_random_source_stops_at_limit() {
        let config = RunConfig {
            seed: Some(9),
            max_inputs: 2,
            ..RunConfig::default()
        };
        let mut source = config.input_source().unwrap();

        assert_ne!(source.next_event(), InputEvent::Stop);
        assert_ne!(source.next_event(), InputEvent::Stop);
        assert_eq!(source.next_event(), InputEvent::Stop);
    }

    #[test]
    fn script_mode_without_path_is_rejected() {
        let config = RunConfig {
            input: InputMode::Script,
            script: None,
            ..RunConfig::default()
        };

        match config.input_source().err() {
            Some(Error::Config(ConfigError::Invalid(violations))) => {
                assert_eq!(violations, vec![ConfigViolation::MissingScript]);
            }
            other => panic!("Expected missing script error, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_script_is_script_error() {
        let config = RunConfig {
            input: InputMode::Script,
            script: Some(PathBuf::from("/no/such/script.txt")),
            ..RunConfig::default()
        };

        assert!(matches!(
            config.input_source().err(),
            Some(Error::Script(ScriptError::Io { .. }))
        ));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = RunConfig::from_path("/no/such/vendfsm.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
