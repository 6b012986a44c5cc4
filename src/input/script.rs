//! Finite, scripted input read from text.
//!
//! Tokens are separated by `;`, `,` or whitespace and matched
//! case-insensitively; `#` starts a comment that runs to the end of the line.
//! Every unknown token is reported, not just the first.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::debug;

use super::event::InputEvent;
use super::source::InputSource;

/// A single bad token and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: unknown input token '{token}'")]
pub struct TokenError {
    pub line: usize,
    pub token: String,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot read script '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script has {} invalid token(s): {}", .0.len(), describe(.0))]
    Invalid(Vec<TokenError>),
}

fn describe(errors: &[TokenError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Replays a fixed list of events, then yields `Stop` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Parse script text, collecting every unknown token.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let checks: Vec<Validation<InputEvent, NonEmptyVec<TokenError>>> = tokens(text)
            .map(|(line, token)| match token.parse::<InputEvent>() {
                Ok(event) => Validation::success(event),
                Err(_) => Validation::fail(TokenError {
                    line,
                    token: token.to_string(),
                }),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(events) => {
                debug!(count = events.len(), "parsed input script");
                Ok(Self::from_events(events))
            }
            Validation::Failure(errors) => {
                Err(ScriptError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Stop)
    }
}

/// Yields `(line, token)` pairs with 1-based line numbers.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().flat_map(|(index, line)| {
        let code = line.split('#').next().unwrap_or_default();
        code.split(|c: char| c == ';' || c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(move |token| (index + 1, token))
    })
}
