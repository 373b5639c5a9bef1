#![forbid(unsafe_code)]

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PauseErrorKind {
    #[serde(rename = "ERR_MISSING_ARGS")]
    MissingArgument,
    #[serde(rename = "ERR_TOO_MANY_ARGS")]
    TooManyArguments,
    #[serde(rename = "ERR_INVALID_ARG_TYPE")]
    InvalidCallableType,
    #[serde(rename = "ERR_ALREADY_PAUSED")]
    AlreadyPausedCallable,
    #[serde(rename = "ERR_ALREADY_RESUMED")]
    AlreadyResumed,
    #[serde(rename = "ERR_NOT_PAUSED")]
    NotAPausedHandle,
}

impl PauseErrorKind {
    /// Stable machine-readable code, safe to match on across releases.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingArgument => "ERR_MISSING_ARGS",
            Self::TooManyArguments => "ERR_TOO_MANY_ARGS",
            Self::InvalidCallableType => "ERR_INVALID_ARG_TYPE",
            Self::AlreadyPausedCallable => "ERR_ALREADY_PAUSED",
            Self::AlreadyResumed => "ERR_ALREADY_RESUMED",
            Self::NotAPausedHandle => "ERR_NOT_PAUSED",
        }
    }

    pub fn is_arity(self) -> bool {
        matches!(self, Self::MissingArgument | Self::TooManyArguments)
    }
}

/// Validation failure raised by `pause_fn` or `resume`.
///
/// Every variant originates locally and synchronously; nothing here is
/// transient, so callers should treat these as programming errors rather
/// than retry them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct PauseError {
    #[serde(rename = "code")]
    kind: PauseErrorKind,
    message: String,
}

const RESUME_EXPECTATION: &str = "Expected a <Function> returned by `pause_fn()`";

impl PauseError {
    pub fn kind(&self) -> PauseErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Arity check shared by both entry points: exactly one argument.
    pub fn check_arity(given: usize) -> Result<(), Self> {
        match given {
            0 => Err(Self::missing_argument()),
            1 => Ok(()),
            n => Err(Self::too_many_arguments(n)),
        }
    }

    pub fn missing_argument() -> Self {
        Self {
            kind: PauseErrorKind::MissingArgument,
            message: "Expected 1 argument (<Function>), but got no arguments.".to_string(),
        }
    }

    pub fn too_many_arguments(given: usize) -> Self {
        Self {
            kind: PauseErrorKind::TooManyArguments,
            message: format!("Expected 1 argument (<Function>), but got {given} arguments."),
        }
    }

    /// `described` is the offending value rendered together with its kind,
    /// e.g. `-0 (number)`.
    pub fn not_callable(described: &str) -> Self {
        Self {
            kind: PauseErrorKind::InvalidCallableType,
            message: format!("Expected a <Function>, but got a non-function value {described}."),
        }
    }

    pub fn already_paused(rendered: &str) -> Self {
        Self {
            kind: PauseErrorKind::AlreadyPausedCallable,
            message: format!(
                "Expected a <Function> which hasn't been paused by `pause_fn()`, but got an already paused one {rendered}."
            ),
        }
    }

    pub fn resume_not_callable(described: &str) -> Self {
        Self {
            kind: PauseErrorKind::InvalidCallableType,
            message: format!("{RESUME_EXPECTATION}, but got a non-function value {described}."),
        }
    }

    pub fn already_resumed(rendered: &str) -> Self {
        Self {
            kind: PauseErrorKind::AlreadyResumed,
            message: format!("{RESUME_EXPECTATION}, but got an already resume()-ed one {rendered}."),
        }
    }

    pub fn not_paused(rendered: &str) -> Self {
        Self {
            kind: PauseErrorKind::NotAPausedHandle,
            message: format!(
                "{RESUME_EXPECTATION}, but got {rendered} which is not returned by `pause_fn()`."
            ),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.message.trim(),
        })
    }
}
