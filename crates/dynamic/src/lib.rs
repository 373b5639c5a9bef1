#![forbid(unsafe_code)]

//! Variadic, dynamically typed front end for `pf_core`.
//!
//! Arguments arrive as slices of [`Value`], so arity and callability are
//! checked at runtime and reported with the stable error codes of
//! [`PauseErrorKind`].

mod function;
mod value;

pub use function::{Function, FunctionState};
pub use pf_core::{Invocation, PauseError, PauseErrorKind};
pub use value::{Thrown, Value};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DynError {
    #[error(transparent)]
    Pause(#[from] PauseError),
    #[error(transparent)]
    Thrown(#[from] Thrown),
}

impl DynError {
    pub fn as_pause(&self) -> Option<&PauseError> {
        match self {
            DynError::Pause(err) => Some(err),
            DynError::Thrown(_) => None,
        }
    }

    pub fn as_thrown(&self) -> Option<&Thrown> {
        match self {
            DynError::Pause(_) => None,
            DynError::Thrown(thrown) => Some(thrown),
        }
    }
}

/// Wraps the single function in `args` into a new paused handle.
///
/// An active handle is rejected. A resumed handle forwards every call to its
/// original, so wrapping it wraps that original.
pub fn pause_fn(args: &[Value]) -> Result<Function, PauseError> {
    PauseError::check_arity(args.len())?;
    let candidate = &args[0];
    let Some(function) = candidate.as_function() else {
        return Err(PauseError::not_callable(&candidate.describe()));
    };
    if let FunctionState::Active { .. } = function.state() {
        return Err(PauseError::already_paused(&candidate.render()));
    }
    tracing::debug!(original = function.name(), "pausing function");
    Ok(Function::paused(function.target()))
}

pub use self::pause_fn as pause;

/// Replays everything buffered by the handle in `args` and switches it to
/// passthrough. The first error thrown during replay is returned unchanged.
pub fn resume(args: &[Value]) -> Result<Vec<Value>, DynError> {
    PauseError::check_arity(args.len())?;
    let candidate = &args[0];
    let Some(function) = candidate.as_function() else {
        return Err(PauseError::resume_not_callable(&candidate.describe()).into());
    };
    let Some(cell) = function.paused_cell() else {
        return Err(PauseError::not_paused(&candidate.render()).into());
    };

    let (original, buffered) = {
        let mut paused = cell.borrow_mut();
        let buffered = paused
            .drain()
            .map_err(|_| PauseError::already_resumed(&candidate.render()))?;
        (std::rc::Rc::clone(paused.original()), buffered)
    };

    let total = buffered.len();
    let mut out = Vec::with_capacity(total);
    for call_args in &buffered {
        match original.invoke(call_args) {
            Ok(value) => out.push(value),
            Err(thrown) => {
                tracing::warn!(
                    replayed = out.len(),
                    dropped = total - out.len() - 1,
                    "replay aborted by thrown error"
                );
                return Err(thrown.into());
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
