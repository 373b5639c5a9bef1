#![forbid(unsafe_code)]

use crate::PauseError;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleState {
    Active,
    Resumed,
}

impl HandleState {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleState::Active => "active",
            HandleState::Resumed => "resumed",
        }
    }
}

/// Outcome of calling a paused handle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Invocation<R> {
    /// The arguments were stored for replay; the wrapped callable did not run.
    Buffered,
    Returned(R),
}

impl<R> Invocation<R> {
    pub fn is_buffered(&self) -> bool {
        matches!(self, Invocation::Buffered)
    }

    pub fn returned(self) -> Option<R> {
        match self {
            Invocation::Buffered => None,
            Invocation::Returned(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Invocation<U> {
        match self {
            Invocation::Buffered => Invocation::Buffered,
            Invocation::Returned(value) => Invocation::Returned(f(value)),
        }
    }
}

enum Mode<A> {
    Active { buffered: Vec<A> },
    Resumed,
}

/// A callable that holds back every call until [`Paused::resume`].
///
/// `A` is the argument snapshot of one call; use a tuple for callables that
/// take several arguments. While active, calls are appended in order and the
/// wrapped callable is never run. `resume` replays them once, in order, and
/// the handle forwards every later call directly. A handle cannot be paused
/// again or resumed twice.
pub struct Paused<F, A> {
    original: F,
    mode: Mode<A>,
}

pub fn pause_fn<F, A>(original: F) -> Paused<F, A> {
    Paused::new(original)
}

pub use self::pause_fn as pause;

pub fn resume<F, A, R>(handle: &mut Paused<F, A>) -> Result<Vec<R>, PauseError>
where
    F: FnMut(A) -> R,
{
    handle.resume()
}

impl<F, A> Paused<F, A> {
    pub fn new(original: F) -> Self {
        tracing::debug!("paused handle created");
        Self {
            original,
            mode: Mode::Active {
                buffered: Vec::new(),
            },
        }
    }

    pub fn state(&self) -> HandleState {
        match self.mode {
            Mode::Active { .. } => HandleState::Active,
            Mode::Resumed => HandleState::Resumed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == HandleState::Active
    }

    pub fn is_resumed(&self) -> bool {
        self.state() == HandleState::Resumed
    }

    /// Number of calls waiting for replay. Always 0 once resumed.
    pub fn pending(&self) -> usize {
        self.buffered().len()
    }

    pub fn buffered(&self) -> &[A] {
        match &self.mode {
            Mode::Active { buffered } => buffered,
            Mode::Resumed => &[],
        }
    }

    pub fn original(&self) -> &F {
        &self.original
    }

    /// Stores `args` while active. Once resumed the arguments are handed
    /// back untouched so the caller can forward them.
    pub fn buffer(&mut self, args: A) -> Result<(), A> {
        match &mut self.mode {
            Mode::Active { buffered } => {
                buffered.push(args);
                tracing::trace!(pending = buffered.len(), "call buffered");
                Ok(())
            }
            Mode::Resumed => Err(args),
        }
    }

    /// Switches the handle to passthrough and yields the buffered snapshots
    /// in call order, without running anything.
    pub fn drain(&mut self) -> Result<Vec<A>, PauseError> {
        match std::mem::replace(&mut self.mode, Mode::Resumed) {
            Mode::Active { buffered } => {
                tracing::debug!(pending = buffered.len(), "resuming paused handle");
                Ok(buffered)
            }
            Mode::Resumed => Err(PauseError::already_resumed("[Paused]")),
        }
    }

    pub fn call<R>(&mut self, args: A) -> Invocation<R>
    where
        F: FnMut(A) -> R,
    {
        match self.buffer(args) {
            Ok(()) => Invocation::Buffered,
            Err(args) => Invocation::Returned((self.original)(args)),
        }
    }

    /// Replays every buffered call in order and returns their results.
    ///
    /// The handle is already in passthrough mode while the replay runs, so a
    /// panic in the callable leaves it resumed with the earlier calls applied.
    pub fn resume<R>(&mut self) -> Result<Vec<R>, PauseError>
    where
        F: FnMut(A) -> R,
    {
        let buffered = self.drain()?;
        Ok(buffered
            .into_iter()
            .map(|args| (self.original)(args))
            .collect())
    }

    /// Like [`Paused::resume`] for callables that fail. Replay stops at the
    /// first error, which is returned as-is; later buffered calls are dropped.
    pub fn try_resume<T, E>(&mut self) -> Result<Vec<T>, E>
    where
        F: FnMut(A) -> Result<T, E>,
        E: From<PauseError>,
    {
        let buffered = self.drain()?;
        let total = buffered.len();
        let mut out = Vec::with_capacity(total);
        for args in buffered {
            match (self.original)(args) {
                Ok(value) => out.push(value),
                Err(err) => {
                    tracing::warn!(
                        replayed = out.len(),
                        dropped = total - out.len() - 1,
                        "replay aborted by failing call"
                    );
                    return Err(err);
                }
            }
        }
        Ok(out)
    }
}

impl<F, A> std::fmt::Debug for Paused<F, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paused")
            .field("state", &self.state())
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}
