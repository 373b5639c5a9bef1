#![forbid(unsafe_code)]

use crate::{Thrown, Value};
use pf_core::{HandleState, Invocation, Paused};
use std::cell::RefCell;
use std::rc::Rc;

type NativeBody = dyn Fn(&[Value]) -> Result<Value, Thrown>;

pub(crate) struct Native {
    name: String,
    body: Box<NativeBody>,
}

impl Native {
    pub(crate) fn invoke(&self, args: &[Value]) -> Result<Value, Thrown> {
        (self.body)(args)
    }
}

pub(crate) type PausedNative = Paused<Rc<Native>, Vec<Value>>;

enum Inner {
    Native(Rc<Native>),
    Paused(RefCell<PausedNative>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionState {
    /// Not produced by `pause_fn`.
    Plain,
    Active { pending: usize },
    Resumed,
}

/// Shared callable with identity. Clones refer to the same function.
#[derive(Clone)]
pub struct Function(Rc<Inner>);

impl Function {
    pub fn native(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> Result<Value, Thrown> + 'static,
    ) -> Self {
        Self(Rc::new(Inner::Native(Rc::new(Native {
            name: name.into(),
            body: Box::new(body),
        }))))
    }

    pub(crate) fn paused(original: Rc<Native>) -> Self {
        Self(Rc::new(Inner::Paused(RefCell::new(Paused::new(original)))))
    }

    pub fn name(&self) -> &str {
        match &*self.0 {
            Inner::Native(native) => &native.name,
            Inner::Paused(_) => "paused",
        }
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn state(&self) -> FunctionState {
        match &*self.0 {
            Inner::Native(_) => FunctionState::Plain,
            Inner::Paused(cell) => {
                let paused = cell.borrow();
                match paused.state() {
                    HandleState::Active => FunctionState::Active {
                        pending: paused.pending(),
                    },
                    HandleState::Resumed => FunctionState::Resumed,
                }
            }
        }
    }

    pub(crate) fn paused_cell(&self) -> Option<&RefCell<PausedNative>> {
        match &*self.0 {
            Inner::Native(_) => None,
            Inner::Paused(cell) => Some(cell),
        }
    }

    /// The function that actually runs when this one is called after any
    /// resume: itself for natives, the wrapped original for handles.
    pub(crate) fn target(&self) -> Rc<Native> {
        match &*self.0 {
            Inner::Native(native) => Rc::clone(native),
            Inner::Paused(cell) => Rc::clone(cell.borrow().original()),
        }
    }

    /// Calls the function. An active handle stores a copy of `args` and
    /// returns [`Invocation::Buffered`]; anything else runs synchronously.
    pub fn call(&self, args: &[Value]) -> Result<Invocation<Value>, Thrown> {
        let target = match &*self.0 {
            Inner::Native(native) => Rc::clone(native),
            Inner::Paused(cell) => {
                let mut paused = cell.borrow_mut();
                match paused.buffer(args.to_vec()) {
                    Ok(()) => return Ok(Invocation::Buffered),
                    Err(_) => Rc::clone(paused.original()),
                }
            }
        };
        target.invoke(args).map(Invocation::Returned)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("state", &self.state())
            .finish()
    }
}
