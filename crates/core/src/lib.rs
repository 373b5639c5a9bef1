#![forbid(unsafe_code)]

//! Pause a callable: buffer its calls, then replay them once on resume.

mod error;
mod paused;

pub use error::*;
pub use paused::*;
