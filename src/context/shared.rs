//! A context behind a lock.
//!
//! Insertion of an implication reads every stored implication before revising the database, and so two insertions may not interleave.
//! Each line read through a shared context is parsed and applied while holding the lock, and so is applied as a single step.
//!
//! ```rust
//! # use pyre::context::{Context, SharedContext};
//! let shared = SharedContext::new(Context::default());
//! let handle = shared.clone();
//!
//! std::thread::spawn(move || handle.read_line("+nasal => +voice"))
//!     .join()
//!     .expect("thread")
//!     .expect("read");
//!
//! assert_eq!(shared.with(|ctx| ctx.implication_db.count()), Ok(1));
//! ```

use std::sync::{Arc, Mutex};

use crate::{
    context::Context,
    reports::Report,
    types::err::{self},
};

/// A context shared between callers.
#[derive(Clone)]
pub struct SharedContext {
    inner: Arc<Mutex<Context>>,
}

impl SharedContext {
    pub fn new(context: Context) -> Self {
        SharedContext {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// As [Context::read_line], holding the lock for the parse and application of the line.
    pub fn read_line(&self, line: &str) -> Result<Option<Report>, err::ErrorKind> {
        let mut context = self.inner.lock().map_err(|_| err::ContextError::Poisoned)?;
        context.read_line(line)
    }

    /// Applies `f` to the context, holding the lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut Context) -> T) -> Result<T, err::ContextError> {
        let mut context = self.inner.lock().map_err(|_| err::ContextError::Poisoned)?;
        Ok(f(&mut context))
    }
}
