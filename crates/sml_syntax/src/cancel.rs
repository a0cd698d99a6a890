//! Cooperative cancellation for long parses and reductions.
//!
//! A [`CancelToken`] is polled by the parser before every token it pulls from the scanner and by
//! the reducer before every node it visits, so a huge or hostile input can be abandoned from another
//! thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::diagnostics::CompileError;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Return `Err(CompileError::cancelled())` once cancellation has been requested.
    pub fn check(&self) -> Result<(), CompileError> {
        if self.is_cancelled() {
            Err(CompileError::cancelled())
        } else {
            Ok(())
        }
    }
}
