//! Scheduler error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `start()` was called while the scheduler was already running.
    /// Informational — the scheduler state is unchanged.
    #[error("scheduler is already running; call stop() before starting again")]
    AlreadyRunning,

    #[error("scheduler configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
