//! Error types for the time-driven engine.
//!
//! The engine has a deliberately small failure surface: the only fatal
//! condition is a host that cannot schedule timers. Non-positive countdown
//! durations and repeated wake-ups are handled in place and never become
//! errors.

use thiserror::Error;

/// Errors raised while activating time-driven sources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The host cannot provide a scheduling primitive (no async runtime).
    #[error("{component} cannot start: {reason}")]
    EnvironmentUnavailable {
        /// Name of the source that failed to start.
        component: &'static str,
        /// Description of the missing capability.
        reason: String,
    },
}

impl EngineError {
    /// Builds an `EnvironmentUnavailable` error for `component`.
    pub(crate) fn environment(component: &'static str, reason: impl Into<String>) -> Self {
        EngineError::EnvironmentUnavailable {
            component,
            reason: reason.into(),
        }
    }
}

/// Returns a handle to the current tokio runtime or an `EnvironmentUnavailable`
/// error naming `component`.
pub(crate) fn runtime_handle(
    component: &'static str,
) -> Result<tokio::runtime::Handle, EngineError> {
    tokio::runtime::Handle::try_current()
        .map_err(|e| EngineError::environment(component, e.to_string()))
}
