//! The engine capability set consumed by the shell.
//!
//! The shell never decodes strokes itself; it holds an engine handle, flips
//! its running flag, and listens for state changes. Construction goes through
//! a factory so the startup retry loop can attempt it repeatedly.

mod sources;
mod threaded;

pub use sources::{SCRIPTED_MACHINE, ScriptedStrokes, StrokeSource, source_for_machine};
pub use threaded::{ThreadedEngine, ThreadedEngineFactory};

use std::{error::Error, fmt};

use crate::core::stroke::Stroke;

/// Callback invoked (with no arguments, from any thread) whenever the
/// engine's running state changes.
pub type StateCallback = Box<dyn Fn() + Send + Sync>;

/// Sink for raw strokes emitted while the engine is running.
pub type StrokeSink = std::sync::Arc<dyn Fn(Stroke) + Send + Sync>;

/// Capability set the shell consumes from a steno engine.
pub trait EnginePort {
    fn is_running(&self) -> bool;

    fn set_is_running(&mut self, running: bool);

    fn add_callback(&mut self, callback: StateCallback);

    /// Stops the engine and releases its resources. Idempotent. No state
    /// callbacks or strokes are delivered after this returns.
    fn destroy(&mut self);
}

/// Builds engines; may fail with a configuration-validity error.
pub trait EngineFactory {
    type Engine: EnginePort;

    fn build(&self) -> Result<Self::Engine, ConfigurationError>;
}

/// The one recognized startup failure: the configuration is invalid, with a
/// message fit for showing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    message: String,
}

impl ConfigurationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ConfigurationError {}
