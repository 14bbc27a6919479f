use crate::core::command::ShellCommand;
use crate::core::stroke::Stroke;

/// Everything that crosses from worker threads onto the UI thread.
///
/// Produced anywhere, applied to the shell window only by the UI loop after
/// draining the command bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A user or engine intent.
    Command(ShellCommand),
    /// The engine's running state changed; re-derive the status view.
    StatusChanged,
    /// A raw stroke to append to the raw display log.
    Stroke(Stroke),
}

impl From<ShellCommand> for UiEvent {
    fn from(command: ShellCommand) -> Self {
        Self::Command(command)
    }
}
