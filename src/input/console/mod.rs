//! Terminal front end: wire-command reader and console dialogs.

mod dialogs;
mod wire;

pub use dialogs::{ConsoleAlert, ConsoleConfigDialog};
pub use wire::spawn_wire_reader;
