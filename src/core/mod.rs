//! Toolkit-independent domain types for the taskbar shell.

pub mod about;
pub mod command;
pub mod status;
pub mod stroke;
