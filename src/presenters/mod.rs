//! Presentation adapters for the shell's view ports.

pub mod console;
