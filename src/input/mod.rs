//! Input adapters: front ends that translate user interaction into bus
//! events.

pub mod console;
#[cfg(feature = "gui")]
pub mod gui;
