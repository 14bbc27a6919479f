//! View ports the shell window renders through.
//!
//! Implementations run on the UI thread only; none of these traits require
//! `Send`.

mod config_dialog;
mod raw_display;
mod status_view;

pub use config_dialog::{ConfigDialogPort, ConfigDialogRequest};
pub use raw_display::RawDisplayPort;
pub use status_view::StatusViewPort;
