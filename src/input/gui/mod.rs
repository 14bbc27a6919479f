//! Windowed front end for the taskbar shell.
//!
//! Uses winit for window management, pixels for the surface, and egui for
//! the widgets; the winit event-loop proxy is the bus waker, so cross-thread
//! events always land on the UI thread before touching any widget state.

mod app;
mod events;
mod run;
mod surface;
mod views;
mod waker;

pub use run::RunGuiCommand;
