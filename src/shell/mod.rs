//! The specifiable contracts of the taskbar shell: cross-thread command
//! dispatch, status synchronization, and the startup/configuration retry
//! state machine.
//!
//! # Architecture
//!
//! A single UI-owning thread holds the [`window::ShellWindow`] and drains the
//! [`bus::CommandBus`] each loop tick; worker threads (the engine's decoding
//! loop included) only ever hold [`bus::CommandSender`] clones. Views hang
//! off the window behind the port traits in [`ports`].

pub mod bus;
pub mod events;
pub mod ports;
pub mod startup;
pub mod window;
