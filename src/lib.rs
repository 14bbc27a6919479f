pub mod config;
mod core;
mod engine;
mod input;
mod presenters;
mod shell;

pub use crate::core::about::AboutInfo;
pub use crate::core::command::ShellCommand;
pub use crate::core::status::{EngineStatus, StatusGlyph, StatusView, WINDOW_TITLE};
pub use crate::core::stroke::{Stroke, StrokeLog};

pub use engine::{
    ConfigurationError, EngineFactory, EnginePort, ScriptedStrokes, StateCallback, StrokeSink,
    StrokeSource, ThreadedEngine, ThreadedEngineFactory,
};

pub use shell::bus::{CommandBus, CommandSender, NoopWaker, UiWaker};
pub use shell::events::UiEvent;
pub use shell::ports::{ConfigDialogPort, ConfigDialogRequest, RawDisplayPort, StatusViewPort};
pub use shell::startup::{
    AlertPort, DialogOutcome, StartupDialogPort, StartupFlow, StartupOutcome, StartupStep,
    run_startup,
};
pub use shell::window::ShellWindow;

pub use input::console::{ConsoleAlert, ConsoleConfigDialog, spawn_wire_reader};
pub use presenters::console::{ConsoleRawDisplay, ConsoleStatusView};

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
