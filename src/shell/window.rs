use std::path::PathBuf;

use crate::core::command::ShellCommand;
use crate::core::status::{EngineStatus, StatusView};
use crate::core::stroke::{Stroke, StrokeLog};
use crate::engine::EnginePort;
use crate::shell::bus::CommandSender;
use crate::shell::events::UiEvent;
use crate::shell::ports::{ConfigDialogPort, ConfigDialogRequest, RawDisplayPort, StatusViewPort};

/// The taskbar window state machine.
///
/// Owns the engine handle and the raw-stroke display for the life of the
/// shell. All methods run on the UI thread; cross-thread producers reach it
/// exclusively through the command bus.
pub struct ShellWindow<E: EnginePort> {
    engine: Option<E>,
    raw_visible: bool,
    raw_log: StrokeLog,
    status_view: Box<dyn StatusViewPort>,
    raw_display: Box<dyn RawDisplayPort>,
    config_dialog: Box<dyn ConfigDialogPort>,
    config_path: PathBuf,
    defunct: bool,
}

impl<E: EnginePort> ShellWindow<E> {
    /// Builds the window around an engine handle (or none, when engine
    /// construction was abandoned: the window then shows the error status but
    /// stays alive for configure and quit).
    ///
    /// Registers a status callback on the engine so engine-initiated state
    /// changes land on the bus, and renders the initial status.
    pub fn new(
        mut engine: Option<E>,
        status_view: Box<dyn StatusViewPort>,
        raw_display: Box<dyn RawDisplayPort>,
        config_dialog: Box<dyn ConfigDialogPort>,
        config_path: PathBuf,
        sender: &CommandSender,
    ) -> Self {
        if let Some(engine) = &mut engine {
            let notify = sender.clone();
            engine.add_callback(Box::new(move || {
                notify.send(UiEvent::StatusChanged);
            }));
        }

        let mut window = Self {
            engine,
            raw_visible: false,
            raw_log: StrokeLog::default(),
            status_view,
            raw_display,
            config_dialog,
            config_path,
            defunct: false,
        };

        window.update_status();
        window
    }

    /// Applies one bus event. Events arriving after teardown began are
    /// dropped.
    pub fn apply(&mut self, event: UiEvent) {
        if self.defunct {
            return;
        }

        match event {
            UiEvent::Command(command) => self.handle_command(command),
            UiEvent::StatusChanged => self.update_status(),
            UiEvent::Stroke(stroke) => self.append_stroke(stroke),
        }
    }

    fn handle_command(&mut self, command: ShellCommand) {
        tracing::debug!(?command, "dispatching shell command");

        match command {
            ShellCommand::Suspend => self.set_engine_running(false),
            ShellCommand::Resume => self.set_engine_running(true),
            ShellCommand::Toggle => {
                if let Some(running) = self.engine.as_ref().map(EnginePort::is_running) {
                    self.set_engine_running(!running);
                }
            }
            ShellCommand::Configure => {
                let request = ConfigDialogRequest::new(&self.config_path, false);
                self.config_dialog.show(&request);
            }
            ShellCommand::Focus => self.status_view.focus(),
            ShellCommand::Quit => self.quit(),
            ShellCommand::ShowRawDisplay => self.set_raw_visible(true),
            ShellCommand::HideRawDisplay => self.set_raw_visible(false),
            ShellCommand::ToggleRawDisplay => self.set_raw_visible(!self.raw_visible),
        }
    }

    /// Recomputes the status view from the engine and pushes it to the view
    /// port. Idempotent; callable at any time after construction.
    pub fn update_status(&mut self) {
        let view = StatusView::for_status(self.engine_status());
        tracing::debug!(status = view.status.message(), "status view updated");
        self.status_view.render(&view);
    }

    #[must_use]
    pub fn engine_status(&self) -> EngineStatus {
        EngineStatus::derive(self.engine.as_ref().map(EnginePort::is_running))
    }

    /// Tears the shell down: engine first (so no callback can fire into a
    /// half-destroyed window), then the raw display, then the window itself.
    pub fn quit(&mut self) {
        if self.defunct {
            return;
        }
        self.defunct = true;
        tracing::info!("shell teardown");

        if let Some(mut engine) = self.engine.take() {
            engine.destroy();
        }
        self.raw_display.close();
        self.status_view.close();
    }

    #[must_use]
    pub fn is_defunct(&self) -> bool {
        self.defunct
    }

    #[must_use]
    pub fn raw_display_visible(&self) -> bool {
        self.raw_visible
    }

    #[must_use]
    pub fn raw_log(&self) -> &StrokeLog {
        &self.raw_log
    }

    fn set_engine_running(&mut self, running: bool) {
        // With no engine the status stays Error and the command is a no-op.
        if let Some(engine) = &mut self.engine {
            engine.set_is_running(running);
        }
    }

    fn set_raw_visible(&mut self, visible: bool) {
        if self.raw_visible != visible {
            self.raw_visible = visible;
            self.raw_display.set_visible(visible);
        }
    }

    fn append_stroke(&mut self, stroke: Stroke) {
        self.raw_display.append(&stroke);
        self.raw_log.push(stroke);
    }
}
