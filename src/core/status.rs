/// Title shown on the taskbar window, prefixing the status message.
pub const WINDOW_TITLE: &str = "Steno Taskbar";

/// Visible state of the steno engine.
///
/// Always derived from the engine handle, never stored on its own: an absent
/// engine is `Error`, a present engine is `Running` or `Stopped` according to
/// its running flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Stopped,
    Error,
}

impl EngineStatus {
    #[must_use]
    pub fn derive(engine_running: Option<bool>) -> Self {
        match engine_running {
            Some(true) => Self::Running,
            Some(false) => Self::Stopped,
            None => Self::Error,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
        }
    }
}

/// Glyph shown on the status toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    On,
    Off,
}

/// The rendered form of [`EngineStatus`], as pushed to a status view port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub status: EngineStatus,
    pub glyph: StatusGlyph,
    /// Whether the toggle affordance is clickable. Disabled exactly when the
    /// engine is absent; configure and quit stay reachable regardless.
    pub toggle_enabled: bool,
    pub title: String,
}

impl StatusView {
    #[must_use]
    pub fn for_status(status: EngineStatus) -> Self {
        let glyph = match status {
            EngineStatus::Running => StatusGlyph::On,
            EngineStatus::Stopped | EngineStatus::Error => StatusGlyph::Off,
        };

        Self {
            status,
            glyph,
            toggle_enabled: status != EngineStatus::Error,
            title: format!("{}: {}", WINDOW_TITLE, status.message()),
        }
    }
}
