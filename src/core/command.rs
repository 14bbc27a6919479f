/// A user or engine intent aimed at the taskbar shell.
///
/// Commands may be produced on any thread (the engine's decoding loop runs
/// off the UI thread) but are only ever consumed on the UI thread after
/// crossing the command bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Stop translating strokes.
    Suspend,
    /// Resume translating strokes.
    Resume,
    /// Flip the engine between running and stopped.
    Toggle,
    /// Flip raw-stroke display visibility.
    ToggleRawDisplay,
    /// Show the raw-stroke display.
    ShowRawDisplay,
    /// Hide the raw-stroke display.
    HideRawDisplay,
    /// Open the configuration dialog.
    Configure,
    /// Raise and de-iconify the taskbar window.
    Focus,
    /// Tear the whole shell down.
    Quit,
}

impl ShellCommand {
    /// Parses a wire token as delivered by the engine.
    ///
    /// Unknown tokens yield `None` and must be silently ignored by callers;
    /// a stray dictionary entry must never crash the shell.
    #[must_use]
    pub fn parse_wire(token: &str) -> Option<Self> {
        let token = token.trim();

        for &(name, command) in Self::WIRE_TOKENS {
            if token.eq_ignore_ascii_case(name) {
                return Some(command);
            }
        }

        None
    }

    /// The wire token this command is spelled as by the engine.
    #[must_use]
    pub fn wire_token(self) -> &'static str {
        Self::WIRE_TOKENS
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    const WIRE_TOKENS: &'static [(&'static str, ShellCommand)] = &[
        ("SUSPEND", ShellCommand::Suspend),
        ("RESUME", ShellCommand::Resume),
        ("TOGGLE", ShellCommand::Toggle),
        ("TOGGLERAW", ShellCommand::ToggleRawDisplay),
        ("SHOWRAW", ShellCommand::ShowRawDisplay),
        ("HIDERAW", ShellCommand::HideRawDisplay),
        ("CONFIGURE", ShellCommand::Configure),
        ("FOCUS", ShellCommand::Focus),
        ("QUIT", ShellCommand::Quit),
    ];
}
