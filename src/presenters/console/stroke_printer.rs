use crate::core::stroke::Stroke;
use crate::shell::ports::RawDisplayPort;

/// Raw-stroke "window" for the console front end: prints strokes while
/// visible, stays quiet while hidden.
#[derive(Debug, Default)]
pub struct ConsoleRawDisplay {
    visible: bool,
}

impl ConsoleRawDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RawDisplayPort for ConsoleRawDisplay {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        println!(
            "raw strokes {}",
            if visible { "shown" } else { "hidden" }
        );
    }

    fn append(&mut self, stroke: &Stroke) {
        if self.visible {
            println!("  stroke: {stroke}");
        }
    }

    fn close(&mut self) {
        self.visible = false;
    }
}
