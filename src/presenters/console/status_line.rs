use crate::core::status::{StatusGlyph, StatusView};
use crate::shell::ports::StatusViewPort;

/// Status "window" for the console front end: one line per status change.
#[derive(Debug, Default)]
pub struct ConsoleStatusView {
    last: Option<StatusView>,
}

impl ConsoleStatusView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn glyph_text(glyph: StatusGlyph) -> &'static str {
        match glyph {
            StatusGlyph::On => "[on ]",
            StatusGlyph::Off => "[off]",
        }
    }
}

impl StatusViewPort for ConsoleStatusView {
    fn render(&mut self, view: &StatusView) {
        // The synchronizer re-renders freely; only changes are worth a line.
        if self.last.as_ref() == Some(view) {
            return;
        }

        let toggle = if view.toggle_enabled {
            "toggle enabled"
        } else {
            "toggle disabled"
        };
        println!("{} {} ({toggle})", Self::glyph_text(view.glyph), view.title);
        self.last = Some(view.clone());
    }

    fn focus(&mut self) {
        println!("(window raised)");
    }

    fn close(&mut self) {
        println!("goodbye");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::status::EngineStatus;

    #[test]
    fn repeated_renders_collapse() {
        let mut view = ConsoleStatusView::new();
        let running = StatusView::for_status(EngineStatus::Running);

        view.render(&running);
        view.render(&running);

        assert_eq!(view.last.as_ref(), Some(&running));
    }
}
