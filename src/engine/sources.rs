use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use crate::core::stroke::Stroke;

/// Machine type served by [`ScriptedStrokes`].
pub const SCRIPTED_MACHINE: &str = "scripted";

/// Where raw strokes come from.
///
/// Real serial/HID machines live behind this seam and are out of scope here.
/// Implementations may block in `next_stroke`, but only briefly: engine
/// teardown joins the worker that is pulling from the source.
pub trait StrokeSource: Send {
    /// Blocks until the next stroke arrives; `None` once the source is
    /// exhausted or closed.
    fn next_stroke(&mut self) -> Option<Stroke>;
}

/// A canned stroke sequence replayed at a fixed interval, used by the demo
/// binaries and tests.
pub struct ScriptedStrokes {
    pending: VecDeque<Stroke>,
    interval: Duration,
}

impl ScriptedStrokes {
    #[must_use]
    pub fn new(strokes: Vec<Stroke>, interval: Duration) -> Self {
        Self {
            pending: strokes.into(),
            interval,
        }
    }

    /// A short demo chord sequence ("steno dog is good").
    #[must_use]
    pub fn demo() -> Self {
        let strokes = [
            ("STEPB", vec!["S-", "T-", "E", "-P", "-B"]),
            ("TKOG", vec!["T-", "K-", "O", "-G"]),
            ("S", vec!["S-"]),
            ("TKPWAOD", vec!["T-", "K-", "P-", "W-", "A", "O", "-D"]),
        ];

        Self::new(
            strokes
                .into_iter()
                .map(|(rtfcre, keys)| {
                    Stroke::new(rtfcre, keys.into_iter().map(String::from).collect())
                })
                .collect(),
            Duration::from_millis(400),
        )
    }
}

impl StrokeSource for ScriptedStrokes {
    fn next_stroke(&mut self) -> Option<Stroke> {
        let stroke = self.pending.pop_front()?;
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Some(stroke)
    }
}

/// Resolves a configured machine type to a stroke source, or `None` when the
/// machine type is not supported.
#[must_use]
pub fn source_for_machine(machine_type: &str) -> Option<Box<dyn StrokeSource>> {
    match machine_type {
        SCRIPTED_MACHINE => Some(Box::new(ScriptedStrokes::demo())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_replays_in_order_then_ends() {
        let strokes = vec![Stroke::new("A", vec![]), Stroke::new("B", vec![])];
        let mut source = ScriptedStrokes::new(strokes, Duration::ZERO);

        assert_eq!(source.next_stroke().map(|s| s.rtfcre), Some("A".into()));
        assert_eq!(source.next_stroke().map(|s| s.rtfcre), Some("B".into()));
        assert_eq!(source.next_stroke(), None);
        assert_eq!(source.next_stroke(), None);
    }

    #[test]
    fn unsupported_machine_has_no_source() {
        assert!(source_for_machine("treal").is_none());
        assert!(source_for_machine(SCRIPTED_MACHINE).is_some());
    }
}
