use std::collections::VecDeque;
use std::fmt;

/// A single chord of keys pressed on the stenotype machine.
///
/// Decoding and translation are owned by the engine; the shell only logs the
/// raw form for the debugging display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    /// RTF/CRE spelling of the chord, e.g. `"STROEBG"`.
    pub rtfcre: String,
    /// The individual steno keys, in steno order.
    pub keys: Vec<String>,
}

impl Stroke {
    #[must_use]
    pub fn new(rtfcre: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            rtfcre: rtfcre.into(),
            keys,
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rtfcre)
    }
}

/// Bounded log of the most recent strokes, oldest dropped first.
#[derive(Debug)]
pub struct StrokeLog {
    entries: VecDeque<Stroke>,
    capacity: usize,
}

impl StrokeLog {
    pub const DEFAULT_CAPACITY: usize = 500;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, stroke: Stroke) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(stroke);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.entries.iter()
    }
}

impl Default for StrokeLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(rtfcre: &str) -> Stroke {
        Stroke::new(rtfcre, vec![])
    }

    #[test]
    fn log_keeps_insertion_order() {
        let mut log = StrokeLog::new(10);
        log.push(stroke("STKPW"));
        log.push(stroke("-G"));

        let spelled: Vec<_> = log.iter().map(|s| s.rtfcre.clone()).collect();
        assert_eq!(spelled, ["STKPW", "-G"]);
    }

    #[test]
    fn log_drops_oldest_past_capacity() {
        let mut log = StrokeLog::new(2);
        log.push(stroke("A"));
        log.push(stroke("B"));
        log.push(stroke("C"));

        let spelled: Vec<_> = log.iter().map(|s| s.rtfcre.clone()).collect();
        assert_eq!(spelled, ["B", "C"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut log = StrokeLog::new(0);
        log.push(stroke("A"));
        log.push(stroke("B"));

        assert_eq!(log.len(), 1);
    }
}
