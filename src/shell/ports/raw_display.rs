use crate::core::stroke::Stroke;

/// The secondary raw-stroke window.
///
/// Lives as long as the shell: hiding it must not discard it (or its log),
/// so a later show needs no reconstruction. `close` is only called during
/// shell teardown.
pub trait RawDisplayPort {
    fn set_visible(&mut self, visible: bool);

    fn append(&mut self, stroke: &Stroke);

    fn close(&mut self);
}
