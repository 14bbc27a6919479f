use crate::core::status::StatusView;

/// The taskbar window surface: status rendering, focus, destruction.
pub trait StatusViewPort {
    /// Renders the derived status. Called repeatedly with identical views;
    /// implementations may skip unchanged renders.
    fn render(&mut self, view: &StatusView);

    /// Raise and de-iconify the window.
    fn focus(&mut self);

    /// Destroy the window. Called once, at the end of teardown.
    fn close(&mut self);
}
