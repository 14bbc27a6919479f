/// Custom user events for the GUI event loop.
///
/// Sent through the event-loop proxy so worker threads can wake the UI
/// thread after enqueuing onto the command bus.
#[derive(Debug, Clone, Copy)]
pub enum GuiEvent {
    /// The command bus has events to drain.
    Wake,
}
