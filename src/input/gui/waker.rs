use std::sync::Mutex;

use winit::event_loop::EventLoopProxy;

use crate::input::gui::events::GuiEvent;
use crate::shell::bus::UiWaker;

/// Wakes the winit event loop from any thread via its proxy.
pub struct ProxyWaker {
    proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl ProxyWaker {
    #[must_use]
    pub fn new(proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl UiWaker for ProxyWaker {
    fn wake(&self) {
        // A closed event loop means teardown is already under way; the
        // queued event will simply never be drained.
        if let Ok(proxy) = self.proxy.lock() {
            let _ = proxy.send_event(GuiEvent::Wake);
        }
    }
}
