use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::core::command::ShellCommand;
use crate::shell::events::UiEvent;

/// Wakes the UI loop after a cross-thread enqueue.
///
/// The windowed front end backs this with its event-loop proxy; a blocking
/// front end that sleeps in `recv_timeout` can use [`NoopWaker`].
pub trait UiWaker: Send + Sync {
    fn wake(&self);
}

/// Waker for UI loops that poll the bus themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWaker;

impl UiWaker for NoopWaker {
    fn wake(&self) {}
}

/// Cross-thread deferred dispatch onto the UI thread.
///
/// Any thread may clone a [`CommandSender`] and enqueue events; only the UI
/// thread holds the bus and drains it. This is the whole thread-safety story:
/// no UI-owned state is ever touched off the UI thread, and no locks guard it.
pub struct CommandBus {
    tx: Sender<UiEvent>,
    rx: Receiver<UiEvent>,
    waker: Arc<dyn UiWaker>,
}

impl CommandBus {
    #[must_use]
    pub fn new(waker: Arc<dyn UiWaker>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, waker }
    }

    /// A cloneable, `Send` handle for producers on any thread.
    #[must_use]
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
            waker: Arc::clone(&self.waker),
        }
    }

    /// Non-blocking pop, for loop ticks that drain until empty.
    pub fn try_recv(&self) -> Result<UiEvent, TryRecvError> {
        self.rx.try_recv()
    }

    /// Blocking pop with a timeout, for front ends without an event loop.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<UiEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Producer half of the bus. Sends after the bus is gone are dropped
/// silently; a defunct shell must never make a worker thread panic.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<UiEvent>,
    waker: Arc<dyn UiWaker>,
}

impl CommandSender {
    pub fn send(&self, event: UiEvent) {
        if self.tx.send(event).is_ok() {
            self.waker.wake();
        }
    }

    pub fn send_command(&self, command: ShellCommand) {
        self.send(UiEvent::Command(command));
    }
}
