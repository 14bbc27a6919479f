use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use steno_taskbar::config::settings;
use steno_taskbar::{
    CommandBus, ConsoleAlert, ConsoleConfigDialog, ConsoleRawDisplay, ConsoleStatusView,
    NoopWaker, ShellWindow, StartupOutcome, ThreadedEngineFactory, UiEvent, run_startup,
    spawn_wire_reader,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path =
        settings::settings_path(std::env::args().nth(1).map(PathBuf::from).as_deref());

    let bus = CommandBus::new(Arc::new(NoopWaker));
    let sender = bus.sender();

    let stroke_sender = sender.clone();
    let factory = ThreadedEngineFactory::new(
        config_path.clone(),
        Arc::new(move |stroke| stroke_sender.send(UiEvent::Stroke(stroke))),
    );

    let mut dialog = ConsoleConfigDialog::new();
    let mut alert = ConsoleAlert;
    let engine = match run_startup(&factory, &config_path, &mut dialog, &mut alert) {
        StartupOutcome::Ready(engine) => Some(engine),
        StartupOutcome::Aborted => return Ok(()),
    };

    let mut window = ShellWindow::new(
        engine,
        Box::new(ConsoleStatusView::new()),
        Box::new(ConsoleRawDisplay::new()),
        Box::new(ConsoleConfigDialog::new()),
        config_path,
        &sender,
    );

    println!(
        "wire commands on stdin: SUSPEND RESUME TOGGLE SHOWRAW HIDERAW TOGGLERAW CONFIGURE FOCUS QUIT"
    );
    let _reader = spawn_wire_reader(bus.sender());

    while !window.is_defunct() {
        match bus.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => window.apply(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
