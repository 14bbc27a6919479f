use std::path::PathBuf;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use steno_taskbar::{
    CommandBus, ConfigDialogPort, ConfigDialogRequest, NoopWaker, RawDisplayPort, ShellCommand,
    ShellWindow, StatusView, StatusViewPort, Stroke, ThreadedEngine,
};

struct NullStatusView;

impl StatusViewPort for NullStatusView {
    fn render(&mut self, _view: &StatusView) {}
    fn focus(&mut self) {}
    fn close(&mut self) {}
}

struct NullRawDisplay;

impl RawDisplayPort for NullRawDisplay {
    fn set_visible(&mut self, _visible: bool) {}
    fn append(&mut self, _stroke: &Stroke) {}
    fn close(&mut self) {}
}

struct NullConfigDialog;

impl ConfigDialogPort for NullConfigDialog {
    fn show(&mut self, _request: &ConfigDialogRequest) {}
}

fn engineless_shell() -> (CommandBus, ShellWindow<ThreadedEngine>) {
    let bus = CommandBus::new(Arc::new(NoopWaker));
    let window = ShellWindow::new(
        None,
        Box::new(NullStatusView),
        Box::new(NullRawDisplay),
        Box::new(NullConfigDialog),
        PathBuf::from("settings.json"),
        &bus.sender(),
    );
    (bus, window)
}

fn bench_wire_parse(c: &mut Criterion) {
    c.bench_function("parse_wire_known", |b| {
        b.iter(|| ShellCommand::parse_wire(black_box("TOGGLERAW")))
    });

    c.bench_function("parse_wire_unknown", |b| {
        b.iter(|| ShellCommand::parse_wire(black_box("RETRANSLATE")))
    });
}

fn bench_bus_dispatch(c: &mut Criterion) {
    c.bench_function("bus_send_drain_1000", |b| {
        b.iter_batched(
            engineless_shell,
            |(bus, mut window)| {
                let sender = bus.sender();
                for _ in 0..1000 {
                    sender.send_command(black_box(ShellCommand::ToggleRawDisplay));
                }
                while let Ok(event) = bus.try_recv() {
                    window.apply(event);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_wire_parse, bench_bus_dispatch);
criterion_main!(benches);
