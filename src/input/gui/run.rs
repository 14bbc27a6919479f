use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::core::status::WINDOW_TITLE;
use crate::engine::ThreadedEngineFactory;
use crate::input::console::{ConsoleAlert, ConsoleConfigDialog};
use crate::input::gui::app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::waker::ProxyWaker;
use crate::shell::bus::CommandBus;
use crate::shell::events::UiEvent;
use crate::shell::startup::{StartupOutcome, run_startup};

/// Opens the taskbar window and runs the UI event loop until quit.
///
/// The startup/configuration retry runs first, on the launching terminal
/// (winit offers no dialogs before its loop starts); the window only opens
/// once an engine exists or the user aborted.
pub struct RunGuiCommand {
    config_path: PathBuf,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn execute(&self) {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .expect("Failed to create event loop");

        let bus = CommandBus::new(Arc::new(ProxyWaker::new(event_loop.create_proxy())));

        let stroke_sender = bus.sender();
        let factory = ThreadedEngineFactory::new(
            self.config_path.clone(),
            Arc::new(move |stroke| stroke_sender.send(UiEvent::Stroke(stroke))),
        );

        let mut dialog = ConsoleConfigDialog::new();
        let mut alert = ConsoleAlert;
        let engine = match run_startup(&factory, &self.config_path, &mut dialog, &mut alert) {
            StartupOutcome::Ready(engine) => Some(engine),
            StartupOutcome::Aborted => return,
        };

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(420.0, 96.0))
                .with_min_inner_size(LogicalSize::new(240.0, 64.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let mut app = GuiApp::new(window, &event_loop, engine, self.config_path.clone(), bus);
        let mut redraw_pending = true;

        event_loop
            .run(|event, elwt| {
                match event {
                    Event::UserEvent(GuiEvent::Wake) => {
                        redraw_pending = true;
                    }
                    Event::WindowEvent {
                        ref event,
                        window_id,
                    } if window_id == window.id() => {
                        let (_egui_consumed, egui_repaint) =
                            app.handle_window_event(window, event);

                        if egui_repaint {
                            redraw_pending = true;
                        }

                        match event {
                            WindowEvent::CloseRequested => {
                                app.request_quit();
                                elwt.exit();
                            }
                            WindowEvent::RedrawRequested => {
                                redraw_pending = false;

                                app.drain_bus();
                                app.apply_window_effects(window);

                                if app.closed() {
                                    elwt.exit();
                                    return;
                                }

                                let egui_output = app.update_ui(window);

                                app.egui_state.handle_platform_output(
                                    window,
                                    egui_output.platform_output.clone(),
                                );

                                if egui_output
                                    .viewport_output
                                    .values()
                                    .any(|v| v.repaint_delay.is_zero())
                                {
                                    redraw_pending = true;
                                }

                                if let Err(e) = app.render(egui_output) {
                                    eprintln!("Render error: {e}");
                                    elwt.exit();
                                }
                            }
                            WindowEvent::Resized(size) => {
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                                app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                                let size = window.inner_size();
                                app.resize(size.width, size.height);
                                redraw_pending = true;
                            }
                            _ => {}
                        }
                    }
                    Event::AboutToWait => {
                        if redraw_pending {
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
            })
            .expect("Event loop error");
    }
}
