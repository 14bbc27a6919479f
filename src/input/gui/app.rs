use std::path::PathBuf;

use egui::Context as EguiContext;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::config::settings::{self, Settings};
use crate::core::about::AboutInfo;
use crate::core::command::ShellCommand;
use crate::core::status::StatusGlyph;
use crate::engine::ThreadedEngine;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::surface::EguiSurface;
use crate::input::gui::views::{
    GuiConfigDialog, GuiRawDisplay, GuiStatusView, GuiViewState, SharedViewState,
};
use crate::shell::bus::{CommandBus, CommandSender};
use crate::shell::window::ShellWindow;

/// The windowed shell: taskbar buttons, raw-stroke window, config and about
/// boxes, all drawn with egui over the pixels surface.
pub struct GuiApp {
    surface: EguiSurface,
    bus: CommandBus,
    sender: CommandSender,
    shell: ShellWindow<ThreadedEngine>,
    view_state: SharedViewState,
    config_draft: Option<Settings>,
    config_note: Option<String>,
    last_title: String,
    pub egui_ctx: EguiContext,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        engine: Option<ThreadedEngine>,
        config_path: PathBuf,
        bus: CommandBus,
    ) -> Self {
        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        let sender = bus.sender();
        let view_state = GuiViewState::shared();
        let shell = ShellWindow::new(
            engine,
            Box::new(GuiStatusView(SharedViewState::clone(&view_state))),
            Box::new(GuiRawDisplay(SharedViewState::clone(&view_state))),
            Box::new(GuiConfigDialog(SharedViewState::clone(&view_state))),
            config_path,
            &sender,
        );

        Self {
            surface: EguiSurface::new(window),
            bus,
            sender,
            shell,
            view_state,
            config_draft: None,
            config_note: None,
            last_title: String::new(),
            egui_ctx,
            egui_state,
        }
    }

    /// Applies every pending bus event to the shell window. UI thread only.
    pub fn drain_bus(&mut self) {
        while let Ok(event) = self.bus.try_recv() {
            self.shell.apply(event);
        }
    }

    /// Window-level side effects requested by the last drain: title text and
    /// focus/de-iconify.
    pub fn apply_window_effects(&mut self, window: &Window) {
        let mut state = self.view_state.borrow_mut();

        if state.status.title != self.last_title {
            self.last_title = state.status.title.clone();
            window.set_title(&self.last_title);
        }

        if state.focus_requested {
            state.focus_requested = false;
            window.set_minimized(false);
            window.focus_window();
        }
    }

    #[must_use]
    pub fn closed(&self) -> bool {
        self.view_state.borrow().closed
    }

    pub fn request_quit(&mut self) {
        self.shell.apply(ShellCommand::Quit.into());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.surface.render(egui_output, &self.egui_ctx)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let ctx = self.egui_ctx.clone();
        ctx.run(raw_input, |ctx| {
            self.draw_taskbar(ctx);
            self.draw_raw_display(ctx);
            self.draw_config_dialog(ctx);
            self.draw_about_box(ctx);
        })
    }

    fn draw_taskbar(&mut self, ctx: &EguiContext) {
        let (glyph, toggle_enabled, message) = {
            let state = self.view_state.borrow();
            (
                state.status.glyph,
                state.status.toggle_enabled,
                state.status.status.message(),
            )
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = match glyph {
                    StatusGlyph::On => "ON",
                    StatusGlyph::Off => "OFF",
                };
                let toggle = ui.add_enabled(toggle_enabled, egui::Button::new(label));
                if toggle.clicked() {
                    self.sender.send_command(ShellCommand::Toggle);
                }

                if ui.button("Configure...").clicked() {
                    self.sender.send_command(ShellCommand::Configure);
                }
                if ui.button("About...").clicked() {
                    self.view_state.borrow_mut().about_open = true;
                }
                if ui.button("Disp RAW").clicked() {
                    self.sender.send_command(ShellCommand::ToggleRawDisplay);
                }

                ui.label(message);
            });
        });
    }

    fn draw_raw_display(&mut self, ctx: &EguiContext) {
        if !self.view_state.borrow().raw_visible {
            return;
        }

        let mut open = true;
        egui::Window::new("Raw strokes")
            .open(&mut open)
            .default_size([220.0, 320.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.view_state.borrow().raw_lines {
                            ui.monospace(line);
                        }
                    });
            });

        // Closing hides the window; the log stays for the next show.
        if !open {
            self.sender.send_command(ShellCommand::HideRawDisplay);
        }
    }

    fn draw_config_dialog(&mut self, ctx: &EguiContext) {
        let Some(request) = self.view_state.borrow().config_request.clone() else {
            self.config_draft = None;
            self.config_note = None;
            return;
        };

        let draft = self
            .config_draft
            .get_or_insert_with(|| settings::load(&request.config_path).unwrap_or_default());

        let mut open = true;
        let mut applied = false;
        egui::Window::new("Configuration")
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Machine type:");
                    ui.text_edit_singleline(&mut draft.machine_type);
                });

                let mut dictionary = draft
                    .dictionary_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                ui.horizontal(|ui| {
                    ui.label("Dictionary:");
                    if ui.text_edit_singleline(&mut dictionary).changed() {
                        draft.dictionary_path =
                            (!dictionary.is_empty()).then(|| PathBuf::from(&dictionary));
                    }
                });

                ui.checkbox(&mut draft.log_strokes, "Log raw strokes");

                if ui.button("Apply").clicked() {
                    applied = true;
                }
                if let Some(note) = &self.config_note {
                    ui.separator();
                    ui.label(note.as_str());
                }
            });

        if applied {
            match settings::save(&request.config_path, draft) {
                Ok(()) if request.during_init => self.config_note = Some("saved".into()),
                Ok(()) => {
                    self.config_note = Some("saved; restart to apply".into());
                }
                Err(error) => self.config_note = Some(error.to_string()),
            }
        }

        if !open {
            self.view_state.borrow_mut().config_request = None;
            self.config_draft = None;
            self.config_note = None;
        }
    }

    fn draw_about_box(&mut self, ctx: &EguiContext) {
        if !self.view_state.borrow().about_open {
            return;
        }

        let about = AboutInfo::current();
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(format!("{} {}", about.name, about.version));
                ui.label(about.description);
                ui.hyperlink(about.url);
                ui.label(format!("License: {}", about.license));
            });

        if !open {
            self.view_state.borrow_mut().about_open = false;
        }
    }
}
