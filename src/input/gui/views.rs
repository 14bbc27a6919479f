use std::cell::RefCell;
use std::rc::Rc;

use crate::core::status::{EngineStatus, StatusView};
use crate::core::stroke::Stroke;
use crate::shell::ports::{ConfigDialogPort, ConfigDialogRequest, RawDisplayPort, StatusViewPort};

const RAW_LINES_CAP: usize = 500;

/// UI-side mirror of what the shell window pushed through its ports.
///
/// Shared between the port implementations (driven by the shell) and the
/// egui draw pass (driven by the event loop); everything lives on the UI
/// thread, so plain `Rc<RefCell<..>>` is enough.
pub struct GuiViewState {
    pub status: StatusView,
    pub raw_visible: bool,
    pub raw_lines: Vec<String>,
    pub config_request: Option<ConfigDialogRequest>,
    pub about_open: bool,
    pub focus_requested: bool,
    pub closed: bool,
}

impl GuiViewState {
    #[must_use]
    pub fn shared() -> SharedViewState {
        Rc::new(RefCell::new(Self {
            status: StatusView::for_status(EngineStatus::Error),
            raw_visible: false,
            raw_lines: Vec::new(),
            config_request: None,
            about_open: false,
            focus_requested: false,
            closed: false,
        }))
    }
}

pub type SharedViewState = Rc<RefCell<GuiViewState>>;

pub struct GuiStatusView(pub SharedViewState);

impl StatusViewPort for GuiStatusView {
    fn render(&mut self, view: &StatusView) {
        self.0.borrow_mut().status = view.clone();
    }

    fn focus(&mut self) {
        self.0.borrow_mut().focus_requested = true;
    }

    fn close(&mut self) {
        self.0.borrow_mut().closed = true;
    }
}

pub struct GuiRawDisplay(pub SharedViewState);

impl RawDisplayPort for GuiRawDisplay {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().raw_visible = visible;
    }

    fn append(&mut self, stroke: &Stroke) {
        let mut state = self.0.borrow_mut();
        if state.raw_lines.len() == RAW_LINES_CAP {
            state.raw_lines.remove(0);
        }
        state.raw_lines.push(stroke.rtfcre.clone());
    }

    fn close(&mut self) {
        self.0.borrow_mut().raw_visible = false;
    }
}

pub struct GuiConfigDialog(pub SharedViewState);

impl ConfigDialogPort for GuiConfigDialog {
    fn show(&mut self, request: &ConfigDialogRequest) {
        self.0.borrow_mut().config_request = Some(request.clone());
    }
}
