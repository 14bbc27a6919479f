use std::path::{Path, PathBuf};

/// What a configuration dialog needs to know to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDialogRequest {
    pub config_path: PathBuf,
    /// True while the shell is still initializing: the dialog suppresses its
    /// "restart to apply" prompt because the edits feed the pending engine
    /// construction directly.
    pub during_init: bool,
}

impl ConfigDialogRequest {
    #[must_use]
    pub fn new(config_path: &Path, during_init: bool) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            during_init,
        }
    }
}

/// Non-modal configuration dialog, opened by the Configure command at
/// runtime. The modal startup variant lives with the startup flow.
pub trait ConfigDialogPort {
    fn show(&mut self, request: &ConfigDialogRequest);
}
