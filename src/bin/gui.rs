use std::path::PathBuf;

use steno_taskbar::RunGuiCommand;
use steno_taskbar::config::settings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path =
        settings::settings_path(std::env::args().nth(1).map(PathBuf::from).as_deref());

    RunGuiCommand::new(config_path).execute();
}
