use std::io::{self, Write as _};

use crate::config::settings;
use crate::shell::ports::{ConfigDialogPort, ConfigDialogRequest};
use crate::shell::startup::{AlertPort, DialogOutcome, StartupDialogPort};

/// Modal alert on the terminal.
#[derive(Debug, Default)]
pub struct ConsoleAlert;

impl AlertPort for ConsoleAlert {
    fn show(&mut self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

/// Configuration "dialog" on the terminal.
///
/// The modal startup form edits the settings file in place so the next
/// construction attempt sees the fix; the runtime form just points at the
/// file, mirroring the non-modal dialog of a windowed front end.
#[derive(Debug, Default)]
pub struct ConsoleConfigDialog;

impl ConsoleConfigDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn prompt(question: &str) -> Option<String> {
        print!("{question}");
        io::stdout().flush().ok()?;

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(answer.trim().to_string()),
        }
    }
}

impl ConfigDialogPort for ConsoleConfigDialog {
    fn show(&mut self, request: &ConfigDialogRequest) {
        println!(
            "configuration lives in {}; edits apply on restart",
            request.config_path.display()
        );
    }
}

impl StartupDialogPort for ConsoleConfigDialog {
    fn show_modal(&mut self, request: &ConfigDialogRequest) -> DialogOutcome {
        let mut current = settings::load(&request.config_path).unwrap_or_default();
        println!(
            "configuration ({}) needs fixing before the engine can start",
            request.config_path.display()
        );

        let question = format!(
            "machine type [{}] (empty keeps, 'q' cancels): ",
            current.machine_type
        );
        let answer = match Self::prompt(&question) {
            Some(answer) => answer,
            None => return DialogOutcome::Cancelled,
        };

        match answer.as_str() {
            "q" | "Q" => DialogOutcome::Cancelled,
            "" => DialogOutcome::Confirmed,
            machine => {
                current.machine_type = machine.to_string();
                if let Err(error) = settings::save(&request.config_path, &current) {
                    eprintln!("could not save settings: {error}");
                    return DialogOutcome::Cancelled;
                }
                DialogOutcome::Confirmed
            }
        }
    }
}
