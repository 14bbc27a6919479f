use std::path::Path;

use crate::core::status::WINDOW_TITLE;
use crate::engine::{ConfigurationError, EngineFactory};
use crate::shell::ports::ConfigDialogRequest;

/// What the user chose in a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// Modal alert surface for the startup error message.
pub trait AlertPort {
    fn show(&mut self, title: &str, message: &str);
}

/// Modal configuration dialog shown between construction attempts.
pub trait StartupDialogPort {
    fn show_modal(&mut self, request: &ConfigDialogRequest) -> DialogOutcome;
}

/// Result of one engine construction attempt.
#[derive(Debug)]
pub enum StartupStep<E> {
    Ready(E),
    /// Construction failed on configuration validity; the user gets the
    /// message and a chance to fix the config before the next attempt.
    AwaitUserFix(ConfigurationError),
}

/// Final result of the startup flow.
#[derive(Debug)]
pub enum StartupOutcome<E> {
    Ready(E),
    /// The user cancelled out of the configuration dialog; the shell must
    /// tear down and exit cleanly.
    Aborted,
}

/// The retry state machine, one attempt per call.
///
/// Kept free of dialog IO so event-loop front ends can drive it a step at a
/// time; blocking front ends use [`run_startup`].
pub struct StartupFlow<'a, F: EngineFactory> {
    factory: &'a F,
    attempts: u32,
}

impl<'a, F: EngineFactory> StartupFlow<'a, F> {
    #[must_use]
    pub fn new(factory: &'a F) -> Self {
        Self {
            factory,
            attempts: 0,
        }
    }

    pub fn attempt(&mut self) -> StartupStep<F::Engine> {
        self.attempts += 1;

        match self.factory.build() {
            Ok(engine) => StartupStep::Ready(engine),
            Err(error) => {
                tracing::warn!(
                    attempt = self.attempts,
                    error = error.message(),
                    "engine construction failed on configuration"
                );
                StartupStep::AwaitUserFix(error)
            }
        }
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Runs the retry loop to completion against modal dialog and alert ports.
///
/// Unbounded by design: the loop ends only when construction succeeds or the
/// user cancels.
pub fn run_startup<F: EngineFactory>(
    factory: &F,
    config_path: &Path,
    dialog: &mut dyn StartupDialogPort,
    alert: &mut dyn AlertPort,
) -> StartupOutcome<F::Engine> {
    let mut flow = StartupFlow::new(factory);

    loop {
        match flow.attempt() {
            StartupStep::Ready(engine) => return StartupOutcome::Ready(engine),
            StartupStep::AwaitUserFix(error) => {
                alert.show(WINDOW_TITLE, error.message());

                let request = ConfigDialogRequest::new(config_path, true);
                match dialog.show_modal(&request) {
                    DialogOutcome::Confirmed => {}
                    DialogOutcome::Cancelled => return StartupOutcome::Aborted,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EnginePort, StateCallback};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    struct TestEngine {
        running: bool,
    }

    impl EnginePort for TestEngine {
        fn is_running(&self) -> bool {
            self.running
        }

        fn set_is_running(&mut self, running: bool) {
            self.running = running;
        }

        fn add_callback(&mut self, _callback: StateCallback) {}

        fn destroy(&mut self) {}
    }

    /// Fails a scripted number of times before producing an engine.
    struct FlakyFactory {
        failures: RefCell<VecDeque<ConfigurationError>>,
    }

    impl FlakyFactory {
        fn failing(messages: &[&str]) -> Self {
            Self {
                failures: RefCell::new(
                    messages.iter().map(|m| ConfigurationError::new(*m)).collect(),
                ),
            }
        }
    }

    impl EngineFactory for FlakyFactory {
        type Engine = TestEngine;

        fn build(&self) -> Result<TestEngine, ConfigurationError> {
            match self.failures.borrow_mut().pop_front() {
                Some(error) => Err(error),
                None => Ok(TestEngine { running: true }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingAlert {
        shown: Vec<(String, String)>,
    }

    impl AlertPort for RecordingAlert {
        fn show(&mut self, title: &str, message: &str) {
            self.shown.push((title.into(), message.into()));
        }
    }

    struct ScriptedDialog {
        outcomes: VecDeque<DialogOutcome>,
        requests: Vec<ConfigDialogRequest>,
    }

    impl ScriptedDialog {
        fn answering(outcomes: &[DialogOutcome]) -> Self {
            Self {
                outcomes: outcomes.iter().copied().collect(),
                requests: Vec::new(),
            }
        }
    }

    impl StartupDialogPort for ScriptedDialog {
        fn show_modal(&mut self, request: &ConfigDialogRequest) -> DialogOutcome {
            self.requests.push(request.clone());
            self.outcomes.pop_front().unwrap_or(DialogOutcome::Cancelled)
        }
    }

    #[test]
    fn immediate_success_skips_the_dialog() {
        let factory = FlakyFactory::failing(&[]);
        let mut dialog = ScriptedDialog::answering(&[]);
        let mut alert = RecordingAlert::default();

        let outcome = run_startup(
            &factory,
            &PathBuf::from("settings.json"),
            &mut dialog,
            &mut alert,
        );

        assert!(matches!(outcome, StartupOutcome::Ready(_)));
        assert!(alert.shown.is_empty());
        assert!(dialog.requests.is_empty());
    }

    #[test]
    fn failure_then_confirm_retries_to_a_running_engine() {
        let factory = FlakyFactory::failing(&["bad config"]);
        let mut dialog = ScriptedDialog::answering(&[DialogOutcome::Confirmed]);
        let mut alert = RecordingAlert::default();

        let outcome = run_startup(
            &factory,
            &PathBuf::from("settings.json"),
            &mut dialog,
            &mut alert,
        );

        let StartupOutcome::Ready(engine) = outcome else {
            panic!("expected a ready engine");
        };
        assert!(engine.is_running());
        assert_eq!(
            alert.shown,
            [(WINDOW_TITLE.to_string(), "bad config".to_string())]
        );
    }

    #[test]
    fn cancel_aborts_startup() {
        let factory = FlakyFactory::failing(&["bad config"]);
        let mut dialog = ScriptedDialog::answering(&[DialogOutcome::Cancelled]);
        let mut alert = RecordingAlert::default();

        let outcome = run_startup(
            &factory,
            &PathBuf::from("settings.json"),
            &mut dialog,
            &mut alert,
        );

        assert!(matches!(outcome, StartupOutcome::Aborted));
    }

    #[test]
    fn startup_dialog_runs_in_init_mode() {
        let factory = FlakyFactory::failing(&["bad config"]);
        let mut dialog = ScriptedDialog::answering(&[DialogOutcome::Confirmed]);
        let mut alert = RecordingAlert::default();

        let _ = run_startup(
            &factory,
            &PathBuf::from("settings.json"),
            &mut dialog,
            &mut alert,
        );

        assert_eq!(dialog.requests.len(), 1);
        assert!(dialog.requests[0].during_init);
    }

    #[test]
    fn retries_are_bounded_only_by_user_action() {
        let factory = FlakyFactory::failing(&["one", "two", "three"]);
        let mut dialog = ScriptedDialog::answering(&[
            DialogOutcome::Confirmed,
            DialogOutcome::Confirmed,
            DialogOutcome::Confirmed,
        ]);
        let mut alert = RecordingAlert::default();

        let outcome = run_startup(
            &factory,
            &PathBuf::from("settings.json"),
            &mut dialog,
            &mut alert,
        );

        assert!(matches!(outcome, StartupOutcome::Ready(_)));
        assert_eq!(alert.shown.len(), 3);
    }

    #[test]
    fn stepwise_flow_counts_attempts() {
        let factory = FlakyFactory::failing(&["bad config"]);
        let mut flow = StartupFlow::new(&factory);

        assert!(matches!(flow.attempt(), StartupStep::AwaitUserFix(_)));
        assert!(matches!(flow.attempt(), StartupStep::Ready(_)));
        assert_eq!(flow.attempts(), 2);
    }
}
