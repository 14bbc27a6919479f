use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use crate::config::settings;
use crate::core::stroke::Stroke;
use crate::engine::{
    ConfigurationError, EngineFactory, EnginePort, StateCallback, StrokeSink, StrokeSource,
    source_for_machine,
};

struct Flags {
    running: bool,
    shutdown: bool,
}

struct SharedState {
    flags: Mutex<Flags>,
    wake: Condvar,
    callbacks: Mutex<Vec<StateCallback>>,
}

/// An engine handle backed by a worker thread that pulls strokes from a
/// [`StrokeSource`] while the engine is running.
///
/// State callbacks fire on the thread that called `set_is_running`; strokes
/// are delivered on the worker thread. `destroy` joins the worker, so neither
/// arrives after it returns.
pub struct ThreadedEngine {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadedEngine {
    #[must_use]
    pub fn new(mut source: Box<dyn StrokeSource>, on_stroke: StrokeSink) -> Self {
        let shared = Arc::new(SharedState {
            flags: Mutex::new(Flags {
                running: true,
                shutdown: false,
            }),
            wake: Condvar::new(),
            callbacks: Mutex::new(Vec::new()),
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, source.as_mut(), on_stroke.as_ref());
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    fn worker_loop(
        shared: &Arc<SharedState>,
        source: &mut dyn StrokeSource,
        on_stroke: &(dyn Fn(Stroke) + Send + Sync),
    ) {
        loop {
            {
                let mut flags = shared.flags.lock().unwrap();
                while !flags.shutdown && !flags.running {
                    flags = shared.wake.wait(flags).unwrap();
                }
                if flags.shutdown {
                    return;
                }
            }

            let Some(stroke) = source.next_stroke() else {
                tracing::debug!("stroke source exhausted, engine worker exiting");
                return;
            };

            on_stroke(stroke);
        }
    }

    fn notify_state_changed(&self) {
        for callback in self.shared.callbacks.lock().unwrap().iter() {
            callback();
        }
    }
}

impl EnginePort for ThreadedEngine {
    fn is_running(&self) -> bool {
        self.shared.flags.lock().unwrap().running
    }

    fn set_is_running(&mut self, running: bool) {
        {
            let mut flags = self.shared.flags.lock().unwrap();
            if flags.shutdown || flags.running == running {
                return;
            }
            flags.running = running;
        }

        self.shared.wake.notify_one();
        tracing::debug!(running, "engine running state changed");
        self.notify_state_changed();
    }

    fn add_callback(&mut self, callback: StateCallback) {
        self.shared.callbacks.lock().unwrap().push(callback);
    }

    fn destroy(&mut self) {
        {
            let mut flags = self.shared.flags.lock().unwrap();
            if flags.shutdown {
                return;
            }
            flags.shutdown = true;
        }

        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }

        self.shared.callbacks.lock().unwrap().clear();
        tracing::debug!("engine destroyed");
    }
}

impl Drop for ThreadedEngine {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Builds [`ThreadedEngine`]s from the settings file at `config_path`.
///
/// All configuration validation happens here, at construction time, so the
/// startup retry loop sees every problem as a [`ConfigurationError`].
pub struct ThreadedEngineFactory {
    config_path: PathBuf,
    on_stroke: StrokeSink,
}

impl ThreadedEngineFactory {
    #[must_use]
    pub fn new(config_path: PathBuf, on_stroke: StrokeSink) -> Self {
        Self {
            config_path,
            on_stroke,
        }
    }
}

impl EngineFactory for ThreadedEngineFactory {
    type Engine = ThreadedEngine;

    fn build(&self) -> Result<ThreadedEngine, ConfigurationError> {
        let settings = settings::load(&self.config_path)
            .map_err(|error| ConfigurationError::new(error.to_string()))?;

        if let Some(dictionary) = &settings.dictionary_path
            && !dictionary.is_file()
        {
            return Err(ConfigurationError::new(format!(
                "dictionary file not found: {}",
                dictionary.display()
            )));
        }

        let source = source_for_machine(&settings.machine_type).ok_or_else(|| {
            ConfigurationError::new(format!(
                "unsupported machine type: {}",
                settings.machine_type
            ))
        })?;

        // With stroke logging off, the engine still runs; it just feeds a
        // sink that drops everything.
        let sink: StrokeSink = if settings.log_strokes {
            Arc::clone(&self.on_stroke)
        } else {
            Arc::new(|_| {})
        };

        Ok(ThreadedEngine::new(source, sink))
    }
}
