//! Timer loop that keeps stepping the cycle until stopped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

use super::pacing::{Pacing, DEFAULT_INITIAL_DELAY_MS};
use super::script::Script;
use super::state::{step, CycleState};
use crate::error::ConfigError;
use crate::surface::TextSurface;
use crate::timer::Timer;

/// Knobs for a running cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOptions {
    pub pacing: Pacing,
    /// Wait before the first step.
    pub initial_delay: Duration,
    /// Stop on its own after this many steps. `None` runs until stopped.
    pub max_steps: Option<u64>,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            max_steps: None,
        }
    }
}

/// What a finished cycle hands back.
#[derive(Debug)]
pub struct CycleOutcome<S> {
    pub state: CycleState,
    pub steps: u64,
    pub surface: S,
}

/// Cloneable stop signal detached from the handle, e.g. for a Ctrl-C task.
#[derive(Debug, Clone)]
pub struct Stopper {
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl Stopper {
    /// Prevent any further step from running. Idempotent.
    pub fn stop(&self) {
        self.cancel_tx.send_replace(true);
    }
}

/// Control handle for a spawned cycle.
///
/// Dropping the handle does not stop the task; call [`stop`](Self::stop).
pub struct TypewriterHandle<S> {
    stopper: Stopper,
    task: JoinHandle<CycleOutcome<S>>,
}

impl<S> TypewriterHandle<S> {
    /// Prevent any further step from running. Idempotent.
    pub fn stop(&self) {
        self.stopper.stop();
    }

    pub fn stopper(&self) -> Stopper {
        self.stopper.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the task to end and recover its state and surface.
    pub async fn join(self) -> Result<CycleOutcome<S>, JoinError> {
        self.task.await
    }

    pub async fn stop_and_join(self) -> Result<CycleOutcome<S>, JoinError> {
        self.stop();
        self.join().await
    }
}

/// Validate the script and spawn the cycle on the current tokio runtime.
///
/// Fails with [`ConfigError::EmptyScript`] before anything is scheduled when
/// `sentences` is empty.
pub fn start<I, Str, S, T>(
    sentences: I,
    surface: S,
    timer: T,
    options: CycleOptions,
) -> Result<TypewriterHandle<S>, ConfigError>
where
    I: IntoIterator<Item = Str>,
    Str: Into<String>,
    S: TextSurface + 'static,
    T: Timer + 'static,
{
    let script = Script::new(sentences)?;
    let (cancel_tx, cancel_rx) = watch::channel(false);
    tracing::info!(
        sentences = script.len(),
        initial_delay_ms = options.initial_delay.as_millis() as u64,
        "typewriter started"
    );
    let task = tokio::spawn(drive(script, surface, timer, options, cancel_rx));
    Ok(TypewriterHandle {
        stopper: Stopper {
            cancel_tx: Arc::new(cancel_tx),
        },
        task,
    })
}

async fn drive<S, T>(
    script: Script,
    mut surface: S,
    timer: T,
    options: CycleOptions,
    mut cancel_rx: watch::Receiver<bool>,
) -> CycleOutcome<S>
where
    S: TextSurface,
    T: Timer,
{
    let mut state = CycleState::new();
    let mut steps: u64 = 0;
    let mut wait = options.initial_delay;

    loop {
        if options.max_steps.is_some_and(|max| steps >= max) {
            break;
        }
        tokio::select! {
            biased;
            () = stop_requested(&mut cancel_rx) => break,
            () = timer.sleep(wait) => {}
        }
        // Sleep and stop can become ready together; stop wins.
        if *cancel_rx.borrow() {
            break;
        }
        let (next, delay) = step(state, &script, &mut surface);
        state = next;
        steps += 1;
        wait = options.pacing.duration(delay);
    }

    tracing::info!(steps, sentence = state.sentence_index, "typewriter stopped");
    CycleOutcome {
        state,
        steps,
        surface,
    }
}

/// Resolves once `stop` was called. Dropping every handle and stopper
/// never resolves it.
async fn stop_requested(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
