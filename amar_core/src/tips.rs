//! Rotating health tips.
//!
//! The tip list is fixed and read-only; rotation state is a single index
//! that starts at the first tip on every process start and wraps after the
//! last. [`TipTicker`] runs the rotation on a background interval and is
//! stopped when its owner tears it down.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Built-in advisory strings
pub const HEALTH_TIPS: [&str; 5] = [
    "Regular exercise can help maintain a healthy BMI",
    "Stay hydrated! Drink at least 8 glasses of water daily",
    "Get 7-9 hours of sleep for optimal health",
    "Eat a balanced diet rich in fruits and vegetables",
    "Take regular breaks from sitting to stay active",
];

/// Cycles through [`HEALTH_TIPS`], starting from the first tip
#[derive(Debug, Default)]
pub struct TipRotator {
    index: usize,
}

impl TipRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tip at the current index
    pub fn current(&self) -> &'static str {
        HEALTH_TIPS[self.index]
    }

    /// Current index into [`HEALTH_TIPS`]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Advance to the next tip, wrapping to the first after the last.
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % HEALTH_TIPS.len();
        self.current()
    }
}

/// Background timer advancing the tip rotation at a fixed interval.
///
/// There is a single in-flight timer with no reentrancy: one worker thread
/// sleeps for the interval, advances, and repeats. `stop` (also run on
/// drop) cancels the pending sleep and joins the worker.
pub struct TipTicker {
    index: Arc<AtomicUsize>,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TipTicker {
    /// Start the rotation from the first tip.
    pub fn start(interval: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));
        let worker_index = Arc::clone(&index);
        let (stop_tx, stop_rx) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            let mut rotator = TipRotator::new();
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        rotator.advance();
                        worker_index.store(rotator.position(), Ordering::Relaxed);
                    }
                    // Stop requested or owner dropped
                    _ => break,
                }
            }
        });

        Self {
            index,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// The tip at the current rotation index
    pub fn current(&self) -> &'static str {
        HEALTH_TIPS[self.index.load(Ordering::Relaxed)]
    }

    /// Cancel the timer and wait for the worker to exit.
    ///
    /// Idempotent; returns without waiting out a pending interval.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TipTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
