use crate::{event, warn};
use std::collections::HashSet;
use std::sync::Mutex;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tokio::sync::Notify;

/// One precondition of the content reveal. The set is fixed and known in
/// advance; every signal fires at most effectively once.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReadySignal {
    Timeline,
    Astronauts,
    GlobeScene,
    BudgetBoard,
    SplashFloor,
}

/// Join barrier over the fixed [`ReadySignal`] set.
///
/// Signals may complete in any order and concurrently; completion is
/// commutative and duplicate completions are no-ops. Waiters are released
/// once all distinct signals completed at least once. There is no timeout: a
/// signal that never fires holds the gate forever.
#[derive(Debug)]
pub struct ReadinessBarrier {
    outstanding: Mutex<HashSet<ReadySignal>>,
    release: Notify,
}

impl ReadinessBarrier {
    pub fn new() -> Self {
        Self {
            outstanding: Mutex::new(ReadySignal::iter().collect()),
            release: Notify::new(),
        }
    }

    /// Marks one signal as complete. Completing an already-complete signal
    /// changes nothing.
    pub fn complete(&self, signal: ReadySignal) {
        let mut outstanding = self.outstanding.lock().unwrap();
        if outstanding.remove(&signal) {
            event!("readiness signal {signal} complete, {} outstanding", outstanding.len());
            if outstanding.is_empty() {
                self.release.notify_waiters();
            }
        }
    }

    /// Fail-open completion: the underlying operation failed, which is logged
    /// as a warning, but the signal still counts so a broken data source
    /// cannot block the reveal.
    pub fn complete_failed(&self, signal: ReadySignal, reason: &dyn std::fmt::Display) {
        warn!("readiness signal {signal} failed open: {reason}");
        self.complete(signal);
    }

    pub fn is_ready(&self) -> bool { self.outstanding.lock().unwrap().is_empty() }

    /// Resolves once every signal has completed. Multiple waiters are all
    /// released.
    pub async fn all_ready(&self) {
        loop {
            if self.is_ready() {
                return;
            }
            let mut notified = std::pin::pin!(self.release.notified());
            // register before the re-check so a completion in between cannot
            // be missed
            notified.as_mut().enable();
            if self.is_ready() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for ReadinessBarrier {
    fn default() -> Self { Self::new() }
}
