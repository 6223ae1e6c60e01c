mod barrier;
#[cfg(test)]
mod tests;

pub use barrier::{ReadinessBarrier, ReadySignal};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Gates the reveal of the primary content behind the readiness barrier plus
/// a one-shot guard: the transition out of the loading screen runs exactly
/// once, no matter how many tasks await it.
#[derive(Debug)]
pub struct Preloader {
    barrier: Arc<ReadinessBarrier>,
    revealed: AtomicBool,
}

impl Preloader {
    /// Minimum time the loading screen stays up, so a fast load does not
    /// flash incomplete content.
    pub const SPLASH_FLOOR: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self { barrier: Arc::new(ReadinessBarrier::new()), revealed: AtomicBool::new(false) }
    }

    pub fn barrier(&self) -> Arc<ReadinessBarrier> { Arc::clone(&self.barrier) }

    /// Spawns the splash floor timer; [`ReadySignal::SplashFloor`] fires once
    /// the minimum display time elapsed.
    pub fn arm_splash_floor(&self) {
        let barrier = self.barrier();
        tokio::spawn(async move {
            tokio::time::sleep(Self::SPLASH_FLOOR).await;
            barrier.complete(ReadySignal::SplashFloor);
        });
    }

    /// Waits for all signals, then claims the reveal. Returns true for the
    /// single caller that performs the transition, false for every later one.
    pub async fn reveal(&self) -> bool {
        self.barrier.all_ready().await;
        self.revealed.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok()
    }

    pub fn is_revealed(&self) -> bool { self.revealed.load(Ordering::SeqCst) }
}

impl Default for Preloader {
    fn default() -> Self { Self::new() }
}
