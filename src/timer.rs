//! Cancellable periodic tasks (playback clock, live viewer jitter)

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Handle to a spawned periodic task. Dropping it aborts the task.
#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Run `on_tick` every `period`, first call one period from now.
    /// The task ends on its own once `on_tick` resolves to `false`.
    pub fn start<F, Fut>(name: &'static str, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        tracing::debug!(ticker = name, period_ms = period.as_millis() as u64, "Starting ticker");
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval() fires immediately; swallow that one
            interval.tick().await;
            loop {
                interval.tick().await;
                if !on_tick().await {
                    tracing::debug!(ticker = name, "Ticker finished");
                    break;
                }
            }
        });
        Self { name, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        if self.is_running() {
            tracing::debug!(ticker = self.name, "Stopping ticker");
        }
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting(limit: u32) -> (Arc<AtomicU32>, impl FnMut() -> std::future::Ready<bool> + Send + 'static) {
        let count = Arc::new(AtomicU32::new(0));
        let inner = count.clone();
        let on_tick = move || {
            let n = inner.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(n < limit)
        };
        (count, on_tick)
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_after_the_first() {
        let (count, on_tick) = counting(u32::MAX);
        let ticker = Ticker::start("test", Duration::from_secs(1), on_tick);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_callback_says_so() {
        let (count, on_tick) = counting(2);
        let ticker = Ticker::start("test", Duration::from_secs(1), on_tick);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_and_drop_abort_the_task() {
        let (count, on_tick) = counting(u32::MAX);
        let ticker = Ticker::start("test", Duration::from_secs(1), on_tick);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let (count, on_tick) = counting(u32::MAX);
        drop(Ticker::start("test", Duration::from_secs(1), on_tick));
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
