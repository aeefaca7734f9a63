use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::distribution::{Distribution, TimerSnapshot};

/// Monotonically increasing count.
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Point-in-time value that can move in both directions.
pub struct Gauge {
    name: String,
    value: AtomicI64,
}

impl Gauge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicI64::new(0),
        }
    }

    pub fn set(&self, val: i64) {
        self.value.store(val, Ordering::Relaxed);
    }

    pub fn increment(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn decrement(&self) {
        self.value.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Recorded values summarized into a [`Distribution`] at snapshot time.
pub struct Histogram {
    name: String,
    values: parking_lot::Mutex<Vec<f64>>,
}

impl Histogram {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: parking_lot::Mutex::new(Vec::new()),
        }
    }

    pub fn observe(&self, value: f64) {
        self.values.lock().push(value);
    }

    pub fn snapshot(&self) -> Distribution {
        Distribution::from_values(self.values.lock().clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Duration histogram plus an event rate.
///
/// Durations are recorded in nanoseconds; the mean rate is events per second
/// over the timer's lifetime.
pub struct Timer {
    name: String,
    durations: parking_lot::Mutex<Vec<f64>>,
    created_at: Instant,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            durations: parking_lot::Mutex::new(Vec::new()),
            created_at: Instant::now(),
        }
    }

    pub fn record(&self, duration: Duration) {
        self.durations.lock().push(duration.as_nanos() as f64);
    }

    /// Start timing; the elapsed duration is recorded when the guard drops.
    pub fn time(&self) -> TimerGuard<'_> {
        TimerGuard {
            timer: self,
            started_at: Instant::now(),
        }
    }

    pub fn count(&self) -> u64 {
        self.durations.lock().len() as u64
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let durations = Distribution::from_values(self.durations.lock().clone());
        let elapsed = self.created_at.elapsed().as_secs_f64();
        let mean_rate = if elapsed > 0.0 {
            durations.count as f64 / elapsed
        } else {
            0.0
        };
        TimerSnapshot {
            count: durations.count,
            mean_rate,
            durations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub struct TimerGuard<'a> {
    timer: &'a Timer,
    started_at: Instant,
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.timer.record(self.started_at.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let counter = Counter::new("tuples.acked");
        counter.increment();
        counter.add(4);
        assert_eq!(counter.get(), 5);
        assert_eq!(counter.name(), "tuples.acked");
    }

    #[test]
    fn test_gauge() {
        let gauge = Gauge::new("queue.depth");
        gauge.set(10);
        gauge.increment();
        gauge.decrement();
        gauge.decrement();
        assert_eq!(gauge.get(), 9);
    }

    #[test]
    fn test_gauge_negative() {
        let gauge = Gauge::new("drift");
        gauge.set(-3);
        assert_eq!(gauge.get(), -3);
    }

    #[test]
    fn test_histogram_snapshot() {
        let histogram = Histogram::new("latency");
        for value in [4.0, 1.0, 3.0, 2.0] {
            histogram.observe(value);
        }
        let dist = histogram.snapshot();
        assert_eq!(dist.count, 4);
        assert_eq!(dist.sum, 10.0);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 4.0);
        assert_eq!(dist.mean, 2.5);
    }

    #[test]
    fn test_histogram_empty() {
        let histogram = Histogram::new("latency");
        assert_eq!(histogram.snapshot(), Distribution::default());
    }

    #[test]
    fn test_timer_record() {
        let timer = Timer::new("request.time");
        timer.record(Duration::from_millis(2));
        timer.record(Duration::from_millis(4));
        std::thread::sleep(Duration::from_millis(5));
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.durations.min, 2_000_000.0);
        assert_eq!(snapshot.durations.max, 4_000_000.0);
        assert!(snapshot.mean_rate > 0.0);
    }

    #[test]
    fn test_timer_guard_records_on_drop() {
        let timer = Timer::new("request.time");
        {
            let _guard = timer.time();
        }
        assert_eq!(timer.count(), 1);
    }
}
