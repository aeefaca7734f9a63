use std::sync::Arc;

use dashmap::DashMap;

use crate::distribution::{Distribution, TimerSnapshot};
use crate::filter::MetricsFilter;
use crate::metrics::{Counter, Gauge, Histogram, Timer};

/// Shared registry of named instruments.
///
/// Looking up a name creates the instrument on first use and returns the
/// same shared instance afterwards.
pub struct MetricsRegistry {
    counters: DashMap<String, Arc<Counter>>,
    gauges: DashMap<String, Arc<Gauge>>,
    histograms: DashMap<String, Arc<Histogram>>,
    timers: DashMap<String, Arc<Timer>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            gauges: DashMap::new(),
            histograms: DashMap::new(),
            timers: DashMap::new(),
        }
    }

    pub fn counter(&self, name: &str) -> Arc<Counter> {
        self.counters
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .value()
            .clone()
    }

    pub fn gauge(&self, name: &str) -> Arc<Gauge> {
        self.gauges
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Gauge::new(name)))
            .value()
            .clone()
    }

    pub fn histogram(&self, name: &str) -> Arc<Histogram> {
        self.histograms
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name)))
            .value()
            .clone()
    }

    pub fn timer(&self, name: &str) -> Arc<Timer> {
        self.timers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Timer::new(name)))
            .value()
            .clone()
    }

    /// Point-in-time copy of every instrument the filter accepts.
    ///
    /// Entries are sorted by metric name per kind so repeated snapshots of
    /// an unchanged registry produce identical output. `None` includes
    /// everything.
    pub fn snapshot(&self, filter: Option<&dyn MetricsFilter>) -> RegistrySnapshot {
        let accepts = |name: &str| match filter {
            Some(filter) => filter.accepts(name),
            None => true,
        };

        let mut counters: Vec<(String, u64)> = self
            .counters
            .iter()
            .filter(|entry| accepts(entry.key()))
            .map(|entry| (entry.key().clone(), entry.value().get()))
            .collect();
        counters.sort_by(|a, b| a.0.cmp(&b.0));

        let mut gauges: Vec<(String, i64)> = self
            .gauges
            .iter()
            .filter(|entry| accepts(entry.key()))
            .map(|entry| (entry.key().clone(), entry.value().get()))
            .collect();
        gauges.sort_by(|a, b| a.0.cmp(&b.0));

        let mut histograms: Vec<(String, Distribution)> = self
            .histograms
            .iter()
            .filter(|entry| accepts(entry.key()))
            .map(|entry| (entry.key().clone(), entry.value().snapshot()))
            .collect();
        histograms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut timers: Vec<(String, TimerSnapshot)> = self
            .timers
            .iter()
            .filter(|entry| accepts(entry.key()))
            .map(|entry| (entry.key().clone(), entry.value().snapshot()))
            .collect();
        timers.sort_by(|a, b| a.0.cmp(&b.0));

        RegistrySnapshot {
            counters,
            gauges,
            histograms,
            timers,
        }
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a registry, sorted by metric name per kind.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub counters: Vec<(String, u64)>,
    pub gauges: Vec<(String, i64)>,
    pub histograms: Vec<(String, Distribution)>,
    pub timers: Vec<(String, TimerSnapshot)>,
}

impl RegistrySnapshot {
    /// Total number of metrics across all kinds.
    pub fn len(&self) -> usize {
        self.counters.len() + self.gauges.len() + self.histograms.len() + self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
