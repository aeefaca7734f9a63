//! Instrument registry shared by the scheduled reporters.
//!
//! Worker code records into named counters, gauges, histograms and timers;
//! reporters take filtered, name-sorted snapshots on their own schedule.

pub mod distribution;
pub mod filter;
pub mod metrics;
pub mod registry;

pub use distribution::{Distribution, TimerSnapshot};
pub use filter::MetricsFilter;
pub use metrics::{Counter, Gauge, Histogram, Timer, TimerGuard};
pub use registry::{MetricsRegistry, RegistrySnapshot};
