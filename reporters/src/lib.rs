//! Scheduled metrics reporters for Storm-style stream processing workers.
//!
//! A reporter is initialized once from the host's loose configuration
//! mapping via [`ScheduledReporter::prepare`], which hands back the reporter
//! together with the reporting interval the host's scheduler should drive it
//! at. Each [`ScheduledReporter::report`] call flushes one snapshot of the
//! shared [`MetricsRegistry`](stormwatch_metrics::MetricsRegistry) to the
//! reporter's destination.
//!
//! Shipped destinations: CloudWatch custom metrics, per-metric CSV files,
//! and a plain-text console dump.

pub mod cloudwatch;
pub mod config;
pub mod console;
pub mod constants;
pub mod csv;
pub mod error;
pub mod filter;
pub mod reporter;
pub mod settings;
pub mod units;

pub use cloudwatch::{CloudWatchReporter, CloudWatchSettings, Region};
pub use config::ConfigMap;
pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use error::ReporterError;
pub use filter::RegexFilter;
pub use reporter::{PreparedReporter, ScheduledReporter};
pub use settings::ReporterSettings;
pub use units::TimeUnit;
