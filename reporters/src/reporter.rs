//! The prepare/report contract shared by every reporter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use stormwatch_metrics::MetricsRegistry;

use crate::config::ConfigMap;
use crate::error::ReporterError;
use crate::units::TimeUnit;

/// A metrics reporter driven by an external scheduler.
///
/// `prepare` runs once per reporter instance before scheduling begins: it
/// resolves configuration, builds any backend client, and hands back the
/// reporter together with the interval the scheduler should invoke it at.
/// `report` then flushes one registry snapshot per invocation. Start/stop
/// and the timer itself belong to the host.
#[async_trait]
pub trait ScheduledReporter {
    /// One-shot initialization from the host's configuration.
    ///
    /// `base_conf` is the host-wide configuration and `reporter_conf` the
    /// section for this reporter instance. Reporters read their own keys
    /// from `reporter_conf` and fall back to `base_conf` only where
    /// documented.
    async fn prepare(
        registry: Arc<MetricsRegistry>,
        base_conf: &ConfigMap,
        reporter_conf: &ConfigMap,
    ) -> Result<PreparedReporter<Self>, ReporterError>
    where
        Self: Sized;

    /// Flush one snapshot of the registry to the destination.
    async fn report(&self) -> Result<(), ReporterError>;
}

/// A reporter plus the schedule it was configured with.
pub struct PreparedReporter<R> {
    /// The initialized reporter
    pub reporter: R,
    /// Reporting interval amount
    pub period: u64,
    /// Unit of `period`
    pub period_unit: TimeUnit,
}

impl<R> PreparedReporter<R> {
    /// The reporting interval as a [`Duration`] for the scheduler.
    pub fn interval(&self) -> Duration {
        self.period_unit.to_duration(self.period)
    }
}
