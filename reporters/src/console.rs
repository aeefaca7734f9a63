//! Console reporter
//!
//! Dumps each registry snapshot to stdout as a plain-text block, one section
//! per instrument kind. Mostly useful for local topology debugging.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use stormwatch_metrics::{MetricsFilter, MetricsRegistry, RegistrySnapshot};

use crate::config::ConfigMap;
use crate::constants::{DEFAULT_DURATION_UNIT, DEFAULT_RATE_UNIT};
use crate::error::ReporterError;
use crate::reporter::{PreparedReporter, ScheduledReporter};
use crate::settings::ReporterSettings;
use crate::units::TimeUnit;

pub struct ConsoleReporter {
    registry: Arc<MetricsRegistry>,
    filter: Option<Box<dyn MetricsFilter>>,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
}

/// Render a snapshot as the text block the reporter prints.
///
/// Timer durations are shown in `duration_unit` and rates per `rate_unit`;
/// empty sections are omitted.
fn render(
    snapshot: &RegistrySnapshot,
    timestamp: DateTime<Utc>,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "== Metrics report {} ==\n",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC")
    ));

    if !snapshot.counters.is_empty() {
        out.push_str("-- counters --\n");
        for (name, value) in &snapshot.counters {
            out.push_str(&format!("{name}: {value}\n"));
        }
    }

    if !snapshot.gauges.is_empty() {
        out.push_str("-- gauges --\n");
        for (name, value) in &snapshot.gauges {
            out.push_str(&format!("{name}: {value}\n"));
        }
    }

    if !snapshot.histograms.is_empty() {
        out.push_str("-- histograms --\n");
        for (name, dist) in &snapshot.histograms {
            out.push_str(&format!(
                "{name}: count={} sum={:.2} min={:.2} max={:.2} mean={:.2} p50={:.2} p90={:.2} p99={:.2}\n",
                dist.count, dist.sum, dist.min, dist.max, dist.mean, dist.p50, dist.p90, dist.p99
            ));
        }
    }

    if !snapshot.timers.is_empty() {
        out.push_str(&format!("-- timers ({duration_unit}) --\n"));
        let factor = duration_unit.nanos_per_unit();
        for (name, timer) in &snapshot.timers {
            let durations = &timer.durations;
            out.push_str(&format!(
                "{name}: count={} mean_rate={:.2}/{rate_unit} min={:.2} max={:.2} mean={:.2} p50={:.2} p90={:.2} p99={:.2}\n",
                timer.count,
                timer.mean_rate * rate_unit.secs_per_unit(),
                durations.min / factor,
                durations.max / factor,
                durations.mean / factor,
                durations.p50 / factor,
                durations.p90 / factor,
                durations.p99 / factor
            ));
        }
    }

    out
}

#[async_trait]
impl ScheduledReporter for ConsoleReporter {
    async fn prepare(
        registry: Arc<MetricsRegistry>,
        _base_conf: &ConfigMap,
        reporter_conf: &ConfigMap,
    ) -> Result<PreparedReporter<Self>, ReporterError> {
        let settings = ReporterSettings::resolve(reporter_conf);
        let reporter = Self {
            registry,
            filter: settings
                .filter
                .map(|filter| Box::new(filter) as Box<dyn MetricsFilter>),
            duration_unit: settings.duration_unit.unwrap_or(DEFAULT_DURATION_UNIT),
            rate_unit: settings.rate_unit.unwrap_or(DEFAULT_RATE_UNIT),
        };
        Ok(PreparedReporter {
            reporter,
            period: settings.period,
            period_unit: settings.period_unit,
        })
    }

    async fn report(&self) -> Result<(), ReporterError> {
        let snapshot = self.registry.snapshot(self.filter.as_deref());
        let block = render(&snapshot, Utc::now(), self.duration_unit, self.rate_unit);
        print!("{block}");
        Ok(())
    }
}
