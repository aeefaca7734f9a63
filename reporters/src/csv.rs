//! CSV file reporter
//!
//! Appends one row per metric per report cycle to `<dir>/<metric>.csv`,
//! writing the header row when a file is first created. The output
//! directory comes from the reporter's `csv.log.dir`, falling back to the
//! base configuration's `storm.log.dir`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use stormwatch_metrics::{MetricsFilter, MetricsRegistry};

use crate::config::ConfigMap;
use crate::constants::{
    CONF_CSV_LOG_DIR, CONF_STORM_LOG_DIR, DEFAULT_DURATION_UNIT, DEFAULT_RATE_UNIT,
};
use crate::error::ReporterError;
use crate::reporter::{PreparedReporter, ScheduledReporter};
use crate::settings::ReporterSettings;
use crate::units::TimeUnit;

pub struct CsvReporter {
    registry: Arc<MetricsRegistry>,
    directory: PathBuf,
    filter: Option<Box<dyn MetricsFilter>>,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
}

impl CsvReporter {
    /// Append `row` to the metric's file, writing `header` first if the
    /// file does not exist yet.
    async fn append_row(
        &self,
        metric: &str,
        header: &str,
        row: String,
    ) -> Result<(), ReporterError> {
        let path = self.directory.join(format!("{metric}.csv"));
        let is_new = !tokio::fs::try_exists(&path).await?;

        let mut contents = String::new();
        if is_new {
            contents.push_str(header);
            contents.push('\n');
        }
        contents.push_str(&row);
        contents.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ScheduledReporter for CsvReporter {
    async fn prepare(
        registry: Arc<MetricsRegistry>,
        base_conf: &ConfigMap,
        reporter_conf: &ConfigMap,
    ) -> Result<PreparedReporter<Self>, ReporterError> {
        let settings = ReporterSettings::resolve(reporter_conf);

        let directory = reporter_conf
            .get_str(CONF_CSV_LOG_DIR)
            .or_else(|| base_conf.get_str(CONF_STORM_LOG_DIR))
            .ok_or_else(|| {
                ReporterError::Config(format!(
                    "CSV reporter needs an output directory: set {CONF_CSV_LOG_DIR} or {CONF_STORM_LOG_DIR}"
                ))
            })?;
        let directory = PathBuf::from(directory);
        tokio::fs::create_dir_all(&directory).await?;

        tracing::debug!(directory = %directory.display(), "CSV reporter initialized");

        let reporter = Self {
            registry,
            directory,
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
        let timestamp = Utc::now().timestamp_millis();

        for (name, value) in &snapshot.counters {
            self.append_row(name, "timestamp,count", format!("{timestamp},{value}"))
                .await?;
        }

        for (name, value) in &snapshot.gauges {
            self.append_row(name, "timestamp,value", format!("{timestamp},{value}"))
                .await?;
        }

        for (name, dist) in &snapshot.histograms {
            self.append_row(
                name,
                "timestamp,count,sum,min,max,mean,p50,p90,p99",
                format!(
                    "{timestamp},{},{},{},{},{},{},{},{}",
                    dist.count,
                    dist.sum,
                    dist.min,
                    dist.max,
                    dist.mean,
                    dist.p50,
                    dist.p90,
                    dist.p99
                ),
            )
            .await?;
        }

        let factor = self.duration_unit.nanos_per_unit();
        for (name, timer) in &snapshot.timers {
            let durations = &timer.durations;
            self.append_row(
                name,
                "timestamp,count,mean_rate,min,max,mean,p50,p90,p99",
                format!(
                    "{timestamp},{},{},{},{},{},{},{},{}",
                    timer.count,
                    timer.mean_rate * self.rate_unit.secs_per_unit(),
                    durations.min / factor,
                    durations.max / factor,
                    durations.mean / factor,
                    durations.p50 / factor,
                    durations.p90 / factor,
                    durations.p99 / factor
                ),
            )
            .await?;
        }

        tracing::debug!(metrics = snapshot.len(), "Metrics written to CSV");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conf(value: serde_json::Value) -> ConfigMap {
        match value {
            serde_json::Value::Object(map) => ConfigMap::from(map),
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prepare_requires_directory() {
        let registry = Arc::new(MetricsRegistry::new());
        let result = CsvReporter::prepare(registry, &ConfigMap::new(), &ConfigMap::new()).await;
        assert!(matches!(result, Err(ReporterError::Config(_))));
    }

    #[tokio::test]
    async fn test_prepare_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("metrics");
        let registry = Arc::new(MetricsRegistry::new());
        let reporter_conf = conf(json!({
            "csv.log.dir": target.to_string_lossy(),
        }));

        CsvReporter::prepare(registry, &ConfigMap::new(), &reporter_conf)
            .await
            .unwrap();
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_prepare_falls_back_to_base_conf() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("storm-logs");
        let registry = Arc::new(MetricsRegistry::new());
        let base_conf = conf(json!({
            "storm.log.dir": target.to_string_lossy(),
        }));

        let prepared = CsvReporter::prepare(registry, &base_conf, &ConfigMap::new())
            .await
            .unwrap();
        assert_eq!(prepared.reporter.directory, target);
    }

    #[tokio::test]
    async fn test_report_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(MetricsRegistry::new());
        registry.counter("tuples.acked").add(5);

        let reporter_conf = conf(json!({
            "csv.log.dir": dir.path().to_string_lossy(),
        }));
        let prepared = CsvReporter::prepare(registry.clone(), &ConfigMap::new(), &reporter_conf)
            .await
            .unwrap();

        prepared.reporter.report().await.unwrap();
        registry.counter("tuples.acked").add(2);
        prepared.reporter.report().await.unwrap();

        let contents = tokio::fs::read_to_string(dir.path().join("tuples.acked.csv"))
            .await
            .unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "timestamp,count");
        assert!(lines[1].ends_with(",5"));
        assert!(lines[2].ends_with(",7"));
    }

    #[tokio::test]
    async fn test_report_histogram_and_timer_columns() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(MetricsRegistry::new());
        registry.histogram("latency").observe(2.0);
        registry
            .timer("request.time")
            .record(std::time::Duration::from_millis(3));

        let reporter_conf = conf(json!({
            "csv.log.dir": dir.path().to_string_lossy(),
        }));
        let prepared = CsvReporter::prepare(registry, &ConfigMap::new(), &reporter_conf)
            .await
            .unwrap();
        prepared.reporter.report().await.unwrap();

        let histogram = tokio::fs::read_to_string(dir.path().join("latency.csv"))
            .await
            .unwrap();
        let lines: Vec<&str> = histogram.lines().collect();
        assert_eq!(lines[0], "timestamp,count,sum,min,max,mean,p50,p90,p99");
        assert_eq!(lines[1].split(',').count(), 9);

        let timer = tokio::fs::read_to_string(dir.path().join("request.time.csv"))
            .await
            .unwrap();
        let lines: Vec<&str> = timer.lines().collect();
        assert_eq!(lines[0], "timestamp,count,mean_rate,min,max,mean,p50,p90,p99");
        let fields: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(fields.len(), 9);
        // durations recorded in ns, written in the default milliseconds
        assert_eq!(fields[3], "3");
    }

    #[tokio::test]
    async fn test_report_applies_filter() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(MetricsRegistry::new());
        registry.counter("worker.emitted").increment();
        registry.counter("executor.emitted").increment();

        let reporter_conf = conf(json!({
            "csv.log.dir": dir.path().to_string_lossy(),
            "filter": { "expression": "worker\\..*" },
        }));
        let prepared = CsvReporter::prepare(registry, &ConfigMap::new(), &reporter_conf)
            .await
            .unwrap();
        prepared.reporter.report().await.unwrap();

        assert!(dir.path().join("worker.emitted.csv").exists());
        assert!(!dir.path().join("executor.emitted.csv").exists());
    }
}
