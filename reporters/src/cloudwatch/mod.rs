//! CloudWatch reporter
//!
//! Publishes registry snapshots to CloudWatch as custom metrics under a
//! configured namespace. Preparation resolves the region and namespace from
//! the reporter configuration, builds the SDK client from its default
//! provider chain, and wires the generic reporter settings into the
//! reporter builder.

pub mod region;

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::builders::MetricDatumBuilder;
use aws_sdk_cloudwatch::types::{MetricDatum, StandardUnit};
use chrono::Utc;

use stormwatch_metrics::{Distribution, MetricsFilter, MetricsRegistry, RegistrySnapshot};

use crate::config::ConfigMap;
use crate::constants::{
    CONF_CLOUDWATCH_NAMESPACE, CONF_CLOUDWATCH_REGION, DEFAULT_DURATION_UNIT, DEFAULT_NAMESPACE,
    DEFAULT_RATE_UNIT, MAX_DATUMS_PER_CALL,
};
use crate::error::ReporterError;
use crate::reporter::{PreparedReporter, ScheduledReporter};
use crate::settings::ReporterSettings;
use crate::units::TimeUnit;

pub use region::Region;

/// Region and namespace resolved from the reporter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudWatchSettings {
    pub region: Option<Region>,
    pub namespace: String,
}

impl CloudWatchSettings {
    /// Resolve the CloudWatch-specific settings.
    ///
    /// Both keys are optional. An unknown region identifier is treated the
    /// same as an absent one and the SDK's own region providers take over.
    /// A missing namespace falls back to [`DEFAULT_NAMESPACE`]; a present
    /// one is used verbatim.
    pub fn resolve(reporter_conf: &ConfigMap) -> Self {
        let region = match reporter_conf.get_str(CONF_CLOUDWATCH_REGION) {
            Some(raw) => {
                let region = Region::parse(&raw);
                if region.is_none() {
                    tracing::info!(
                        value = %raw,
                        "Unknown CloudWatch region, deferring to the SDK region providers"
                    );
                }
                region
            }
            None => {
                tracing::info!(
                    "No CloudWatch region configured, deferring to the SDK region providers"
                );
                None
            }
        };

        let namespace = match reporter_conf.get_str(CONF_CLOUDWATCH_NAMESPACE) {
            Some(namespace) => namespace,
            None => {
                tracing::info!(
                    namespace = DEFAULT_NAMESPACE,
                    "No CloudWatch namespace configured, using the default"
                );
                DEFAULT_NAMESPACE.to_string()
            }
        };

        Self { region, namespace }
    }
}

/// Build a CloudWatch client, pinning the region only when one was resolved.
async fn build_client(region: Option<Region>) -> Client {
    let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = region {
        config_loader =
            config_loader.region(aws_sdk_cloudwatch::config::Region::new(region.as_str()));
    }

    let config = config_loader.load().await;
    Client::new(&config)
}

/// Builder for [`CloudWatchReporter`].
///
/// Durations publish in milliseconds and rates per second unless a
/// conversion is requested.
pub struct CloudWatchReporterBuilder {
    registry: Arc<MetricsRegistry>,
    client: Client,
    namespace: String,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
    filter: Option<Box<dyn MetricsFilter>>,
}

impl CloudWatchReporterBuilder {
    /// Publish durations converted to `unit`.
    pub fn convert_durations_to(mut self, unit: TimeUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Publish rates converted to events per `unit`.
    pub fn convert_rates_to(mut self, unit: TimeUnit) -> Self {
        self.rate_unit = unit;
        self
    }

    /// Publish only metrics the filter accepts.
    pub fn filter(mut self, filter: impl MetricsFilter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn build(self) -> CloudWatchReporter {
        CloudWatchReporter {
            registry: self.registry,
            client: self.client,
            namespace: self.namespace,
            duration_unit: self.duration_unit,
            rate_unit: self.rate_unit,
            filter: self.filter,
        }
    }
}

/// Reporter publishing snapshots with `PutMetricData`.
pub struct CloudWatchReporter {
    registry: Arc<MetricsRegistry>,
    client: Client,
    namespace: String,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
    filter: Option<Box<dyn MetricsFilter>>,
}

impl CloudWatchReporter {
    pub fn builder(
        registry: Arc<MetricsRegistry>,
        client: Client,
        namespace: impl Into<String>,
    ) -> CloudWatchReporterBuilder {
        CloudWatchReporterBuilder {
            registry,
            client,
            namespace: namespace.into(),
            duration_unit: DEFAULT_DURATION_UNIT,
            rate_unit: DEFAULT_RATE_UNIT,
            filter: None,
        }
    }

    /// Namespace metrics are published under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

fn datum(name: impl Into<String>, value: f64, timestamp: DateTime) -> MetricDatumBuilder {
    MetricDatum::builder()
        .metric_name(name)
        .value(value)
        .timestamp(timestamp)
}

fn distribution_stats(dist: &Distribution) -> [(&'static str, f64); 6] {
    [
        ("min", dist.min),
        ("max", dist.max),
        ("mean", dist.mean),
        ("p50", dist.p50),
        ("p90", dist.p90),
        ("p99", dist.p99),
    ]
}

/// CloudWatch standard unit for a duration target unit, where one exists.
fn standard_unit(unit: TimeUnit) -> Option<StandardUnit> {
    match unit {
        TimeUnit::Seconds => Some(StandardUnit::Seconds),
        TimeUnit::Milliseconds => Some(StandardUnit::Milliseconds),
        TimeUnit::Microseconds => Some(StandardUnit::Microseconds),
        _ => None,
    }
}

/// Flatten a snapshot into `PutMetricData` datums.
///
/// Counters publish as `Count`; gauges carry no standard unit. Histograms
/// flatten into `.count`, `.sum` and per-statistic datums of their raw
/// values. Timers flatten into `.count`, `.mean_rate` (converted to events
/// per `rate_unit`) and per-statistic duration datums converted to
/// `duration_unit`.
fn metric_data(
    snapshot: &RegistrySnapshot,
    timestamp: DateTime,
    duration_unit: TimeUnit,
    rate_unit: TimeUnit,
) -> Vec<MetricDatum> {
    let mut data = Vec::new();

    for (name, value) in &snapshot.counters {
        data.push(
            datum(name, *value as f64, timestamp)
                .unit(StandardUnit::Count)
                .build(),
        );
    }

    for (name, value) in &snapshot.gauges {
        data.push(datum(name, *value as f64, timestamp).build());
    }

    for (name, dist) in &snapshot.histograms {
        data.push(
            datum(format!("{name}.count"), dist.count as f64, timestamp)
                .unit(StandardUnit::Count)
                .build(),
        );
        data.push(datum(format!("{name}.sum"), dist.sum, timestamp).build());
        for (stat, value) in distribution_stats(dist) {
            data.push(datum(format!("{name}.{stat}"), value, timestamp).build());
        }
    }

    let factor = duration_unit.nanos_per_unit();
    let unit = standard_unit(duration_unit);
    for (name, timer) in &snapshot.timers {
        data.push(
            datum(format!("{name}.count"), timer.count as f64, timestamp)
                .unit(StandardUnit::Count)
                .build(),
        );

        let rate = timer.mean_rate * rate_unit.secs_per_unit();
        let mut rate_datum = datum(format!("{name}.mean_rate"), rate, timestamp);
        if rate_unit == TimeUnit::Seconds {
            rate_datum = rate_datum.unit(StandardUnit::CountSecond);
        }
        data.push(rate_datum.build());

        for (stat, value) in distribution_stats(&timer.durations) {
            let mut stat_datum = datum(format!("{name}.{stat}"), value / factor, timestamp);
            if let Some(unit) = unit.clone() {
                stat_datum = stat_datum.unit(unit);
            }
            data.push(stat_datum.build());
        }
    }

    data
}

#[async_trait]
impl ScheduledReporter for CloudWatchReporter {
    async fn prepare(
        registry: Arc<MetricsRegistry>,
        _base_conf: &ConfigMap,
        reporter_conf: &ConfigMap,
    ) -> Result<PreparedReporter<Self>, ReporterError> {
        let settings = ReporterSettings::resolve(reporter_conf);
        let cloudwatch = CloudWatchSettings::resolve(reporter_conf);

        let client = build_client(cloudwatch.region).await;

        let mut builder = Self::builder(registry, client, cloudwatch.namespace);
        if let Some(unit) = settings.duration_unit {
            builder = builder.convert_durations_to(unit);
        }
        if let Some(unit) = settings.rate_unit {
            builder = builder.convert_rates_to(unit);
        }
        if let Some(filter) = settings.filter {
            builder = builder.filter(filter);
        }
        let reporter = builder.build();

        tracing::debug!(
            namespace = %reporter.namespace,
            period = settings.period,
            period_unit = %settings.period_unit,
            "CloudWatch reporter prepared"
        );

        Ok(PreparedReporter {
            reporter,
            period: settings.period,
            period_unit: settings.period_unit,
        })
    }

    async fn report(&self) -> Result<(), ReporterError> {
        let snapshot = self.registry.snapshot(self.filter.as_deref());
        let timestamp = DateTime::from_millis(Utc::now().timestamp_millis());
        let data = metric_data(&snapshot, timestamp, self.duration_unit, self.rate_unit);

        if data.is_empty() {
            tracing::debug!("No metrics to publish");
            return Ok(());
        }

        // PutMetricData caps each call at MAX_DATUMS_PER_CALL datums
        for chunk in data.chunks(MAX_DATUMS_PER_CALL) {
            self.client
                .put_metric_data()
                .namespace(&self.namespace)
                .set_metric_data(Some(chunk.to_vec()))
                .send()
                .await
                .map_err(|e| ReporterError::CloudWatch(format!("PutMetricData error: {}", e)))?;
        }

        tracing::debug!(
            datums = data.len(),
            namespace = %self.namespace,
            "Metrics published to CloudWatch"
        );

        Ok(())
    }
}
