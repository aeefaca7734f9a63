//! Shared resolution of the generic reporter settings.
//!
//! Every reporter reads the same optional keys from its section of the
//! configuration; the functions here keep that parsing in one place. All of
//! them are total: a malformed value degrades to the documented default with
//! a warning instead of failing preparation.

use crate::config::ConfigMap;
use crate::constants::{
    CONF_DURATION_UNIT, CONF_FILTER, CONF_FILTER_EXPRESSION, CONF_RATE_UNIT, CONF_REPORT_PERIOD,
    CONF_REPORT_PERIOD_UNITS, DEFAULT_REPORT_PERIOD, DEFAULT_REPORT_PERIOD_UNIT,
};
use crate::filter::RegexFilter;
use crate::units::TimeUnit;

/// Generic settings shared by every reporter.
#[derive(Debug)]
pub struct ReporterSettings {
    pub period: u64,
    pub period_unit: TimeUnit,
    pub duration_unit: Option<TimeUnit>,
    pub rate_unit: Option<TimeUnit>,
    pub filter: Option<RegexFilter>,
}

impl ReporterSettings {
    /// Resolve the generic settings from a reporter's configuration section.
    pub fn resolve(conf: &ConfigMap) -> Self {
        let settings = Self {
            period: report_period(conf),
            period_unit: report_period_unit(conf),
            duration_unit: duration_unit(conf),
            rate_unit: rate_unit(conf),
            filter: metrics_filter(conf),
        };
        tracing::debug!(
            period = settings.period,
            period_unit = %settings.period_unit,
            filtered = settings.filter.is_some(),
            "Reporter settings resolved"
        );
        settings
    }
}

/// Target unit for reported durations, when configured.
pub fn duration_unit(conf: &ConfigMap) -> Option<TimeUnit> {
    parse_unit(conf, CONF_DURATION_UNIT)
}

/// Target unit for reported rates, when configured.
pub fn rate_unit(conf: &ConfigMap) -> Option<TimeUnit> {
    parse_unit(conf, CONF_RATE_UNIT)
}

/// Reporting interval amount, defaulting to [`DEFAULT_REPORT_PERIOD`].
pub fn report_period(conf: &ConfigMap) -> u64 {
    match conf.get_u64(CONF_REPORT_PERIOD) {
        Some(period) => period,
        None => {
            if let Some(raw) = conf.get_str(CONF_REPORT_PERIOD) {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_REPORT_PERIOD,
                    "Unparsable report period, using the default"
                );
            }
            DEFAULT_REPORT_PERIOD
        }
    }
}

/// Unit of the reporting interval, defaulting to seconds.
pub fn report_period_unit(conf: &ConfigMap) -> TimeUnit {
    match conf.get_str(CONF_REPORT_PERIOD_UNITS) {
        Some(raw) => TimeUnit::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(
                value = %raw,
                default = %DEFAULT_REPORT_PERIOD_UNIT,
                "Unknown report period unit, using the default"
            );
            DEFAULT_REPORT_PERIOD_UNIT
        }),
        None => DEFAULT_REPORT_PERIOD_UNIT,
    }
}

/// Build the configured metric filter, if any.
///
/// The filter lives in a nested mapping: `filter.expression` holds a regex
/// matched against the whole metric name. A missing mapping, missing
/// expression, or invalid expression produces no filter.
pub fn metrics_filter(conf: &ConfigMap) -> Option<RegexFilter> {
    let filter_conf = conf.get_map(CONF_FILTER)?;
    let expression = filter_conf.get_str(CONF_FILTER_EXPRESSION)?;
    match RegexFilter::new(&expression) {
        Ok(filter) => Some(filter),
        Err(err) => {
            tracing::warn!(
                expression = %expression,
                error = %err,
                "Invalid metric filter expression, reporting all metrics"
            );
            None
        }
    }
}

fn parse_unit(conf: &ConfigMap, key: &'static str) -> Option<TimeUnit> {
    let raw = conf.get_str(key)?;
    let unit = TimeUnit::parse(&raw);
    if unit.is_none() {
        tracing::warn!(key, value = %raw, "Unknown time unit, ignoring");
    }
    unit
}
