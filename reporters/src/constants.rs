use crate::units::TimeUnit;

// =============================================================================
// Generic Reporter Keys
// =============================================================================

/// Reporting interval amount
pub const CONF_REPORT_PERIOD: &str = "report.period";

/// Time unit of the reporting interval
pub const CONF_REPORT_PERIOD_UNITS: &str = "report.period.units";

/// Target unit for reported durations
pub const CONF_DURATION_UNIT: &str = "duration.unit";

/// Target unit for reported rates
pub const CONF_RATE_UNIT: &str = "rate.unit";

/// Nested mapping holding the metric filter
pub const CONF_FILTER: &str = "filter";

/// Regex expression key inside the filter mapping
pub const CONF_FILTER_EXPRESSION: &str = "expression";

// =============================================================================
// CloudWatch Reporter Keys
// =============================================================================

/// AWS region identifier for the CloudWatch client
pub const CONF_CLOUDWATCH_REGION: &str = "cloudwatch.region";

/// Namespace metrics are published under
pub const CONF_CLOUDWATCH_NAMESPACE: &str = "cloudwatch.namespace";

// =============================================================================
// CSV Reporter Keys
// =============================================================================

/// Output directory for CSV files
pub const CONF_CSV_LOG_DIR: &str = "csv.log.dir";

/// Base-configuration fallback for the CSV output directory
pub const CONF_STORM_LOG_DIR: &str = "storm.log.dir";

// =============================================================================
// Defaults
// =============================================================================

/// Namespace used when the configuration does not name one
pub const DEFAULT_NAMESPACE: &str = "storm";

/// Reporting interval when the configuration does not set one
pub const DEFAULT_REPORT_PERIOD: u64 = 10;

/// Unit of the reporting interval when the configuration does not set one
pub const DEFAULT_REPORT_PERIOD_UNIT: TimeUnit = TimeUnit::Seconds;

/// Durations are reported in this unit unless a conversion is configured
pub const DEFAULT_DURATION_UNIT: TimeUnit = TimeUnit::Milliseconds;

/// Rates are reported per this unit unless a conversion is configured
pub const DEFAULT_RATE_UNIT: TimeUnit = TimeUnit::Seconds;

// =============================================================================
// CloudWatch API Limits
// =============================================================================

/// PutMetricData accepts at most this many datums per call
pub const MAX_DATUMS_PER_CALL: usize = 1000;
