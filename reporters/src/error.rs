//! Reporter error types

use thiserror::Error;

/// Errors from reporter preparation and report cycles
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Reporter configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CloudWatch error: {0}")]
    CloudWatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_display() {
        let err = ReporterError::Config("no output directory".to_string());
        assert_eq!(
            err.to_string(),
            "Reporter configuration error: no output directory"
        );
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir");
        let err: ReporterError = io_err.into();
        assert!(err.to_string().contains("missing dir"));
    }

    #[test]
    fn test_cloudwatch_display() {
        let err = ReporterError::CloudWatch("PutMetricData error: throttled".to_string());
        assert_eq!(
            err.to_string(),
            "CloudWatch error: PutMetricData error: throttled"
        );
    }
}
