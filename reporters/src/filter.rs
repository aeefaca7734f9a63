use regex::Regex;

use stormwatch_metrics::MetricsFilter;

/// Metric filter backed by a regular expression.
///
/// The expression must match the entire metric name: `worker\..*` accepts
/// `worker.emitted`, while `emitted` alone does not.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    pattern: Regex,
}

impl RegexFilter {
    /// Compile `expression` into a whole-name matcher.
    pub fn new(expression: &str) -> Result<Self, regex::Error> {
        // Anchored so a partial match does not pass the filter.
        let pattern = Regex::new(&format!("^(?:{expression})$"))?;
        Ok(Self { pattern })
    }
}

impl MetricsFilter for RegexFilter {
    fn accepts(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_name_match() {
        let filter = RegexFilter::new("worker\\..*").unwrap();
        assert!(filter.accepts("worker.emitted"));
        assert!(filter.accepts("worker.acked.count"));
        assert!(!filter.accepts("executor.emitted"));
    }

    #[test]
    fn test_partial_match_rejected() {
        let filter = RegexFilter::new("emitted").unwrap();
        assert!(filter.accepts("emitted"));
        assert!(!filter.accepts("worker.emitted"));
        assert!(!filter.accepts("emitted.count"));
    }

    #[test]
    fn test_alternation() {
        let filter = RegexFilter::new("acked|failed").unwrap();
        assert!(filter.accepts("acked"));
        assert!(filter.accepts("failed"));
        assert!(!filter.accepts("emitted"));
    }

    #[test]
    fn test_invalid_expression() {
        assert!(RegexFilter::new("worker.(").is_err());
    }
}
