/// Summary statistics over a set of recorded values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
}

impl Distribution {
    /// Compute the statistics for `values`. Empty input yields all zeros.
    pub fn from_values(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let count = values.len() as u64;
        let sum: f64 = values.iter().sum();
        Self {
            count,
            sum,
            min: values[0],
            max: values[values.len() - 1],
            mean: sum / count as f64,
            p50: percentile(&values, 50.0),
            p90: percentile(&values, 90.0),
            p99: percentile(&values, 99.0),
        }
    }
}

/// Snapshot of a [`Timer`](crate::Timer): event count, mean event rate in
/// events per second, and the duration distribution in nanoseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerSnapshot {
    pub count: u64,
    pub mean_rate: f64,
    pub durations: Distribution,
}

fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (pct / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_empty() {
        assert_eq!(Distribution::from_values(Vec::new()), Distribution::default());
    }

    #[test]
    fn test_from_values_stats() {
        let values: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let dist = Distribution::from_values(values);
        assert_eq!(dist.count, 100);
        assert_eq!(dist.sum, 5050.0);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 100.0);
        assert_eq!(dist.mean, 50.5);
        assert_eq!(dist.p50, 51.0);
        assert_eq!(dist.p90, 90.0);
        assert_eq!(dist.p99, 99.0);
    }

    #[test]
    fn test_from_values_unsorted_input() {
        let dist = Distribution::from_values(vec![5.0, 1.0, 3.0]);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.max, 5.0);
        assert_eq!(dist.p50, 3.0);
    }

    #[test]
    fn test_from_values_single() {
        let dist = Distribution::from_values(vec![2.5]);
        assert_eq!(dist.count, 1);
        assert_eq!(dist.min, 2.5);
        assert_eq!(dist.max, 2.5);
        assert_eq!(dist.mean, 2.5);
        assert_eq!(dist.p99, 2.5);
    }
}
