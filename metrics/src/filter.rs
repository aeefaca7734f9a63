/// Selects which registered metrics a reporter includes in a report cycle.
pub trait MetricsFilter: Send + Sync {
    fn accepts(&self, name: &str) -> bool;
}

impl<F> MetricsFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accepts(&self, name: &str) -> bool {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_filter() {
        let filter = |name: &str| name.starts_with("worker.");
        assert!(filter.accepts("worker.emitted"));
        assert!(!filter.accepts("executor.emitted"));
    }

    #[test]
    fn test_closure_filter_as_trait_object() {
        let filter: Box<dyn MetricsFilter> = Box::new(|name: &str| name != "noisy");
        assert!(filter.accepts("quiet"));
        assert!(!filter.accepts("noisy"));
    }
}
