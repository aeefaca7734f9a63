use std::fmt;
use std::time::Duration;

/// Time units accepted by reporter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Parse a configured unit name. Case-insensitive; unknown names are
    /// `None` rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nanoseconds" => Some(TimeUnit::Nanoseconds),
            "microseconds" => Some(TimeUnit::Microseconds),
            "milliseconds" => Some(TimeUnit::Milliseconds),
            "seconds" => Some(TimeUnit::Seconds),
            "minutes" => Some(TimeUnit::Minutes),
            "hours" => Some(TimeUnit::Hours),
            "days" => Some(TimeUnit::Days),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }

    /// Duration covered by `amount` of this unit. Saturates at
    /// `u64::MAX` seconds instead of overflowing.
    pub fn to_duration(&self, amount: u64) -> Duration {
        match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(amount),
            TimeUnit::Microseconds => Duration::from_micros(amount),
            TimeUnit::Milliseconds => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount.saturating_mul(60)),
            TimeUnit::Hours => Duration::from_secs(amount.saturating_mul(3_600)),
            TimeUnit::Days => Duration::from_secs(amount.saturating_mul(86_400)),
        }
    }

    /// Nanoseconds in one of this unit. Divide a nanosecond value by this to
    /// convert it into the unit.
    pub fn nanos_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1e3,
            TimeUnit::Milliseconds => 1e6,
            TimeUnit::Seconds => 1e9,
            TimeUnit::Minutes => 60.0 * 1e9,
            TimeUnit::Hours => 3_600.0 * 1e9,
            TimeUnit::Days => 86_400.0 * 1e9,
        }
    }

    /// Seconds in one of this unit. Multiply a per-second rate by this to
    /// convert it into a per-unit rate.
    pub fn secs_per_unit(&self) -> f64 {
        self.nanos_per_unit() / 1e9
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(TimeUnit::parse("SECONDS"), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::parse("Milliseconds"), Some(TimeUnit::Milliseconds));
        assert_eq!(TimeUnit::parse(" minutes "), Some(TimeUnit::Minutes));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(TimeUnit::parse("fortnights"), None);
        assert_eq!(TimeUnit::parse(""), None);
    }

    #[test]
    fn test_round_trip_names() {
        for unit in [
            TimeUnit::Nanoseconds,
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
        ] {
            assert_eq!(TimeUnit::parse(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_to_duration() {
        assert_eq!(TimeUnit::Seconds.to_duration(10), Duration::from_secs(10));
        assert_eq!(TimeUnit::Minutes.to_duration(2), Duration::from_secs(120));
        assert_eq!(TimeUnit::Milliseconds.to_duration(500), Duration::from_millis(500));
    }

    #[test]
    fn test_to_duration_saturates() {
        // report.period accepts any u64, so absurd amounts must clamp
        assert_eq!(TimeUnit::Days.to_duration(u64::MAX), Duration::from_secs(u64::MAX));
        assert_eq!(TimeUnit::Minutes.to_duration(u64::MAX), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_conversion_factors() {
        assert_eq!(TimeUnit::Milliseconds.nanos_per_unit(), 1e6);
        assert_eq!(TimeUnit::Seconds.secs_per_unit(), 1.0);
        assert_eq!(TimeUnit::Minutes.secs_per_unit(), 60.0);
        // 1.5 ms recorded in nanoseconds, displayed in milliseconds
        assert_eq!(1_500_000.0 / TimeUnit::Milliseconds.nanos_per_unit(), 1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeUnit::Seconds.to_string(), "seconds");
    }
}
