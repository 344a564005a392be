use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::errors::AppError;

/// User-selected window over the hourly price series, chosen fresh on every
/// render. `LastYear` is a fixed 365 days, not a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    AllTime,
    Last24Hours,
    Last7Days,
    Last30Days,
    Last90Days,
    LastYear,
}

impl TimeRange {
    /// Window length, `None` for `AllTime`.
    pub fn duration(self) -> Option<Duration> {
        match self {
            TimeRange::AllTime => None,
            TimeRange::Last24Hours => Some(Duration::hours(24)),
            TimeRange::Last7Days => Some(Duration::days(7)),
            TimeRange::Last30Days => Some(Duration::days(30)),
            TimeRange::Last90Days => Some(Duration::days(90)),
            TimeRange::LastYear => Some(Duration::days(365)),
        }
    }

    /// The label the dashboard selector shows for this range.
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::AllTime => "All Time",
            TimeRange::Last24Hours => "24 Hours",
            TimeRange::Last7Days => "7 Days",
            TimeRange::Last30Days => "30 Days",
            TimeRange::Last90Days => "90 Days",
            TimeRange::LastYear => "1 Year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    // Accepts the selector labels and their compact forms. Anything else is
    // an error; there is no fallback range.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "all" | "all time" => Ok(TimeRange::AllTime),
            "24h" | "24 hours" => Ok(TimeRange::Last24Hours),
            "7d" | "7 days" => Ok(TimeRange::Last7Days),
            "30d" | "30 days" => Ok(TimeRange::Last30Days),
            "90d" | "90 days" => Ok(TimeRange::Last90Days),
            "1y" | "1 year" => Ok(TimeRange::LastYear),
            _ => Err(AppError::UnknownSelector(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_compact_forms() {
        assert_eq!("All Time".parse::<TimeRange>().unwrap(), TimeRange::AllTime);
        assert_eq!("24h".parse::<TimeRange>().unwrap(), TimeRange::Last24Hours);
        assert_eq!("7 Days".parse::<TimeRange>().unwrap(), TimeRange::Last7Days);
        assert_eq!("30d".parse::<TimeRange>().unwrap(), TimeRange::Last30Days);
        assert_eq!("90 days".parse::<TimeRange>().unwrap(), TimeRange::Last90Days);
        assert_eq!("1y".parse::<TimeRange>().unwrap(), TimeRange::LastYear);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = "fortnight".parse::<TimeRange>().unwrap_err();
        assert!(matches!(err, AppError::UnknownSelector(token) if token == "fortnight"));
    }

    #[test]
    fn year_window_is_a_fixed_365_days() {
        assert_eq!(TimeRange::LastYear.duration(), Some(Duration::days(365)));
    }
}
