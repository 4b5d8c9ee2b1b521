use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Where the server's "today" comes from. Requests without explicit dates
/// default to the week ending today, so tests pin it.
#[derive(Clone, Debug, Default)]
pub struct TimeSource {
    pinned: Option<Date>,
}

impl TimeSource {
    /// Follow the system clock.
    pub fn system() -> Self {
        Self::default()
    }

    /// Freeze "today" at the UTC date of `at`.
    #[cfg(feature = "mock-time")]
    pub fn pinned(at: Timestamp) -> Self {
        Self {
            pinned: Some(at.to_zoned(TimeZone::UTC).date()),
        }
    }

    /// Calendar date in UTC, matching how the dashboard resolves ranges.
    pub fn today(&self) -> Date {
        self.pinned
            .unwrap_or_else(|| Timestamp::now().to_zoned(TimeZone::UTC).date())
    }
}

#[cfg(all(test, feature = "mock-time"))]
mod tests {
    use super::*;

    #[test]
    fn pinned_today_ignores_the_clock() {
        let at: Timestamp = "2024-01-07T23:59:00Z".parse().unwrap();
        let today = TimeSource::pinned(at).today();
        assert_eq!(today, jiff::civil::date(2024, 1, 7));
    }
}
