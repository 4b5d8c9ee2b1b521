use derive_more::Display;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

/// Symbolic time window offered by the range selector.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum RangeKey {
    #[default]
    #[display("7d")]
    #[serde(rename = "7d")]
    SevenDays,
    #[display("30d")]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[display("90d")]
    #[serde(rename = "90d")]
    NinetyDays,
}

/// Selector entries in display order, as (label, key).
pub const RANGE_OPTIONS: [(&str, RangeKey); 3] = [
    ("Last 7d", RangeKey::SevenDays),
    ("Last 30d", RangeKey::ThirtyDays),
    ("Last 90d", RangeKey::NinetyDays),
];

impl RangeKey {
    /// Parse a selector value. Anything unrecognized resolves to 7 days.
    pub fn parse_lossy(value: &str) -> Self {
        match value.trim() {
            "30d" => Self::ThirtyDays,
            "90d" => Self::NinetyDays,
            _ => Self::SevenDays,
        }
    }

    pub fn days(self) -> i32 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }

    pub fn label(self) -> &'static str {
        RANGE_OPTIONS
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(label, _)| *label)
            .unwrap_or("Last 7d")
    }

    /// Inclusive interval of `days()` calendar dates ending on `today`.
    pub fn resolve(self, today: Date) -> DateRange {
        let from = today
            .checked_sub(jiff::Span::new().days(self.days() - 1))
            .unwrap_or(today);
        DateRange { from, to: today }
    }
}

/// Concrete inclusive date interval sent to the analytics api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

impl DateRange {
    /// Resolve against the current UTC calendar date.
    pub fn today_in_utc(key: RangeKey) -> Self {
        key.resolve(Timestamp::now().to_zoned(TimeZone::UTC).date())
    }

    /// Query string with a cache-busting refresh token.
    pub fn query(&self, refresh: u64) -> String {
        format!(
            "?date_from={}&date_to={}&_={refresh}",
            self.from.strftime("%Y-%m-%d"),
            self.to.strftime("%Y-%m-%d"),
        )
    }

    /// Number of calendar dates covered, both ends included.
    pub fn len_days(&self) -> i32 {
        self.from
            .until(self.to)
            .map(|span| span.get_days() + 1)
            .unwrap_or(1)
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.from
            .series(jiff::Span::new().days(1))
            .take_while(move |date| *date <= self.to)
    }
}
