use derive_more::Display;

use crate::DateRange;

/// Every analytics endpoint the dashboard reads from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("{}", self.path())]
pub enum Endpoint {
    UsersStats,
    UsersActive,
    UsersDau,
    UsersMau,
    UsersGender,
    UsersLanguage,
    UsersRegions,
    UsersAgeGroups,
    RatingsSummary,
    RatingsHistogram,
    RatingsTrend,
    RatingsTopUsers,
    AiMessagesPerDay,
    AiTopics,
    AiDoctors,
    AiPeakHours,
    ConclusionsCount,
    ConclusionsTimeseries,
}

pub const ANALYTICS_PREFIX: &str = "/api/analytics/";

impl Endpoint {
    pub const ALL: [Endpoint; 18] = [
        Self::UsersStats,
        Self::UsersActive,
        Self::UsersDau,
        Self::UsersMau,
        Self::UsersGender,
        Self::UsersLanguage,
        Self::UsersRegions,
        Self::UsersAgeGroups,
        Self::RatingsSummary,
        Self::RatingsHistogram,
        Self::RatingsTrend,
        Self::RatingsTopUsers,
        Self::AiMessagesPerDay,
        Self::AiTopics,
        Self::AiDoctors,
        Self::AiPeakHours,
        Self::ConclusionsCount,
        Self::ConclusionsTimeseries,
    ];

    /// Path relative to `/api/analytics/`, e.g. `users/stats`.
    pub fn name(self) -> &'static str {
        match self {
            Self::UsersStats => "users/stats",
            Self::UsersActive => "users/active",
            Self::UsersDau => "users/dau",
            Self::UsersMau => "users/mau",
            Self::UsersGender => "users/gender",
            Self::UsersLanguage => "users/language",
            Self::UsersRegions => "users/regions",
            Self::UsersAgeGroups => "users/age-groups",
            Self::RatingsSummary => "ratings/summary",
            Self::RatingsHistogram => "ratings/histogram",
            Self::RatingsTrend => "ratings/trend",
            Self::RatingsTopUsers => "ratings/top-users",
            Self::AiMessagesPerDay => "ai/messages-per-day",
            Self::AiTopics => "ai/topics",
            Self::AiDoctors => "ai/doctors",
            Self::AiPeakHours => "ai/peak-hours",
            Self::ConclusionsCount => "conclusions/count",
            Self::ConclusionsTimeseries => "conclusions/timeseries",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_matches('/');
        Self::ALL.into_iter().find(|endpoint| endpoint.name() == name)
    }

    pub fn path(self) -> String {
        format!("{ANALYTICS_PREFIX}{}", self.name())
    }

    /// Path plus the date range and cache-busting refresh token.
    pub fn url_for(self, range: &DateRange, refresh: u64) -> String {
        format!("{}{}", self.path(), range.query(refresh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeKey;
    use jiff::civil::date;

    #[test]
    fn url_carries_range_and_refresh_token() {
        let range = RangeKey::SevenDays.resolve(date(2024, 1, 7));
        assert_eq!(
            Endpoint::UsersStats.url_for(&range, 0),
            "/api/analytics/users/stats?date_from=2024-01-01&date_to=2024-01-07&_=0"
        );
        assert_ne!(
            Endpoint::UsersStats.url_for(&range, 0),
            Endpoint::UsersStats.url_for(&range, 1)
        );
    }

    #[test]
    fn names_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_name(endpoint.name()), Some(endpoint));
        }
        assert_eq!(
            Endpoint::from_name("/users/gender/"),
            Some(Endpoint::UsersGender)
        );
        assert_eq!(Endpoint::from_name("users/locations"), None);
    }
}
