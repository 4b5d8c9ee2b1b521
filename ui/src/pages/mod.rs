//! The dashboard shell and one page per tab.

pub mod aisum;
pub mod dashboard;
pub mod monitoring;
pub mod not_found;
pub mod rating;
pub mod users;

pub use aisum::AISumPage;
pub use dashboard::DashboardPage;
pub use monitoring::MonitoringPage;
pub use not_found::NotFoundPage;
pub use rating::RatingPage;
pub use users::UsersPage;

use derive_more::Display;
use payloads::{DateRange, RangeKey, format::format_day, responses::UsersStats};
use yew::prelude::*;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Users,
    Rating,
    #[display("AISum")]
    AISum,
    Monitoring,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Users, Tab::Rating, Tab::AISum, Tab::Monitoring];
}

/// What the shell hands every page.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub range: RangeKey,
    pub date_range: DateRange,
    /// Bumped by the Refresh button; part of every request url.
    pub refresh: u64,
    /// The shared `users/stats` snapshot, once it has arrived.
    #[prop_or_default]
    pub stats: Option<UsersStats>,
}

/// Category formatter for date axes.
pub(crate) fn day_label() -> Callback<String, String> {
    Callback::from(|value: String| format_day(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_labelled_in_order() {
        let labels: Vec<String> = Tab::ALL.iter().map(Tab::to_string).collect();
        assert_eq!(labels, ["Users", "Rating", "AISum", "Monitoring"]);
    }
}
