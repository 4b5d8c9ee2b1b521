use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lenient;

/// Aggregate snapshot from `users/stats`, shared by the summary cards and
/// the Users page.
///
/// Older deployments send `by_location`, newer ones `by_region`, and some
/// send both; read regions through [`UsersStats::regions`].
///
/// Each field decodes on its own: a malformed one is left at its default
/// without discarding the rest of the snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersStats {
    #[serde(deserialize_with = "lenient::count")]
    pub total_users: u64,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub active_in_range: Option<u64>,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub active_last_7_days: Option<u64>,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub active_last_30_days: Option<u64>,
    #[serde(deserialize_with = "lenient::optional_count")]
    pub active_last_90_days: Option<u64>,
    #[serde(deserialize_with = "lenient::number_map")]
    pub by_region: BTreeMap<String, f64>,
    #[serde(
        deserialize_with = "lenient::number_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub by_location: BTreeMap<String, f64>,
    #[serde(deserialize_with = "lenient::number_map")]
    pub by_language: BTreeMap<String, f64>,
    #[serde(deserialize_with = "lenient::number_map")]
    pub by_age_group: BTreeMap<String, f64>,
    #[serde(deserialize_with = "lenient::number_map")]
    pub by_gender: BTreeMap<String, f64>,
}

impl UsersStats {
    /// `by_region` when it has entries, otherwise the legacy `by_location`.
    pub fn regions(&self) -> &BTreeMap<String, f64> {
        if self.by_region.is_empty() {
            &self.by_location
        } else {
            &self.by_region
        }
    }
}

/// A dated value. The monitoring feed names the value `count`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: String,
    #[serde(alias = "count")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelValue {
    pub label: String,
    pub value: f64,
}

impl LabelValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeGroup {
    pub group: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSummary {
    #[serde(deserialize_with = "lenient::count")]
    pub total_chats: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub avg_chat_length: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub total_ratings: u64,
    #[serde(deserialize_with = "lenient::number")]
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub bucket: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopUser {
    pub name: String,
    pub messages: u64,
    pub rating: f64,
}

/// Messages on a topic split between the assistant and human doctors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopicSplit {
    pub topic: String,
    pub ai: f64,
    pub doctor: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeakHour {
    pub hour: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConclusionsCount {
    #[serde(deserialize_with = "lenient::count")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_location_field_maps_to_regions() {
        let stats: UsersStats = serde_json::from_value(json!({
            "total_users": 120,
            "by_location": {"A": 50, "B": 70}
        }))
        .unwrap();
        assert_eq!(stats.total_users, 120);
        assert_eq!(stats.regions().get("B"), Some(&70.0));
        assert!(stats.by_language.is_empty());
    }

    #[test]
    fn both_region_fields_decode_and_newer_wins() {
        let stats: UsersStats = serde_json::from_value(json!({
            "total_users": 120,
            "by_location": {"A": 50, "B": 70},
            "by_region": {"Toshkent": 90}
        }))
        .unwrap();
        assert_eq!(stats.total_users, 120);
        assert_eq!(stats.regions().len(), 1);
        assert_eq!(stats.regions().get("Toshkent"), Some(&90.0));
    }

    #[test]
    fn monitoring_count_field_is_a_value() {
        let point: TimePoint =
            serde_json::from_value(json!({"date": "2024-01-01", "count": 4}))
                .unwrap();
        assert_eq!(point.value, 4.0);
    }
}
