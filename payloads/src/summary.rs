use std::collections::BTreeMap;

use crate::format::{PLACEHOLDER, format_count};
use crate::reshape::{
    exclude_unknown, from_map, group_by, normalize_language, normalize_region,
};
use crate::responses::{LabelValue, UsersStats};
use crate::RangeKey;

/// One of the headline cards above the tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardData {
    pub id: &'static str,
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
}

/// Largest entry; ties go to the entry that comes first.
pub fn top_entry(items: &[LabelValue]) -> Option<&LabelValue> {
    items.iter().fold(None, |best, item| match best {
        Some(best) if best.value >= item.value => Some(best),
        _ => Some(item),
    })
}

fn top_by(
    map: &BTreeMap<String, f64>,
    normalize: fn(&str) -> String,
) -> Option<LabelValue> {
    let grouped = exclude_unknown(group_by(from_map(map), normalize));
    top_entry(&grouped).cloned()
}

impl UsersStats {
    /// Active users for the selected window, preferring the window-specific
    /// field over the generic one.
    pub fn active_for(&self, range: RangeKey) -> Option<u64> {
        let specific = match range {
            RangeKey::SevenDays => self.active_last_7_days,
            RangeKey::ThirtyDays => self.active_last_30_days,
            RangeKey::NinetyDays => self.active_last_90_days,
        };
        specific.or(self.active_in_range)
    }

    pub fn top_region(&self) -> Option<LabelValue> {
        top_by(self.regions(), normalize_region)
    }

    pub fn top_language(&self) -> Option<LabelValue> {
        top_by(&self.by_language, normalize_language)
    }
}

/// Derive the four headline cards from the shared stats payload.
pub fn summary_cards(
    stats: Option<&UsersStats>,
    range: RangeKey,
) -> [StatCardData; 4] {
    let Some(stats) = stats else {
        return [
            card("total", "Total Users", PLACEHOLDER.into(), "users".into()),
            card(
                "active",
                "Active Users",
                PLACEHOLDER.into(),
                "last range".into(),
            ),
            card("location", "Top Region", PLACEHOLDER.into(), String::new()),
            card("language", "Top Language", PLACEHOLDER.into(), String::new()),
        ];
    };

    let active = stats
        .active_for(range)
        .map(|value| format_count(value as f64))
        .unwrap_or_else(|| PLACEHOLDER.into());
    let (region_value, region_label) = labelled(stats.top_region());
    let (language_value, language_label) = labelled(stats.top_language());

    [
        card(
            "total",
            "Total Users",
            format_count(stats.total_users as f64),
            "users".into(),
        ),
        card("active", "Active Users", active, format!("last {range}")),
        card("location", "Top Region", region_value, region_label),
        card(
            "language",
            "Top Language",
            language_value,
            language_label.to_uppercase(),
        ),
    ]
}

fn labelled(entry: Option<LabelValue>) -> (String, String) {
    match entry {
        Some(entry) => (format_count(entry.value), entry.label),
        None => (PLACEHOLDER.into(), "n/a".into()),
    }
}

fn card(
    id: &'static str,
    title: &'static str,
    value: String,
    subtitle: String,
) -> StatCardData {
    StatCardData {
        id,
        title,
        value,
        subtitle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lenient;
    use serde_json::json;

    fn values(cards: &[StatCardData]) -> Vec<(&str, &str)> {
        cards
            .iter()
            .map(|c| (c.value.as_str(), c.subtitle.as_str()))
            .collect()
    }

    #[test]
    fn stats_snapshot_drives_cards() {
        let stats: UsersStats = serde_json::from_value(json!({
            "total_users": 120,
            "by_location": {"A": 50, "B": 70}
        }))
        .unwrap();
        let cards = summary_cards(Some(&stats), RangeKey::SevenDays);
        assert_eq!(cards[0].value, "120");
        assert_eq!(cards[2].title, "Top Region");
        assert_eq!(cards[2].value, "70");
        assert_eq!(cards[2].subtitle, "B");
        assert_eq!(cards[1].value, PLACEHOLDER);
        assert_eq!(cards[3].subtitle, "n/a");
    }

    #[test]
    fn snapshot_with_both_region_fields_keeps_its_totals() {
        let stats: UsersStats = lenient::object(json!({
            "total_users": 120,
            "by_location": {"A": 50, "B": 70},
            "by_region": {"A": 50, "B": 70}
        }));
        let cards = summary_cards(Some(&stats), RangeKey::SevenDays);
        assert_eq!(cards[0].value, "120");
        assert_eq!(cards[2].value, "70");
        assert_eq!(cards[2].subtitle, "B");
    }

    #[test]
    fn null_language_entry_does_not_blank_the_cards() {
        let stats: UsersStats = lenient::object(json!({
            "total_users": 120,
            "by_region": {"A": 50, "B": 70},
            "by_language": {"uz": null, "ru": 12}
        }));
        let cards = summary_cards(Some(&stats), RangeKey::SevenDays);
        assert_eq!(cards[0].value, "120");
        assert_eq!(cards[2].subtitle, "B");
        assert_eq!(cards[3].value, "12");
        assert_eq!(cards[3].subtitle, "RU");
    }

    #[test]
    fn placeholders_without_stats() {
        let cards = summary_cards(None, RangeKey::NinetyDays);
        assert!(cards.iter().all(|c| c.value == PLACEHOLDER));
        assert_eq!(values(&cards)[0], (PLACEHOLDER, "users"));
    }

    #[test]
    fn active_prefers_window_field() {
        let stats = UsersStats {
            active_in_range: Some(5),
            active_last_30_days: Some(1200),
            ..Default::default()
        };
        let cards = summary_cards(Some(&stats), RangeKey::ThirtyDays);
        assert_eq!(cards[1].value, "1,200");
        assert_eq!(cards[1].subtitle, "last 30d");
        assert_eq!(stats.active_for(RangeKey::SevenDays), Some(5));
    }

    #[test]
    fn top_language_merges_aliases_and_skips_unknown() {
        let stats: UsersStats = serde_json::from_value(json!({
            "by_language": {"ru": 30, "Russian": 25, "uz": 40, "unknown": 99}
        }))
        .unwrap();
        let top = stats.top_language().unwrap();
        assert_eq!(top, LabelValue::new("RU", 55.0));
    }

    #[test]
    fn ties_keep_first_entry() {
        let items = vec![LabelValue::new("a", 2.0), LabelValue::new("b", 2.0)];
        assert_eq!(top_entry(&items).map(|i| i.label.as_str()), Some("a"));
        assert_eq!(top_entry(&[]), None);
    }
}
