//! Deterministic reshaping applied to fetched arrays before charting.
//!
//! Every function here is pure and independent of input order, apart from
//! the stable tie-break in [`top_n`].

use std::collections::BTreeMap;

use crate::responses::LabelValue;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Labels that never make it into a regional breakdown.
pub const EXCLUDED_LABELS: [&str; 4] = ["unknown", "n/a", "none", "kokand"];

/// Substring of a lowercased region name, and the canonical name it maps to.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("qoraqalpog'iston", "Qoraqalpog'iston Respublikasi"),
    ("qoraqalpogiston", "Qoraqalpog'iston Respublikasi"),
    ("karakalpak", "Qoraqalpog'iston Respublikasi"),
];

/// Lowercased language name or code, and its canonical code.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("uz", "UZ"),
    ("uzb", "UZ"),
    ("uzbek", "UZ"),
    ("o'zbek", "UZ"),
    ("ru", "RU"),
    ("rus", "RU"),
    ("russian", "RU"),
    ("русский", "RU"),
    ("en", "EN"),
    ("eng", "EN"),
    ("english", "EN"),
    ("kk", "KK"),
    ("kaz", "KK"),
    ("kazakh", "KK"),
    ("tg", "TG"),
    ("tajik", "TG"),
    ("ky", "KY"),
    ("kyrgyz", "KY"),
];

/// Lowercased age bucket with whitespace removed, and its canonical bucket.
const AGE_ALIASES: &[(&str, &str)] = &[
    ("<20", "<20"),
    ("under20", "<20"),
    ("0-20", "<20"),
    ("0-19", "<20"),
    ("20-40", "20-40"),
    ("20-39", "20-40"),
    ("40-60", "40-60"),
    ("40-59", "40-60"),
    ("60+", "60+"),
    (">60", "60+"),
    ("60andover", "60+"),
];

/// Display order of the canonical age buckets.
pub const AGE_ORDER: [&str; 5] = ["<20", "20-40", "40-60", "60+", "unknown"];

pub fn normalize_region(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return UNKNOWN_LABEL.to_string();
    }
    let lower = trimmed.to_lowercase();
    REGION_ALIASES
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

pub fn normalize_language(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return UNKNOWN_LABEL.to_string();
    }
    let lower = trimmed.to_lowercase();
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_uppercase())
}

pub fn normalize_age_group(name: &str) -> String {
    let compact: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    AGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == compact)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn is_excluded_label(label: &str) -> bool {
    let lower = label.trim().to_lowercase();
    EXCLUDED_LABELS.contains(&lower.as_str())
}

/// Sum values by normalized label, comparing labels case-insensitively.
///
/// When spellings differing only in case survive normalization, the
/// lexicographically smallest one is displayed. Output is sorted by label.
pub fn group_by<I, F>(items: I, normalize: F) -> Vec<LabelValue>
where
    I: IntoIterator<Item = LabelValue>,
    F: Fn(&str) -> String,
{
    let mut groups: BTreeMap<String, (String, f64)> = BTreeMap::new();
    for item in items {
        let label = normalize(&item.label);
        let entry = groups
            .entry(label.to_lowercase())
            .or_insert_with(|| (label.clone(), 0.0));
        if label < entry.0 {
            entry.0 = label;
        }
        entry.1 += item.value;
    }
    groups
        .into_values()
        .map(|(label, value)| LabelValue { label, value })
        .collect()
}

pub fn from_map(map: &BTreeMap<String, f64>) -> Vec<LabelValue> {
    map.iter()
        .filter(|(_, value)| value.is_finite())
        .map(|(label, value)| LabelValue::new(label.clone(), *value))
        .collect()
}

pub fn exclude_unknown(items: Vec<LabelValue>) -> Vec<LabelValue> {
    items
        .into_iter()
        .filter(|item| !is_excluded_label(&item.label))
        .collect()
}

/// Stable descending sort: equal values keep their relative order.
pub fn sort_desc_by<T>(items: &mut [T], value: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| value(b).total_cmp(&value(a)));
}

pub fn top_n_by<T>(
    mut items: Vec<T>,
    n: usize,
    value: impl Fn(&T) -> f64,
) -> Vec<T> {
    sort_desc_by(&mut items, value);
    items.truncate(n);
    items
}

pub fn top_n(items: Vec<LabelValue>, n: usize) -> Vec<LabelValue> {
    top_n_by(items, n, |item| item.value)
}

/// Arrange items to follow `order`; labels not listed keep their relative
/// order at the end.
pub fn order_by_labels(
    items: Vec<LabelValue>,
    order: &[&str],
) -> Vec<LabelValue> {
    let rank = |label: &str| {
        order
            .iter()
            .position(|known| *known == label)
            .unwrap_or(order.len())
    };
    let mut items = items;
    items.sort_by_key(|item| rank(&item.label));
    items
}

/// Latest point of a series against the one before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub current: f64,
    pub previous: f64,
}

impl Trend {
    /// A missing previous point compares equal to the current one; an empty
    /// series is all zeros.
    pub fn from_series(values: &[f64]) -> Self {
        let current = values.last().copied().unwrap_or(0.0);
        let previous = values
            .len()
            .checked_sub(2)
            .and_then(|i| values.get(i))
            .copied()
            .unwrap_or(current);
        Self { current, previous }
    }

    pub fn delta(&self) -> f64 {
        self.current - self.previous
    }

    pub fn is_holding(&self) -> bool {
        self.current >= self.previous
    }
}
