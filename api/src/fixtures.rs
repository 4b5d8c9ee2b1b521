//! Deterministic analytics data.
//!
//! Values are a pure function of the endpoint and the requested dates, so
//! repeated requests return identical bodies. Region and language labels
//! deliberately include alias spellings and unknown buckets so the
//! dashboard's normalization has something to do.

use jiff::civil::Date;
use std::collections::BTreeMap;
use payloads::DateRange;
use payloads::responses::{
    AgeGroup, ConclusionsCount, HistogramBucket, LabelValue, PeakHour,
    RatingSummary, TimePoint, TopUser, TopicSplit, UsersStats,
};

const TOTAL_USERS: u64 = 12_480;

const REGIONS: [(&str, f64); 9] = [
    ("Toshkent shahri", 310.0),
    ("Samarqand", 180.0),
    ("Farg'ona", 150.0),
    ("Andijon", 120.0),
    ("Buxoro", 95.0),
    ("Qoraqalpog'iston", 40.0),
    ("QORAQALPOG'ISTON RESPUBLIKASI", 35.0),
    ("Kokand", 12.0),
    ("Unknown", 60.0),
];

const LANGUAGES: [(&str, f64); 4] =
    [("uz", 520.0), ("ru", 310.0), ("Russian", 25.0), ("en", 40.0)];

const GENDERS: [(&str, f64); 3] =
    [("Female", 480.0), ("Male", 430.0), ("Unknown", 50.0)];

const AGE_GROUPS: [(&str, f64); 5] = [
    ("<20", 90.0),
    ("20-40", 420.0),
    ("40-60", 260.0),
    ("60+", 110.0),
    ("unknown", 40.0),
];

const TOPICS: [&str; 6] = [
    "Cardiology",
    "Pediatrics",
    "Dermatology",
    "Neurology",
    "Nutrition",
    "General",
];

const DOCTORS: [&str; 12] = [
    "Dr. Karimova",
    "Dr. Aliyev",
    "Dr. Rashidov",
    "Dr. Yusupova",
    "Dr. Tursunov",
    "Dr. Nazarova",
    "Dr. Saidov",
    "Dr. Ergasheva",
    "Dr. Mirzaev",
    "Dr. Qodirova",
    "Dr. Hamidov",
    "Dr. Ismoilova",
];

const TOP_USERS: [&str; 5] = ["Dilnoza", "Jasur", "Malika", "Bekzod", "Nodira"];

/// FNV-1a over the seed and date, scaled into [0, 1).
fn noise(seed: &str, date: Date) -> f64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes().chain(date.to_string().bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (hash % 1000) as f64 / 1000.0
}

fn scale(range: &DateRange) -> f64 {
    f64::from(range.len_days())
}

fn daily(
    range: &DateRange,
    seed: &str,
    base: f64,
    spread: f64,
) -> Vec<TimePoint> {
    range
        .dates()
        .map(|date| TimePoint {
            date: date.to_string(),
            value: (base + spread * noise(seed, date)).round(),
        })
        .collect()
}

fn labelled(
    range: &DateRange,
    seed: &str,
    table: &[(&str, f64)],
) -> Vec<LabelValue> {
    let days = scale(range);
    table
        .iter()
        .map(|(label, weight)| {
            let jitter = 0.9 + 0.2 * noise(&format!("{seed}-{label}"), range.to);
            LabelValue::new(*label, (weight * days * jitter / 7.0).round())
        })
        .collect()
}

pub fn users_stats(range: &DateRange) -> UsersStats {
    let active: f64 = active_users(range).iter().map(|p| p.value).sum();
    let to_map = |items: Vec<LabelValue>| -> BTreeMap<String, f64> {
        items
            .into_iter()
            .map(|item| (item.label, item.value))
            .collect()
    };
    UsersStats {
        total_users: TOTAL_USERS,
        active_in_range: Some((active * 0.35).round() as u64),
        active_last_7_days: None,
        active_last_30_days: None,
        active_last_90_days: None,
        by_region: to_map(regions(range)),
        by_location: BTreeMap::new(),
        by_language: to_map(languages(range)),
        by_age_group: AGE_GROUPS
            .iter()
            .map(|(label, weight)| (label.to_string(), *weight))
            .collect(),
        by_gender: to_map(genders(range)),
    }
}

pub fn active_users(range: &DateRange) -> Vec<TimePoint> {
    daily(range, "active", 420.0, 180.0)
}

pub fn daily_active(range: &DateRange) -> Vec<TimePoint> {
    daily(range, "dau", 380.0, 140.0)
}

pub fn monthly_active(range: &DateRange) -> Vec<TimePoint> {
    daily(range, "mau", 5200.0, 600.0)
}

pub fn genders(range: &DateRange) -> Vec<LabelValue> {
    labelled(range, "gender", &GENDERS)
}

pub fn languages(range: &DateRange) -> Vec<LabelValue> {
    labelled(range, "language", &LANGUAGES)
}

pub fn regions(range: &DateRange) -> Vec<LabelValue> {
    labelled(range, "region", &REGIONS)
}

pub fn age_groups(range: &DateRange) -> Vec<AgeGroup> {
    labelled(range, "age", &AGE_GROUPS)
        .into_iter()
        .map(|item| AgeGroup {
            group: item.label,
            value: item.value,
        })
        .collect()
}

pub fn rating_summary(range: &DateRange) -> RatingSummary {
    let days = scale(range);
    RatingSummary {
        total_chats: (days * 230.0) as u64,
        avg_chat_length: 6.0 + 3.0 * noise("chat-length", range.to),
        total_ratings: (days * 61.0) as u64,
        avg_rating: 3.8 + noise("avg-rating", range.to),
    }
}

pub fn rating_histogram(range: &DateRange) -> Vec<HistogramBucket> {
    let days = scale(range);
    [1.0, 2.0, 4.0, 11.0, 18.0]
        .iter()
        .enumerate()
        .map(|(i, weight)| HistogramBucket {
            bucket: (i + 1).to_string(),
            value: (weight * days).round(),
        })
        .collect()
}

pub fn rating_trend(range: &DateRange) -> Vec<TimePoint> {
    range
        .dates()
        .map(|date| TimePoint {
            date: date.to_string(),
            value: ((3.9 + 0.8 * noise("rating", date)) * 100.0).round() / 100.0,
        })
        .collect()
}

pub fn top_users(range: &DateRange) -> Vec<TopUser> {
    let days = scale(range);
    TOP_USERS
        .iter()
        .enumerate()
        .map(|(i, name)| TopUser {
            name: name.to_string(),
            messages: (days * (40.0 - 6.0 * i as f64)) as u64,
            rating: ((4.2 + 0.7 * noise(name, range.to)) * 100.0).round()
                / 100.0,
        })
        .collect()
}

pub fn messages_per_day(range: &DateRange) -> Vec<TimePoint> {
    daily(range, "messages", 1800.0, 900.0)
}

pub fn topics(range: &DateRange) -> Vec<TopicSplit> {
    let days = scale(range);
    TOPICS
        .iter()
        .map(|topic| {
            let ai = (days * (60.0 + 80.0 * noise(topic, range.to))).round();
            let doctor = (ai * (0.2 + 0.3 * noise("doctor", range.from))).round();
            TopicSplit {
                topic: topic.to_string(),
                ai,
                doctor,
            }
        })
        .collect()
}

pub fn doctors(range: &DateRange) -> Vec<LabelValue> {
    let days = scale(range);
    DOCTORS
        .iter()
        .map(|name| {
            LabelValue::new(*name, (days * (4.0 + 12.0 * noise(name, range.to))).round())
        })
        .collect()
}

/// Hours 0..=23 with a daytime hump.
pub fn peak_hours(range: &DateRange) -> Vec<PeakHour> {
    let days = scale(range);
    (0..24)
        .map(|hour| {
            let daytime = if (9..=21).contains(&hour) { 3.0 } else { 1.0 };
            let jitter = noise(&format!("hour-{hour}"), range.to);
            PeakHour {
                hour: hour.to_string(),
                value: (days * daytime * (10.0 + 10.0 * jitter)).round(),
            }
        })
        .collect()
}

pub fn conclusions_timeseries(range: &DateRange) -> Vec<TimePoint> {
    daily(range, "conclusions", 40.0, 35.0)
}

pub fn conclusions_count(range: &DateRange) -> ConclusionsCount {
    let total: f64 = conclusions_timeseries(range).iter().map(|p| p.value).sum();
    ConclusionsCount {
        count: total as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use payloads::RangeKey;

    #[test]
    fn series_cover_every_date() {
        let range = RangeKey::ThirtyDays.resolve(date(2024, 2, 10));
        let points = active_users(&range);
        assert_eq!(points.len(), 30);
        assert_eq!(points[0].date, "2024-01-12");
        assert_eq!(points[29].date, "2024-02-10");
    }

    #[test]
    fn data_is_deterministic() {
        let range = RangeKey::SevenDays.resolve(date(2024, 1, 7));
        assert_eq!(users_stats(&range), users_stats(&range));
        assert_eq!(topics(&range), topics(&range));
    }

    #[test]
    fn peak_hours_span_a_day() {
        let range = RangeKey::SevenDays.resolve(date(2024, 1, 7));
        let hours = peak_hours(&range);
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[23].hour, "23");
    }

    #[test]
    fn conclusions_count_matches_timeseries() {
        let range = RangeKey::NinetyDays.resolve(date(2024, 6, 1));
        let total: f64 = conclusions_timeseries(&range)
            .iter()
            .map(|p| p.value)
            .sum();
        assert_eq!(conclusions_count(&range).count, total as u64);
    }
}
