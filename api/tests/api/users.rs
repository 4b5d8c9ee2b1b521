use payloads::{
    Endpoint, lenient,
    reshape::{self, normalize_region},
    responses::{LabelValue, TimePoint, UsersStats},
    summary::summary_cards,
};
use test_helpers::spawn_app;

#[tokio::test]
async fn stats_feed_summary_cards() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let range = app.week();

    let stats: UsersStats =
        app.client.fetch(Endpoint::UsersStats, &range, 0).await?;
    assert_eq!(stats.total_users, 12_480);

    let cards = summary_cards(Some(&stats), payloads::RangeKey::SevenDays);
    assert_eq!(cards[0].value, "12,480");
    // the fixture's largest region survives normalization and exclusion
    assert_eq!(cards[2].subtitle, "Toshkent shahri");
    assert_eq!(cards[3].subtitle, "UZ");

    Ok(())
}

#[tokio::test]
async fn series_follow_requested_range() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let range = payloads::RangeKey::ThirtyDays.resolve(app.time_source.today());

    let active: Vec<TimePoint> =
        app.client.fetch(Endpoint::UsersActive, &range, 0).await?;
    assert_eq!(active.len(), 30);
    assert_eq!(active.first().map(|p| p.date.as_str()), Some("2023-12-09"));
    assert_eq!(active.last().map(|p| p.date.as_str()), Some("2024-01-07"));

    Ok(())
}

#[tokio::test]
async fn region_aliases_collapse_after_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let raw = app
        .client
        .get_json(&Endpoint::UsersRegions.url_for(&app.week(), 0))
        .await?;
    let regions: Vec<LabelValue> = lenient::list(raw);
    let shaped = reshape::exclude_unknown(reshape::group_by(
        regions,
        normalize_region,
    ));

    let labels: Vec<_> = shaped.iter().map(|r| r.label.as_str()).collect();
    assert!(labels.contains(&"Qoraqalpog'iston Respublikasi"));
    assert!(!labels.iter().any(|l| l.eq_ignore_ascii_case("unknown")));
    assert!(!labels.contains(&"Kokand"));
    assert_eq!(
        labels
            .iter()
            .filter(|l| l.to_lowercase().contains("qoraqalpog"))
            .count(),
        1
    );

    Ok(())
}

#[tokio::test]
async fn refetch_with_new_token_is_idempotent() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let range = app.week();

    let first = app.client.get_json(&Endpoint::UsersGender.url_for(&range, 0)).await?;
    let second = app.client.get_json(&Endpoint::UsersGender.url_for(&range, 1)).await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn missing_dates_default_to_last_week() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let active: Vec<TimePoint> = app.client.get(&Endpoint::UsersDau.path()).await?;
    assert_eq!(active.len(), 7);
    assert_eq!(active[0].date, "2024-01-01");

    Ok(())
}
