use payloads::{
    Endpoint,
    responses::{HistogramBucket, RatingSummary, TopUser},
};
use test_helpers::spawn_app;

#[tokio::test]
async fn summary_and_histogram() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let range = app.week();

    let summary: RatingSummary =
        app.client.fetch(Endpoint::RatingsSummary, &range, 0).await?;
    assert_eq!(summary.total_chats, 7 * 230);
    assert!((3.8..4.8).contains(&summary.avg_rating));

    let histogram: Vec<HistogramBucket> =
        app.client.fetch(Endpoint::RatingsHistogram, &range, 0).await?;
    let buckets: Vec<_> = histogram.iter().map(|b| b.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["1", "2", "3", "4", "5"]);

    Ok(())
}

#[tokio::test]
async fn top_users_are_ranked_by_messages() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users: Vec<TopUser> =
        app.client.fetch(Endpoint::RatingsTopUsers, &app.week(), 0).await?;
    assert!(!users.is_empty());
    assert!(users.windows(2).all(|w| w[0].messages >= w[1].messages));

    Ok(())
}
