use payloads::{
    Endpoint,
    reshape::top_n,
    responses::{LabelValue, PeakHour, TopicSplit},
};
use test_helpers::spawn_app;

#[tokio::test]
async fn topics_split_ai_and_doctor() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let topics: Vec<TopicSplit> =
        app.client.fetch(Endpoint::AiTopics, &app.week(), 0).await?;
    assert_eq!(topics.len(), 6);
    assert!(topics.iter().all(|t| t.doctor <= t.ai));

    Ok(())
}

#[tokio::test]
async fn doctors_trim_to_top_ten() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let doctors: Vec<LabelValue> =
        app.client.fetch(Endpoint::AiDoctors, &app.week(), 0).await?;
    assert_eq!(doctors.len(), 12);
    let top = top_n(doctors.clone(), 10);
    assert_eq!(top.len(), 10);
    let smallest_kept = top.last().map(|d| d.value).unwrap_or_default();
    let dropped = doctors.iter().filter(|d| d.value < smallest_kept).count();
    assert!(dropped <= 2);

    Ok(())
}

#[tokio::test]
async fn peak_hours_cover_the_day() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let hours: Vec<PeakHour> =
        app.client.fetch(Endpoint::AiPeakHours, &app.week(), 0).await?;
    assert_eq!(hours.len(), 24);

    Ok(())
}
