use payloads::{ClientError, Endpoint, FetchSlot, responses::LabelValue};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app, spawn_app_with};

#[tokio::test]
async fn injected_failure_is_a_status_error() -> anyhow::Result<()> {
    let app = spawn_app_with(&[Endpoint::UsersGender]).await;
    let range = app.week();

    let result = app
        .client
        .fetch::<Vec<LabelValue>>(Endpoint::UsersGender, &range, 0)
        .await;
    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);

    // siblings keep working
    let languages: Vec<LabelValue> =
        app.client.fetch(Endpoint::UsersLanguage, &range, 0).await?;
    assert!(!languages.is_empty());

    Ok(())
}

#[tokio::test]
async fn server_error_keeps_previous_data() -> anyhow::Result<()> {
    let healthy = spawn_app().await;
    let failing = spawn_app_with(&[Endpoint::UsersGender]).await;
    let range = healthy.week();
    let mut slot = FetchSlot::new(None);

    let (attempt, _registration) = slot.begin();
    let outcome = healthy
        .client
        .fetch::<Vec<LabelValue>>(Endpoint::UsersGender, &range, 0)
        .await
        .map_err(|e| e.to_string());
    assert!(slot.resolve(attempt, outcome));
    let before = slot.data().clone();

    let (attempt, _registration) = slot.begin();
    let outcome = failing
        .client
        .fetch::<Vec<LabelValue>>(Endpoint::UsersGender, &range, 1)
        .await
        .map_err(|e| e.to_string());
    assert!(slot.resolve(attempt, outcome));

    assert_eq!(slot.error(), Some("Request failed with 500"));
    assert_eq!(slot.data(), &before);
    assert!(!slot.loading());

    Ok(())
}

#[tokio::test]
async fn inverted_range_is_bad_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .get_json("/api/analytics/users/active?date_from=2024-02-01&date_to=2024-01-01")
        .await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let client = payloads::APIClient::new("http://127.0.0.1:9");

    let error = client.health_check().await.unwrap_err();
    assert!(matches!(error, ClientError::Network(_)));
    assert_eq!(
        error.to_string(),
        "Network error. Please check your connection."
    );

    Ok(())
}
