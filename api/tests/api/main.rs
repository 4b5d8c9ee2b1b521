mod ai;
mod faults;
mod ratings;
mod users;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn every_endpoint_answers_json() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let range = app.week();

    for endpoint in payloads::Endpoint::ALL {
        let body = app.client.get_json(&endpoint.url_for(&range, 0)).await?;
        assert!(
            body.is_array() || body.is_object(),
            "{endpoint} returned {body}"
        );
    }

    Ok(())
}
