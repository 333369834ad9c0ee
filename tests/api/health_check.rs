use reqwest::StatusCode;

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_returns_200_with_empty_body() {
    let test_address = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{test_address}/health-check"))
        .send()
        .await
        .expect("failed request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(Some(0), response.content_length());
}
