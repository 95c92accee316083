use reqwest::Method;

use crate::helper::{spawn_app_with, TestApp};

const SITE_ORIGIN: &str = "https://brightpath.test";

async fn preflight(app: &TestApp, origin: &str) -> reqwest::Response {
    reqwest::Client::new()
        .request(Method::OPTIONS, format!("{}/api/contact", &app.addr))
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("The request should succeed.")
}

async fn spawn_with_site_origin() -> TestApp {
    spawn_app_with(|config| {
        config.application.allowed_origins = vec![SITE_ORIGIN.into()];
    })
    .await
}

#[tokio::test]
async fn a_preflight_from_an_allowed_origin_is_granted() {
    let app = spawn_with_site_origin().await;

    let response = preflight(&app, SITE_ORIGIN).await;

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(SITE_ORIGIN)
    );
    let methods = headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn a_preflight_from_an_unlisted_origin_gets_no_allow_origin() {
    let app = spawn_with_site_origin().await;

    let response = preflight(&app, "https://elsewhere.test").await;

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
