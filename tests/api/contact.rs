use serde_json::{json, Value};
use wiremock::{
    matchers::{any, method, path},
    Mock, ResponseTemplate,
};

use crate::helper::{
    live_mode, spawn_app, spawn_app_with, CompanyEmail, ENERGY_INBOX, VERIFIED_RECIPIENT,
};

fn valid_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Rooftop panels",
        "message": "Could you give me an estimate for my roof?"
    })
}

#[tokio::test]
async fn contact_returns_200_and_sends_two_emails_for_valid_data() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("contact", &valid_body()).await;
    assert_eq!(200, response.status().as_u16());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["testMode"], true);
    assert_eq!(body["recipientEmail"], VERIFIED_RECIPIENT);

    let emails = app.sent_emails().await;
    let company = &emails[0];
    assert_eq!(company["reply_to"], "ada@example.com");
    assert!(company["html"].as_str().unwrap().contains("Rooftop panels"));
    assert!(company["html"]
        .as_str()
        .unwrap()
        .contains("Could you give me an estimate for my roof?"));
    assert!(company["subject"].as_str().unwrap().contains("Rooftop panels"));
}

#[tokio::test]
async fn testing_mode_sends_both_emails_to_the_verified_address() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_form("contact", &valid_body()).await;

    for email in app.sent_emails().await {
        assert_eq!(email["to"], json!([VERIFIED_RECIPIENT]));
    }
}

#[tokio::test]
async fn live_mode_sends_to_the_inbox_and_the_submitter() {
    let app = spawn_app_with(live_mode).await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("contact", &valid_body()).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["testMode"], false);
    assert_eq!(body["recipientEmail"], "ada@example.com");

    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["to"], json!([ENERGY_INBOX]));
    assert_eq!(emails[1]["to"], json!(["ada@example.com"]));
}

#[tokio::test]
async fn contact_returns_a_400_naming_the_missing_field() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for field in ["name", "email", "subject", "message"] {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_form("contact", &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was missing {}",
            field
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["field"], field);
    }
}

#[tokio::test]
async fn contact_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;
    let test_cases = [
        ("email", json!("definitely-not-an-email"), "invalid email"),
        ("name", json!(""), "empty name"),
        ("message", json!("too short"), "short message"),
        ("brand", json!("mining"), "unknown brand"),
    ];

    for (field, value, description) in test_cases {
        let mut body = valid_body();
        body[field] = value;

        let response = app.post_form("contact", &body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload had an {}.",
            description
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["errors"][0]["field"], field);
    }
}

#[tokio::test]
async fn malformed_json_is_a_400() {
    let app = spawn_app().await;

    let response = app.post_raw("contact", r#"{"name": "Ada", "#).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn a_missing_content_type_is_a_400() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", app.addr))
        .body(valid_body().to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn a_failed_company_email_fails_the_request_and_skips_the_confirmation() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("contact", &valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["testMode"], true);
}

#[tokio::test]
async fn a_failed_confirmation_does_not_fail_the_request() {
    let app = spawn_app().await;

    Mock::given(CompanyEmail)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("contact", &valid_body()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn a_failed_company_email_in_live_mode_reports_test_mode_off() {
    let app = spawn_app_with(live_mode).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("contact", &valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["testMode"], false);
}
