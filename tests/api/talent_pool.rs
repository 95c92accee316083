use serde_json::{json, Value};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helper::{spawn_app, spawn_app_with};

fn body() -> Value {
    json!({
        "name": "Hedy Lamarr",
        "email": "hedy@example.com",
        "position": "Video editor",
        "portfolioUrl": "https://hedy.example.com/reel",
        "resume": {
            "filename": "hedy.pdf",
            "contentType": "application/pdf",
            "content": "data:application/pdf;base64,aGVsbG8gd29ybGQ="
        }
    })
}

#[tokio::test]
async fn the_resume_is_attached_to_the_company_email() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("talent-pool", &body()).await;
    assert_eq!(200, response.status().as_u16());

    let emails = app.sent_emails().await;
    assert_eq!(
        emails[0]["attachments"],
        json!([{
            "filename": "hedy.pdf",
            "content": "aGVsbG8gd29ybGQ=",
            "content_type": "application/pdf"
        }])
    );
    assert!(emails[1].get("attachments").is_none());
}

#[tokio::test]
async fn applications_without_a_resume_are_accepted() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let mut body = body();
    body.as_object_mut().unwrap().remove("resume");
    let response = app.post_form("talent-pool", &body).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn an_unsupported_resume_is_a_400() {
    let app = spawn_app().await;

    let mut body = body();
    body["resume"]["filename"] = json!("hedy.exe");
    let response = app.post_form("talent-pool", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errors"][0]["field"], "resume");
}

#[tokio::test]
async fn a_failed_company_email_fails_the_application() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("talent-pool", &body()).await;

    assert_eq!(500, response.status().as_u16());
}

fn body_with_resume(content: String) -> Value {
    let mut body = body();
    body["resume"]["content"] = Value::String(content);
    body
}

#[tokio::test]
async fn a_body_over_the_limit_is_a_413_without_any_email() {
    let app = spawn_app_with(|config| config.application.max_body_bytes = 1024).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_form("talent-pool", &body_with_resume("AAAA".repeat(1024)))
        .await;

    assert_eq!(413, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn a_resume_just_under_five_megabytes_fits_the_default_limit() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // 4_999_998 decoded bytes.
    let content = "AAAA".repeat(1_666_666);
    let response = app
        .post_form("talent-pool", &body_with_resume(content.clone()))
        .await;

    assert_eq!(200, response.status().as_u16());
    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["attachments"][0]["content"], content.as_str());
}
