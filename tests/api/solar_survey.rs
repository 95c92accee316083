use std::collections::HashMap;

use serde_json::{json, Value};
use url::Url;
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helper::{first_link, spawn_app};

fn body(preferred_time: &str) -> Value {
    json!({
        "name": "Nikola Tesla",
        "email": "nikola@example.com",
        "phone": "+1 555 010 2030",
        "address": "1 Main St, Springfield",
        "preferredDate": "2024-05-17",
        "preferredTime": preferred_time,
        "monthlyBill": "$180"
    })
}

#[tokio::test]
async fn the_confirmation_links_to_a_one_hour_calendar_event() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("solar-survey", &body("2:30 PM")).await;
    assert_eq!(200, response.status().as_u16());

    let emails = app.sent_emails().await;
    let text = emails[1]["text"].as_str().unwrap();
    let link = first_link(text).expect("The confirmation should contain a calendar link.");
    let url = Url::parse(&link).unwrap();
    let query: HashMap<_, _> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("calendar.google.com"));
    assert_eq!(query["dates"], "20240517T143000/20240517T153000");
    assert_eq!(query["location"], "1 Main St, Springfield");
}

#[tokio::test]
async fn an_unreadable_time_is_still_accepted_without_a_link() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("solar-survey", &body("sometime after lunch")).await;
    assert_eq!(200, response.status().as_u16());

    let emails = app.sent_emails().await;
    let text = emails[1]["text"].as_str().unwrap();
    assert!(first_link(text).is_none());
    assert!(text.contains("sometime after lunch"));
}

#[tokio::test]
async fn missing_scheduling_fields_are_reported_together() {
    let app = spawn_app().await;

    let mut body = body("2:30 PM");
    let fields = body.as_object_mut().unwrap();
    fields.remove("phone");
    fields.remove("preferredDate");
    let response = app.post_form("solar-survey", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    let failed: Vec<_> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(failed, vec!["phone", "preferredDate"]);
}

#[tokio::test]
async fn a_failed_company_email_fails_the_survey_request() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_form("solar-survey", &body("10:00 AM")).await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn a_date_beyond_four_digit_years_is_a_400_without_any_email() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let mut body = body("23:30");
    body["preferredDate"] = json!("+262142-12-31");
    let response = app.post_form("solar-survey", &body).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["field"], "preferredDate");
}
