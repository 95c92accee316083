use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::email::EmailAddress;

/// A rendered email, before a recipient is picked.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub sender_name: String,
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub filename: String,
    /// Base64 encoded file content.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Client for a Resend-compatible transactional email API.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    authorization_token: Secret<String>,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    attachments: &'a [Attachment],
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("The HTTP client should be buildable.");
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &EmailAddress,
        email: &OutgoingEmail,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: format!("{} <{}>", email.sender_name, self.sender),
            to: [recipient.as_ref()],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: email.reply_to.as_ref().map(AsRef::as_ref),
            attachments: &email.attachments,
        };

        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
