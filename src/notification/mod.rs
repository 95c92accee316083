use crate::{
    domain::{brand::BrandDirectory, email::EmailAddress},
    email::{Attachment, OutgoingEmail},
};

mod contact;
mod letter;
mod quote;
mod survey;
mod talent;

pub use letter::Letter;

/// One email and the address it is meant for, before recipient resolution.
#[derive(Debug, Clone)]
pub struct Notification {
    pub to: EmailAddress,
    pub email: OutgoingEmail,
}

impl Notification {
    pub fn new(
        to: EmailAddress,
        subject: String,
        letter: &Letter,
        reply_to: Option<EmailAddress>,
        attachments: Vec<Attachment>,
    ) -> Result<Self, askama::Error> {
        let (html, text) = letter.render()?;
        Ok(Self {
            to,
            email: OutgoingEmail {
                sender_name: letter.brand.clone(),
                reply_to,
                subject,
                html,
                text,
                attachments,
            },
        })
    }
}

/// The two emails produced by every submission.
#[derive(Debug, Clone)]
pub struct NotificationPair {
    /// Goes to the brand inbox, replying reaches the submitter.
    pub company: Notification,
    /// Goes to the submitter.
    pub confirmation: Notification,
}

/// A validated form that knows how to announce itself.
pub trait Notify {
    /// Human readable form name, used in logs and responses.
    const FORM: &'static str;

    fn submitter(&self) -> &EmailAddress;

    fn notifications(&self, brands: &BrandDirectory) -> Result<NotificationPair, askama::Error>;
}
