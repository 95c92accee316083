use super::{Letter, Notification, NotificationPair, Notify};
use crate::domain::{brand::BrandDirectory, contact::ContactSubmission, email::EmailAddress};

impl Notify for ContactSubmission {
    const FORM: &'static str = "contact";

    fn submitter(&self) -> &EmailAddress {
        &self.email
    }

    fn notifications(&self, brands: &BrandDirectory) -> Result<NotificationPair, askama::Error> {
        let brand = brands.get(self.brand);

        let company = Letter::new(brand, "New contact form submission")
            .row("Name", &self.name)
            .row("Email", &self.email)
            .optional_row("Phone", self.phone.as_ref())
            .optional_row("Company", self.company.as_ref())
            .row("Subject", &self.subject)
            .block("Message", &self.message);

        let confirmation = Letter::new(brand, "We received your message")
            .greeting(&self.name)
            .paragraph(format!(
                "Thank you for contacting {}. A member of our team will get back to you within 1-2 business days.",
                brand.display_name
            ))
            .row("Subject", &self.subject)
            .block("Your message", &self.message);

        Ok(NotificationPair {
            company: Notification::new(
                brand.inbox.clone(),
                format!("New contact form submission: {}", self.subject),
                &company,
                Some(self.email.clone()),
                Vec::new(),
            )?,
            confirmation: Notification::new(
                self.email.clone(),
                format!("Thanks for contacting {}", brand.display_name),
                &confirmation,
                None,
                Vec::new(),
            )?,
        })
    }
}
