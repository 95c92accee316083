use super::{Letter, Notification, NotificationPair, Notify};
use crate::domain::{brand::BrandDirectory, email::EmailAddress, quote::QuoteSubmission};

impl Notify for QuoteSubmission {
    const FORM: &'static str = "quote";

    fn submitter(&self) -> &EmailAddress {
        &self.email
    }

    fn notifications(&self, brands: &BrandDirectory) -> Result<NotificationPair, askama::Error> {
        let brand = brands.get(self.service_type.brand());
        let service = self.service_type.label();

        let company = Letter::new(brand, "New quote request")
            .row("Service", service)
            .row("Name", &self.name)
            .row("Email", &self.email)
            .optional_row("Phone", self.phone.as_ref())
            .optional_row("Company", self.company.as_ref())
            .optional_row("Budget", self.budget.as_ref())
            .optional_row("Timeline", self.timeline.as_ref())
            .block("Project details", &self.details);

        let confirmation = Letter::new(brand, "Your quote request is in")
            .greeting(&self.name)
            .paragraph(format!(
                "Thanks for your interest in our {} service. We are reviewing your project and will send you a tailored quote shortly.",
                service
            ))
            .row("Service", service)
            .optional_row("Budget", self.budget.as_ref())
            .optional_row("Timeline", self.timeline.as_ref())
            .block("Project details", &self.details);

        Ok(NotificationPair {
            company: Notification::new(
                brand.inbox.clone(),
                format!("New quote request: {}", service),
                &company,
                Some(self.email.clone()),
                Vec::new(),
            )?,
            confirmation: Notification::new(
                self.email.clone(),
                format!("Your {} quote request - {}", service, brand.display_name),
                &confirmation,
                None,
                Vec::new(),
            )?,
        })
    }
}
