use super::{Letter, Notification, NotificationPair, Notify};
use crate::{
    domain::{brand::BrandDirectory, email::EmailAddress, talent::TalentSubmission},
    email::Attachment,
};

impl Notify for TalentSubmission {
    const FORM: &'static str = "talent pool";

    fn submitter(&self) -> &EmailAddress {
        &self.email
    }

    fn notifications(&self, brands: &BrandDirectory) -> Result<NotificationPair, askama::Error> {
        let brand = brands.get(self.brand);

        let attachments: Vec<Attachment> = self
            .resume
            .iter()
            .map(|resume| Attachment {
                filename: resume.filename.clone(),
                content: resume.content().to_owned(),
                content_type: resume.content_type.clone(),
            })
            .collect();

        let mut company = Letter::new(brand, "New talent pool application")
            .row("Name", &self.name)
            .row("Email", &self.email)
            .optional_row("Phone", self.phone.as_ref())
            .row("Position", &self.position)
            .optional_row("Experience", self.experience.as_ref())
            .optional_row("Portfolio", self.portfolio_url.as_ref())
            .optional_row(
                "Resume",
                self.resume.as_ref().map(|r| format!("{} (attached)", r.filename)),
            );
        if let Some(cover_letter) = &self.cover_letter {
            company = company.block("Cover letter", cover_letter);
        }

        let confirmation = Letter::new(brand, "Welcome to our talent pool")
            .greeting(&self.name)
            .paragraph(format!(
                "Thanks for your interest in working with {}. Your profile is now part of our talent pool and we will reach out when a matching opportunity opens up.",
                brand.display_name
            ))
            .row("Position", &self.position);

        Ok(NotificationPair {
            company: Notification::new(
                brand.inbox.clone(),
                format!("New talent pool application: {}", self.position),
                &company,
                Some(self.email.clone()),
                attachments,
            )?,
            confirmation: Notification::new(
                self.email.clone(),
                format!("Thanks for joining the {} talent pool", brand.display_name),
                &confirmation,
                None,
                Vec::new(),
            )?,
        })
    }
}
