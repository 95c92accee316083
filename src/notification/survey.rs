use super::{Letter, Notification, NotificationPair, Notify};
use crate::domain::{
    brand::{Brand, BrandDirectory},
    email::EmailAddress,
    survey::SurveySubmission,
};

const CALENDAR_ACTION: &str = "Add to Google Calendar";

impl Notify for SurveySubmission {
    const FORM: &'static str = "solar survey";

    fn submitter(&self) -> &EmailAddress {
        &self.email
    }

    fn notifications(&self, brands: &BrandDirectory) -> Result<NotificationPair, askama::Error> {
        let brand = brands.get(Brand::Energy);
        let date = self.preferred_date.format("%A, %B %-d, %Y").to_string();
        let calendar_link = self.calendar_link();

        let mut company = Letter::new(brand, "New solar survey request")
            .row("Name", &self.name)
            .row("Email", &self.email)
            .row("Phone", &self.phone)
            .row("Address", &self.address)
            .row("Preferred date", &date)
            .row("Preferred time", &self.preferred_time)
            .optional_row("Property type", self.property_type.as_ref())
            .optional_row("Monthly electricity bill", self.monthly_bill.as_ref())
            .action(CALENDAR_ACTION, calendar_link.clone());
        if let Some(notes) = &self.notes {
            company = company.block("Notes", notes);
        }

        let confirmation = Letter::new(brand, "Your solar survey is requested")
            .greeting(&self.name)
            .paragraph(
                "Thank you for scheduling a solar site survey. One of our energy consultants will call you to confirm the appointment.",
            )
            .row("Date", &date)
            .row("Time", &self.preferred_time)
            .row("Address", &self.address)
            .action(CALENDAR_ACTION, calendar_link);

        Ok(NotificationPair {
            company: Notification::new(
                brand.inbox.clone(),
                format!(
                    "New solar survey request: {} at {}",
                    self.preferred_date, self.preferred_time
                ),
                &company,
                Some(self.email.clone()),
                Vec::new(),
            )?,
            confirmation: Notification::new(
                self.email.clone(),
                format!("Your solar survey consultation - {}", brand.display_name),
                &confirmation,
                None,
                Vec::new(),
            )?,
        })
    }
}
