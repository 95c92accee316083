use chrono::{Datelike, NaiveDate};

use super::{
    calendar::CalendarEvent, email::EmailAddress, name::PersonName, phone::PhoneNumber,
};

#[derive(Debug, Clone)]
pub struct SurveySubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub address: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub property_type: Option<String>,
    pub monthly_bill: Option<String>,
    pub notes: Option<String>,
}

pub const CONSULTATION_TITLE: &str = "Solar Site Survey Consultation";

impl SurveySubmission {
    pub fn calendar_link(&self) -> Option<String> {
        let description = format!(
            "Solar site survey with {} ({}). Phone: {}",
            self.name, self.email, self.phone
        );
        CalendarEvent {
            title: CONSULTATION_TITLE,
            description: &description,
            location: &self.address,
            date: self.preferred_date,
            time: &self.preferred_time,
        }
        .google_calendar_link()
    }
}

const DATE_ERROR: &str = "must be a date (YYYY-MM-DD)";

/// Parses a `YYYY-MM-DD` date with a four digit year.
pub fn parse_preferred_date(value: String) -> Result<NaiveDate, String> {
    // `%Y` alone would also take signed and five digit years.
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(DATE_ERROR.into());
    }
    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| DATE_ERROR.to_owned())?;
    if !(1..=9999).contains(&date.year()) {
        return Err(DATE_ERROR.into());
    }
    Ok(date)
}
