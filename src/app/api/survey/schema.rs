use serde::Deserialize;

use crate::domain::{
    email::EmailAddress,
    name::PersonName,
    phone::PhoneNumber,
    survey::{parse_preferred_date, SurveySubmission},
    validation::{optional, required, required_text, FieldErrors},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub property_type: Option<String>,
    pub monthly_bill: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<SurveyRequestBody> for SurveySubmission {
    type Error = FieldErrors;
    fn try_from(value: SurveyRequestBody) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", required(value.name).and_then(PersonName::try_from));
        let email = errors.check("email", required(value.email).and_then(EmailAddress::try_from));
        let phone = errors.check("phone", required(value.phone).and_then(PhoneNumber::try_from));
        let address = errors.check("address", required_text(value.address, 5));
        let preferred_date = errors.check(
            "preferredDate",
            required(value.preferred_date).and_then(parse_preferred_date),
        );
        let preferred_time = errors.check("preferredTime", required(value.preferred_time));

        let submission = match (name, email, phone, address, preferred_date, preferred_time) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(address),
                Some(preferred_date),
                Some(preferred_time),
            ) => Some(Self {
                name,
                email,
                phone,
                address,
                preferred_date,
                preferred_time,
                property_type: optional(value.property_type),
                monthly_bill: optional(value.monthly_bill),
                notes: optional(value.notes),
            }),
            _ => None,
        };
        errors.into_result(submission)
    }
}
