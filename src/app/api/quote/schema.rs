use serde::Deserialize;

use crate::domain::{
    email::EmailAddress,
    name::PersonName,
    phone::PhoneNumber,
    quote::QuoteSubmission,
    service::ServiceType,
    validation::{optional, required, required_text, FieldErrors},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub details: Option<String>,
}

impl TryFrom<QuoteRequestBody> for QuoteSubmission {
    type Error = FieldErrors;
    fn try_from(value: QuoteRequestBody) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", required(value.name).and_then(PersonName::try_from));
        let email = errors.check("email", required(value.email).and_then(EmailAddress::try_from));
        let phone = errors.check_optional("phone", optional(value.phone).map(PhoneNumber::try_from));
        let service_type = errors.check(
            "serviceType",
            required(value.service_type).and_then(ServiceType::try_from),
        );
        let details = errors.check("details", required_text(value.details, 10));

        let submission = match (name, email, service_type, details) {
            (Some(name), Some(email), Some(service_type), Some(details)) => Some(Self {
                name,
                email,
                phone,
                company: optional(value.company),
                service_type,
                budget: optional(value.budget),
                timeline: optional(value.timeline),
                details,
            }),
            _ => None,
        };
        errors.into_result(submission)
    }
}
