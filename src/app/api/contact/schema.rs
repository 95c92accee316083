use serde::Deserialize;

use crate::domain::{
    brand::Brand,
    contact::ContactSubmission,
    email::EmailAddress,
    name::PersonName,
    phone::PhoneNumber,
    validation::{optional, required, required_text, FieldErrors},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub brand: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactRequestBody> for ContactSubmission {
    type Error = FieldErrors;
    fn try_from(value: ContactRequestBody) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", required(value.name).and_then(PersonName::try_from));
        let email = errors.check("email", required(value.email).and_then(EmailAddress::try_from));
        let phone = errors.check_optional("phone", optional(value.phone).map(PhoneNumber::try_from));
        let brand = errors
            .check_optional("brand", optional(value.brand).map(Brand::try_from))
            .unwrap_or(Brand::Energy);
        let subject = errors.check("subject", required_text(value.subject, 3));
        let message = errors.check("message", required_text(value.message, 10));

        let submission = match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Some(Self {
                name,
                email,
                phone,
                company: optional(value.company),
                brand,
                subject,
                message,
            }),
            _ => None,
        };
        errors.into_result(submission)
    }
}
