use super::{
    email::EmailAddress, name::PersonName, phone::PhoneNumber, service::ServiceType,
};

#[derive(Debug, Clone)]
pub struct QuoteSubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub company: Option<String>,
    pub service_type: ServiceType,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub details: String,
}
