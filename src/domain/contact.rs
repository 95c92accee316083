use super::{
    brand::Brand, email::EmailAddress, name::PersonName, phone::PhoneNumber,
};

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub company: Option<String>,
    pub brand: Brand,
    pub subject: String,
    pub message: String,
}
