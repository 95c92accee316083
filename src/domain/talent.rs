use url::Url;

use super::{
    brand::Brand, email::EmailAddress, name::PersonName, phone::PhoneNumber, resume::Resume,
};

#[derive(Debug, Clone)]
pub struct TalentSubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub brand: Brand,
    pub position: String,
    pub experience: Option<String>,
    pub portfolio_url: Option<Url>,
    pub cover_letter: Option<String>,
    pub resume: Option<Resume>,
}

/// Portfolio links must be absolute http(s) URLs.
pub fn parse_portfolio_url(value: String) -> Result<Url, String> {
    match Url::parse(&value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(format!("uses an unsupported scheme: {}", scheme)),
        },
        Err(_) => Err("is not a valid URL".into()),
    }
}
