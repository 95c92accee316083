use serde::Deserialize;

use crate::domain::{
    brand::Brand,
    email::EmailAddress,
    name::PersonName,
    phone::PhoneNumber,
    resume::Resume,
    talent::{parse_portfolio_url, TalentSubmission},
    validation::{optional, required, required_text, FieldErrors},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentRequestBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub brand: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub portfolio_url: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeBody>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeBody {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<String>,
}

impl TryFrom<ResumeBody> for Resume {
    type Error = String;
    fn try_from(value: ResumeBody) -> Result<Self, Self::Error> {
        let filename = required(value.filename).map_err(|e| format!("filename {}", e))?;
        let content = required(value.content).map_err(|e| format!("content {}", e))?;
        Resume::parse(filename, optional(value.content_type), content)
    }
}

impl TryFrom<TalentRequestBody> for TalentSubmission {
    type Error = FieldErrors;
    fn try_from(value: TalentRequestBody) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", required(value.name).and_then(PersonName::try_from));
        let email = errors.check("email", required(value.email).and_then(EmailAddress::try_from));
        let phone = errors.check_optional("phone", optional(value.phone).map(PhoneNumber::try_from));
        let brand = errors
            .check_optional("brand", optional(value.brand).map(Brand::try_from))
            .unwrap_or(Brand::Media);
        let position = errors.check("position", required_text(value.position, 2));
        let portfolio_url = errors.check_optional(
            "portfolioUrl",
            optional(value.portfolio_url).map(parse_portfolio_url),
        );
        let resume = errors.check_optional("resume", value.resume.map(Resume::try_from));

        let submission = match (name, email, position) {
            (Some(name), Some(email), Some(position)) => Some(Self {
                name,
                email,
                phone,
                brand,
                position,
                experience: optional(value.experience),
                portfolio_url,
                cover_letter: optional(value.cover_letter),
                resume,
            }),
            _ => None,
        };
        errors.into_result(submission)
    }
}
