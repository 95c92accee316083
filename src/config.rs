use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use crate::domain::{
    brand::{BrandDirectory, BrandProfile},
    email::EmailAddress,
    recipient::RecipientPolicy,
};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub brands: BrandSettings,
    pub log_level: String,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: u64,
    pub testing_mode: bool,
    pub verified_recipient: String,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::try_from(self.sender_email.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn recipient_policy(&self) -> Result<RecipientPolicy, String> {
        let verified = EmailAddress::try_from(self.verified_recipient.clone())?;
        Ok(RecipientPolicy::new(self.testing_mode, verified))
    }
}

#[derive(Deserialize, Clone)]
pub struct BrandSettings {
    pub energy: BrandProfileSettings,
    pub media: BrandProfileSettings,
}

#[derive(Deserialize, Clone)]
pub struct BrandProfileSettings {
    pub display_name: String,
    pub inbox: String,
}

impl TryFrom<BrandProfileSettings> for BrandProfile {
    type Error = String;
    fn try_from(value: BrandProfileSettings) -> Result<Self, Self::Error> {
        let inbox = EmailAddress::try_from(value.inbox)?;
        Ok(BrandProfile::new(value.display_name, inbox))
    }
}

impl BrandSettings {
    pub fn directory(&self) -> Result<BrandDirectory, String> {
        Ok(BrandDirectory::new(
            self.energy.clone().try_into()?,
            self.media.clone().try_into()?,
        ))
    }
}

/// The possible runtime environments of the service.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Reads `configuration/base.yaml`, then the file named after `APP_ENVIRONMENT`,
/// then `APP_`-prefixed environment variables (`APP_EMAIL_CLIENT__BASE_URL=...`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(e.into()))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
