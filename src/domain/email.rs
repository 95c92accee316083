use derive_more::Display;
use validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct EmailAddress(String);

impl TryFrom<String> for EmailAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_owned();
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err("is not a valid email address".into())
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
