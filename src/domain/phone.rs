use derive_more::Display;

const MIN_DIGITS: usize = 7;
const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct PhoneNumber(String);

impl TryFrom<String> for PhoneNumber {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_owned();

        if value.len() > MAX_LENGTH {
            return Err("is too long".into());
        }

        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ');
        if !value.chars().all(allowed) {
            return Err("contains invalid characters".into());
        }

        if value.chars().filter(char::is_ascii_digit).count() < MIN_DIGITS {
            return Err(format!("must contain at least {} digits", MIN_DIGITS));
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
