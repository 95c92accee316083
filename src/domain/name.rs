use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Display)]
#[display(fmt = "{}", _0)]
pub struct PersonName(String);

impl TryFrom<String> for PersonName {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_owned();

        if value.graphemes(true).count() < 2 {
            return Err("must be at least 2 characters".into());
        }

        if value.graphemes(true).count() > 256 {
            return Err("must be at most 256 characters".into());
        }

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        if value.chars().any(|g| forbidden_characters.contains(&g)) {
            return Err("contains invalid characters".into());
        }

        Ok(Self(value))
    }
}

impl PersonName {
    /// The first word of the name, used to greet the submitter.
    pub fn first(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
