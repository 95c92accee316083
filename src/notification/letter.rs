use askama::Template;

use crate::domain::{brand::BrandProfile, name::PersonName};

pub struct Row {
    pub label: &'static str,
    pub value: String,
}

pub struct Block {
    pub label: &'static str,
    pub text: String,
}

pub struct Action {
    pub label: &'static str,
    pub url: String,
}

/// Content of one email, rendered both as HTML and as plain text.
pub struct Letter {
    pub brand: String,
    pub heading: String,
    pub greeting: Option<String>,
    pub paragraphs: Vec<String>,
    pub rows: Vec<Row>,
    pub block: Option<Block>,
    pub action: Option<Action>,
}

#[derive(Template)]
#[template(path = "email/letter.html")]
struct LetterHtml<'a> {
    letter: &'a Letter,
}

#[derive(Template)]
#[template(path = "email/letter.txt")]
struct LetterText<'a> {
    letter: &'a Letter,
}

impl Letter {
    pub fn new(brand: &BrandProfile, heading: impl Into<String>) -> Self {
        Self {
            brand: brand.display_name.clone(),
            heading: heading.into(),
            greeting: None,
            paragraphs: Vec::new(),
            rows: Vec::new(),
            block: None,
            action: None,
        }
    }

    pub fn greeting(mut self, name: &PersonName) -> Self {
        self.greeting = Some(format!("Hi {},", name.first()));
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn row(mut self, label: &'static str, value: impl ToString) -> Self {
        self.rows.push(Row {
            label,
            value: value.to_string(),
        });
        self
    }

    /// Adds a row only when a value was given.
    pub fn optional_row(self, label: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.row(label, value),
            None => self,
        }
    }

    pub fn block(mut self, label: &'static str, text: impl Into<String>) -> Self {
        self.block = Some(Block {
            label,
            text: text.into(),
        });
        self
    }

    pub fn action(mut self, label: &'static str, url: Option<String>) -> Self {
        self.action = url.map(|url| Action { label, url });
        self
    }

    /// Returns `(html, text)`.
    pub fn render(&self) -> Result<(String, String), askama::Error> {
        let html = LetterHtml { letter: self }.render()?;
        let text = LetterText { letter: self }.render()?;
        Ok((html, text))
    }
}
