use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

static BASE64: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").expect("base64 pattern should compile"));

/// A resume uploaded with a talent-pool application, still base64 encoded.
#[derive(Debug, Clone)]
pub struct Resume {
    pub filename: String,
    pub content_type: Option<String>,
    content: String,
}

impl Resume {
    /// Accepts raw base64 or a `data:<mime>;base64,<payload>` URL.
    pub fn parse(
        filename: String,
        content_type: Option<String>,
        content: String,
    ) -> Result<Self, String> {
        let filename = filename.trim().to_owned();
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err("must be a PDF or Word document".into());
        }

        let payload = match content.split_once(";base64,") {
            Some((prefix, payload)) if prefix.starts_with("data:") => payload,
            _ => content.as_str(),
        };
        let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

        if payload.is_empty() || payload.len() % 4 != 0 || !BASE64.is_match(&payload) {
            return Err("is not valid base64".into());
        }

        if decoded_len(&payload) > MAX_RESUME_BYTES {
            return Err(format!(
                "must be at most {} MB",
                MAX_RESUME_BYTES / (1024 * 1024)
            ));
        }

        Ok(Self {
            filename,
            content_type,
            content: payload,
        })
    }

    /// The base64 payload without any data-URL prefix.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size_bytes(&self) -> usize {
        decoded_len(&self.content)
    }
}

fn decoded_len(payload: &str) -> usize {
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    payload.len() / 4 * 3 - padding
}
