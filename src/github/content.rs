use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Outcome of fetching a single file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Found(String),
    NotFound,
    FetchFailed,
}

impl FileContent {
    /// Collapses the result to the text, treating a missing file and a failed
    /// fetch the same way.
    pub fn into_text(self) -> Option<String> {
        match self {
            FileContent::Found(text) => Some(text),
            FileContent::NotFound | FileContent::FetchFailed => None,
        }
    }
}

/// A file entry from the contents endpoint. Directory listings come back as
/// a JSON array instead and do not decode into this type.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl ContentEntry {
    /// Decodes the body. GitHub wraps base64 bodies at 60 columns, so line
    /// breaks are stripped first.
    pub fn decode(&self) -> Result<Option<String>> {
        let Some(ref raw) = self.content else {
            return Ok(None);
        };

        match self.encoding.as_deref() {
            Some("base64") | None => {
                let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
                if compact.is_empty() {
                    return Ok(Some(String::new()));
                }
                let bytes = STANDARD
                    .decode(compact.as_bytes())
                    .map_err(|e| Error::Decode(e.to_string()))?;
                let text = String::from_utf8(bytes).map_err(|e| Error::Decode(e.to_string()))?;
                Ok(Some(text))
            }
            Some(other) => Err(Error::Decode(format!("unsupported encoding: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(content: &str) -> ContentEntry {
        ContentEntry {
            content: Some(content.to_string()),
            encoding: Some("base64".to_string()),
        }
    }

    #[test]
    fn test_decode_wrapped_base64() {
        // "Django==4.2\nrequests\n" split over two lines
        let decoded = entry("RGphbmdvPT00LjIK\ncmVxdWVzdHMK\n").decode().unwrap();
        assert_eq!(decoded.as_deref(), Some("Django==4.2\nrequests\n"));
    }

    #[test]
    fn test_decode_missing_content() {
        let entry = ContentEntry {
            content: None,
            encoding: None,
        };
        assert_eq!(entry.decode().unwrap(), None);
    }

    #[test]
    fn test_decode_empty_file() {
        assert_eq!(entry("").decode().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(matches!(entry("!!not base64!!").decode(), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_encoding() {
        let entry = ContentEntry {
            content: Some("abc".to_string()),
            encoding: Some("none".to_string()),
        };
        assert!(entry.decode().is_err());
    }

    #[test]
    fn test_file_content_collapses_failures() {
        assert_eq!(FileContent::Found("x".into()).into_text(), Some("x".to_string()));
        assert_eq!(FileContent::NotFound.into_text(), None);
        assert_eq!(FileContent::FetchFailed.into_text(), None);
    }
}
