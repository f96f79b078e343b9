//! Language selection for user-facing messages
//!
//! Domain messages carry both languages as `"English | 한국어"`. The API
//! picks the half matching the client's `Accept-Language` header.

use actix_web::{http::header, HttpRequest};
use amb_core::errors::{extract_english_message, extract_korean_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Korean,
}

impl Language {
    /// Parse an `Accept-Language` value such as `"ko-KR,ko;q=0.9,en;q=0.8"`
    ///
    /// The highest-weighted supported language wins; English otherwise.
    pub fn from_header(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Language::English;
        };

        let mut preferred = Language::English;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or("").trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = if tag.starts_with("ko") {
                Language::Korean
            } else if tag.starts_with("en") {
                Language::English
            } else {
                continue;
            };

            if quality > max_quality {
                preferred = language;
                max_quality = quality;
            }
        }

        preferred
    }

    pub fn from_request(req: &HttpRequest) -> Self {
        Self::from_header(
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok()),
        )
    }

    /// Pick this language's half of a bilingual message
    pub fn localize<'a>(&self, message: &'a str) -> &'a str {
        match self {
            Language::English => extract_english_message(message),
            Language::Korean => extract_korean_message(message),
        }
    }
}
