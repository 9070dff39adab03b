use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::i18n::Language;

const SPANISH_COUNTRIES: &[&str] = &["es", "mx", "ar", "co", "cl", "pe", "ve", "ec"];
const GERMAN_COUNTRIES: &[&str] = &["de", "at", "ch"];

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Network(String),
    #[error("geolocation service answered with status {0}")]
    Status(u16),
    #[error("could not read geolocation response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct GeoResponse {
    country_code: Option<String>,
}

pub fn language_for_country(code: &str) -> Option<Language> {
    let code = code.trim().to_ascii_lowercase();
    if SPANISH_COUNTRIES.contains(&code.as_str()) {
        Some(Language::Es)
    } else if GERMAN_COUNTRIES.contains(&code.as_str()) {
        Some(Language::De)
    } else {
        None
    }
}

/// Maps a BCP 47 tag such as `de-AT` to a supported language.
pub fn language_for_browser(tag: &str) -> Option<Language> {
    let primary = tag.split(|c: char| c == '-' || c == '_').next()?;
    Language::parse(primary)
}

/// Country first, then the browser locale, then English.
pub fn detect(country: Option<&str>, browser: Option<&str>) -> Language {
    country
        .and_then(language_for_country)
        .or_else(|| browser.and_then(language_for_browser))
        .unwrap_or_default()
}

/// Display language for the page. A visitor's own pick is final, so a
/// detection result that arrives afterwards is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguagePreference {
    language: Language,
    chosen: bool,
}

impl LanguagePreference {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn choose(&mut self, language: Language) {
        self.language = language;
        self.chosen = true;
    }

    /// Returns whether the detected language was applied.
    pub fn detected(&mut self, language: Language) -> bool {
        if self.chosen {
            return false;
        }
        self.language = language;
        true
    }
}

pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

pub async fn lookup_country() -> Result<Option<String>, GeoError> {
    let response = Request::get(config::GEOLOCATION_URL)
        .send()
        .await
        .map_err(|e| GeoError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(GeoError::Status(response.status()));
    }

    let body = response
        .json::<GeoResponse>()
        .await
        .map_err(|e| GeoError::Decode(e.to_string()))?;
    Ok(body.country_code)
}

pub async fn detect_language() -> Language {
    let country = match lookup_country().await {
        Ok(country) => country,
        Err(e) => {
            log::debug!("Falling back to browser locale: {}", e);
            None
        }
    };
    let language = detect(country.as_deref(), browser_language().as_deref());
    log::info!("Detected display language {}", language.code());
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_and_german_speaking_countries() {
        assert_eq!(language_for_country("MX"), Some(Language::Es));
        assert_eq!(language_for_country("ec"), Some(Language::Es));
        assert_eq!(language_for_country("AT"), Some(Language::De));
        assert_eq!(language_for_country("ch"), Some(Language::De));
        assert_eq!(language_for_country("fi"), None);
    }

    #[test]
    fn browser_tags_use_primary_subtag() {
        assert_eq!(language_for_browser("de-AT"), Some(Language::De));
        assert_eq!(language_for_browser("es_419"), Some(Language::Es));
        assert_eq!(language_for_browser("en"), Some(Language::En));
        assert_eq!(language_for_browser("pt-BR"), None);
        assert_eq!(language_for_browser(""), None);
    }

    #[test]
    fn country_wins_over_browser() {
        assert_eq!(detect(Some("ar"), Some("de-DE")), Language::Es);
    }

    #[test]
    fn unknown_country_falls_back_to_browser() {
        assert_eq!(detect(Some("us"), Some("de-DE")), Language::De);
        assert_eq!(detect(None, Some("es-ES")), Language::Es);
    }

    #[test]
    fn detection_applies_until_the_visitor_chooses() {
        let mut preference = LanguagePreference::default();
        assert_eq!(preference.language(), Language::En);
        assert!(preference.detected(Language::Es));
        assert_eq!(preference.language(), Language::Es);
    }

    #[test]
    fn manual_choice_beats_late_detection() {
        let mut preference = LanguagePreference::default();
        preference.choose(Language::De);
        assert!(!preference.detected(Language::Es));
        assert_eq!(preference.language(), Language::De);

        preference.choose(Language::En);
        assert_eq!(preference.language(), Language::En);
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(detect(None, None), Language::En);
        assert_eq!(detect(Some("jp"), Some("ja-JP")), Language::En);
    }
}
