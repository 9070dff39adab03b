use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, served by the backend itself
}

// Formspree form collecting the waitlist
pub const INTAKE_URL: &str = "https://formspree.io/f/xldqwnej";

pub const GEOLOCATION_URL: &str = "https://ipapi.co/json/";

pub const CONSENT_STORAGE_KEY: &str = "pluravita_cookie_consent";

pub const SOURCE_TAG: &str = "Pluravita";

/// How long a failed submission keeps its error line before the form resets.
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(4);
