use crate::constants;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub features: FeatureFlags,
    pub places: PlacesSettings,
    pub otp: OtpSettings,
    pub phone: PhoneSettings,
    pub company: CompanyInfo,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// When false the OTP routes are disabled and quotes need no verified phone
    pub otp_verification_enabled: bool,
    pub address_search_enabled: bool,
    pub phone_validation_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            otp_verification_enabled: false,
            address_search_enabled: true,
            phone_validation_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlacesSettings {
    pub endpoint: String,
    pub max_result_count: u32,
    pub timeout_seconds: u64,
    pub location_bias: BoundingBox,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            endpoint: constants::PLACES_SEARCH_ENDPOINT.to_string(),
            max_result_count: constants::PLACES_MAX_RESULT_COUNT,
            timeout_seconds: 10,
            location_bias: BoundingBox::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoundingBox {
    pub low_latitude: f64,
    pub low_longitude: f64,
    pub high_latitude: f64,
    pub high_longitude: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            low_latitude: constants::UK_LOW_LATITUDE,
            low_longitude: constants::UK_LOW_LONGITUDE,
            high_latitude: constants::UK_HIGH_LATITUDE,
            high_longitude: constants::UK_HIGH_LONGITUDE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OtpSettings {
    pub verify_base_url: String,
    pub resend_cooldown_secs: u64,
    pub code_length: usize,
    pub auto_submit: bool,
    pub verification_timeout_secs: u64,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            verify_base_url: constants::VERIFY_BASE_URL.to_string(),
            resend_cooldown_secs: 60,
            code_length: 6,
            auto_submit: true,
            verification_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhoneSettings {
    pub default_country_code: String,
    pub supported_countries: Vec<CountryCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountryCode {
    pub code: String,
    pub country: String,
}

impl Default for PhoneSettings {
    fn default() -> Self {
        let supported = [
            ("+44", "UK"),
            ("+91", "IN"),
            ("+1", "US"),
            ("+33", "FR"),
            ("+49", "DE"),
            ("+39", "IT"),
            ("+34", "ES"),
            ("+31", "NL"),
            ("+32", "BE"),
            ("+41", "CH"),
            ("+43", "AT"),
        ];
        Self {
            default_country_code: "+44".to_string(),
            supported_countries: supported
                .iter()
                .map(|(code, country)| CountryCode {
                    code: code.to_string(),
                    country: country.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub support_email: String,
    pub website: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Origin".to_string(),
            email: "hello@origin.com".to_string(),
            phone: "0330 113 1333".to_string(),
            support_email: "support@origin.com".to_string(),
            website: "https://origin.com".to_string(),
        }
    }
}

impl Config {
    /// Reads the TOML file at `path`. A missing file yields the built-in defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(path).map_err(|e| {
            QuoteError::Configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

/// Provider credentials read from the process environment.
///
/// Each value stays optional here; clients report a missing credential as a
/// configuration error when they are asked to make a call.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub places_api_key: Option<String>,
    pub twilio: TwilioCredentials,
}

#[derive(Debug, Clone, Default)]
pub struct TwilioCredentials {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub verify_sid: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            places_api_key: non_empty_env(constants::ENV_PLACES_API_KEY),
            twilio: TwilioCredentials {
                account_sid: non_empty_env(constants::ENV_TWILIO_ACCOUNT_SID),
                auth_token: non_empty_env(constants::ENV_TWILIO_AUTH_TOKEN),
                verify_sid: non_empty_env(constants::ENV_TWILIO_VERIFY_SID),
            },
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
