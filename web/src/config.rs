use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_WHATSAPP_NUMBER: &str = "905558903511";
const DEFAULT_CONTACT_EMAIL: &str = "zeynepeke16@gmail.com";

/// Salon-specific destinations for the booking and contact handoffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalonConfig {
    /// International format without '+', as wa.me expects.
    pub whatsapp_number: String,
    pub contact_email: String,
}

impl Default for SalonConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SALON_WHATSAPP_NUMBER must contain digits only, got {0:?}")]
    InvalidWhatsappNumber(String),
    #[error("SALON_CONTACT_EMAIL is not an email address: {0:?}")]
    InvalidContactEmail(String),
}

impl SalonConfig {
    /// Builds the config from optional overrides, falling back to the defaults
    /// for anything unset or blank.
    pub fn with_overrides(
        whatsapp_number: Option<String>,
        contact_email: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let whatsapp_number = match whatsapp_number.map(|n| n.trim().to_string()) {
            Some(n) if !n.is_empty() => n,
            _ => defaults.whatsapp_number,
        };
        if !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsappNumber(whatsapp_number));
        }

        let contact_email = match contact_email.map(|e| e.trim().to_string()) {
            Some(e) if !e.is_empty() => e,
            _ => defaults.contact_email,
        };
        if !contact_email.contains('@') {
            return Err(ConfigError::InvalidContactEmail(contact_email));
        }

        Ok(Self {
            whatsapp_number,
            contact_email,
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_overrides(
            std::env::var("SALON_WHATSAPP_NUMBER").ok(),
            std::env::var("SALON_CONTACT_EMAIL").ok(),
        )
    }
}

pub type SalonConfigResource = Resource<Result<SalonConfig, ServerFnError>>;

/// Handle to the config resource provided by the page. Grab it while the
/// component is being created; read it later from event handlers.
#[derive(Clone, Copy)]
pub struct SalonConfigHandle(Option<SalonConfigResource>);

impl SalonConfigHandle {
    /// The loaded config, or the defaults while loading or after a failure.
    pub fn get(&self) -> SalonConfig {
        self.0
            .and_then(|resource| resource.get_untracked())
            .and_then(Result::ok)
            .unwrap_or_default()
    }
}

pub fn use_salon_config() -> SalonConfigHandle {
    SalonConfigHandle(use_context::<SalonConfigResource>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_fall_back_to_defaults() {
        let config = SalonConfig::with_overrides(None, Some("  ".to_string())).unwrap();
        assert_eq!(config, SalonConfig::default());
    }

    #[test]
    fn test_overrides_are_trimmed() {
        let config = SalonConfig::with_overrides(
            Some(" 905551112233 ".to_string()),
            Some("randevu@example.com".to_string()),
        )
        .unwrap();
        assert_eq!(config.whatsapp_number, "905551112233");
        assert_eq!(config.contact_email, "randevu@example.com");
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        assert!(matches!(
            SalonConfig::with_overrides(Some("+90 555".to_string()), None),
            Err(ConfigError::InvalidWhatsappNumber(_))
        ));
        assert!(matches!(
            SalonConfig::with_overrides(None, Some("salon".to_string())),
            Err(ConfigError::InvalidContactEmail(_))
        ));
    }
}
