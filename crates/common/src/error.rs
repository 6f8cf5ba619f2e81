//! Error types for the landing page logic

use thiserror::Error;

/// Tariff catalog errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TariffError {
    #[error("Unknown tariff: {0}")]
    UnknownTariff(String),

    #[error("Malformed tariff payload: {0}")]
    Decode(String),
}

/// Reasons a buy action is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("Terms must be accepted before purchase")]
    TermsNotAccepted,

    #[error("No tariff selected")]
    NoTariffSelected,
}

impl PurchaseError {
    /// User-facing text shown next to the checkbox or in the alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            PurchaseError::TermsNotAccepted => "Необходимо принять условия",
            PurchaseError::NoTariffSelected => "Пожалуйста, выберите тариф",
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
