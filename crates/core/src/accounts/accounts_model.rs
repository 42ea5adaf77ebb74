use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_NAME_MAX_LEN, DISPLAY_NAME_MIN_LEN};
use crate::errors::{Result, ValidationError};

/// Kind of external account behind a linked reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    Bank,
    #[default]
    MobileMoney,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Bank => "BANK",
            AccountKind::MobileMoney => "MOBILE_MONEY",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "BANK" => AccountKind::Bank,
            _ => AccountKind::MobileMoney,
        }
    }
}

/// Domain model representing a linked external account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    pub id: String,
    pub owner_id: String,
    /// Provider-side reference for the account, e.g. a mobile-money phone
    /// number.
    pub provider_ref: String,
    pub display_name: String,
    pub account_kind: AccountKind,
    pub provider_source: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for linking a new external account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLinkedAccount {
    pub owner_id: String,
    pub provider_ref: String,
    pub display_name: String,
    pub account_kind: AccountKind,
    pub provider_source: String,
}

impl NewLinkedAccount {
    /// Validates the link request: reference must look like an
    /// international mobile-money number, display name must be 2-50 chars.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_reference(&self.provider_ref) {
            return Err(ValidationError::new(
                "reference",
                "reference must be 9-15 digits, optionally prefixed with '+'",
                self.provider_ref.clone(),
            )
            .into());
        }

        let name_len = self.display_name.trim().chars().count();
        if !(DISPLAY_NAME_MIN_LEN..=DISPLAY_NAME_MAX_LEN).contains(&name_len) {
            return Err(ValidationError::new(
                "displayName",
                format!(
                    "display name must be between {} and {} characters",
                    DISPLAY_NAME_MIN_LEN, DISPLAY_NAME_MAX_LEN
                ),
                self.display_name.clone(),
            )
            .into());
        }

        Ok(())
    }
}

fn is_valid_reference(reference: &str) -> bool {
    let digits = reference.strip_prefix('+').unwrap_or(reference);
    (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
