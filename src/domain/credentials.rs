//! Credentials captured by the form.

use crate::error::{CampaignError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    AccessToken,
    AdAccountId,
    PageId,
}

impl CredentialField {
    pub const ALL: [CredentialField; 3] = [Self::AccessToken, Self::AdAccountId, Self::PageId];

    /// Name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::AccessToken => "Access Token",
            Self::AdAccountId => "Ad Account ID",
            Self::PageId => "Page ID",
        }
    }

    /// Caption shown above the form input.
    pub fn input_label(self) -> &'static str {
        match self {
            Self::AccessToken => "Facebook Access Token",
            Self::AdAccountId => "Ad Account ID (without 'act_')",
            Self::PageId => "Facebook Page ID",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::AccessToken => "Enter Access Token",
            Self::AdAccountId => "Enter Ad Account ID",
            Self::PageId => "Enter Page ID",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::AccessToken)
    }

    pub fn join_labels(fields: &[CredentialField]) -> String {
        fields
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Held only in memory for the lifetime of the window.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub ad_account_id: String,
    pub page_id: String,
}

impl Credentials {
    pub fn new(
        access_token: impl Into<String>,
        ad_account_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            ad_account_id: ad_account_id.into(),
            page_id: page_id.into(),
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::AccessToken => &self.access_token,
            CredentialField::AdAccountId => &self.ad_account_id,
            CredentialField::PageId => &self.page_id,
        }
    }

    pub fn set(&mut self, field: CredentialField, value: String) {
        match field {
            CredentialField::AccessToken => self.access_token = value,
            CredentialField::AdAccountId => self.ad_account_id = value,
            CredentialField::PageId => self.page_id = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<CredentialField> {
        CredentialField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Only checks presence; token shape and numeric ids are left to the API.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignError::MissingCredentials`] listing every empty field
    pub fn validate(&self) -> Result {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CampaignError::MissingCredentials(missing))
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("ad_account_id", &self.ad_account_id)
            .field("page_id", &self.page_id)
            .finish()
    }
}
