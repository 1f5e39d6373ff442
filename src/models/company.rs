//! Company profile - The singleton record printed on every quotation header.

use serde::{Deserialize, Serialize};

/// Company details shown on rendered documents. A single record exists per
/// installation; updates overwrite fields in place with no history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    /// Company display name
    pub name: String,
    /// Optional public URL of an uploaded logo image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Postal address, printed as a single line
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
}

impl Default for CompanyInfo {
    /// Placeholder profile shown until the user fills in their own details.
    fn default() -> Self {
        Self {
            name: "Your Company Name".to_string(),
            logo: None,
            address: "123 Business Street, City, Country".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "contact@yourcompany.com".to_string(),
        }
    }
}

/// Partial profile update: every field is "set if present"; the logo takes a
/// nested `Option` so it can be cleared.
#[derive(Clone, Debug, Default)]
pub struct CompanyInfoUpdate {
    pub name: Option<String>,
    pub logo: Option<Option<String>>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_profile_round_trips() {
        let info = CompanyInfo::default();
        let json = serde_json::to_string(&info).unwrap();
        let reloaded: CompanyInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, info);
        // No logo by default, and the field is omitted from the JSON
        assert!(!json.contains("logo"));
    }
}
