use serde::Serialize;

/// Structured components of a looked up phone number.
///
/// The same shape is reused for error details in HTTP responses, where each
/// field carries a message about the matching request field instead of a
/// value. Absent fields are omitted from JSON.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInfo {
    /// Raw number as given by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// ISO 3166-1 alpha-2, e.g.: "US", "GB", "CA"
    #[serde(rename = "countryCode", skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// ITU-T E.164, e.g.: 1, 52, 34
    #[serde(skip)]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_phone_number: Option<String>,
}

impl NumberInfo {
    pub fn with_phone_number(phone_number: impl Into<String>) -> Self {
        Self { phone_number: Some(phone_number.into()), ..Default::default() }
    }

    pub fn with_region_code(region_code: impl Into<String>) -> Self {
        Self { region_code: Some(region_code.into()), ..Default::default() }
    }

    pub fn area_code_str(&self) -> &str {
        self.area_code.as_deref().unwrap_or_default()
    }

    pub fn country_code_str(&self) -> &str {
        self.country_code.as_deref().unwrap_or_default()
    }

    pub fn local_phone_number_str(&self) -> &str {
        self.local_phone_number.as_deref().unwrap_or_default()
    }
}
