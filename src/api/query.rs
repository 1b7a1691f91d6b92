use std::str::FromStr;

use strum::{EnumString, IntoStaticStr};

/// Query parameters understood by the number lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum QueryParam {
    /// Sequence of digits in the format
    /// `[+][country code][area code][local phone number]`.
    #[strum(serialize = "phoneNumber")]
    PhoneNumber,
    /// Country code in ISO 3166-1 alpha-2 format.
    #[strum(serialize = "countryCode")]
    CountryCode,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberLookupRequest {
    pub phone_number: String,
    pub country_code: String,
}

impl NumberLookupRequest {
    /// Builds the request from decoded query pairs. Only the first value of
    /// each parameter is used and unknown parameters are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut phone_number = None;
        let mut country_code = None;
        for (key, value) in pairs {
            match QueryParam::from_str(key.as_ref()) {
                Ok(QueryParam::PhoneNumber) if phone_number.is_none() => {
                    phone_number = Some(value.into())
                }
                Ok(QueryParam::CountryCode) if country_code.is_none() => {
                    country_code = Some(value.into())
                }
                _ => {}
            }
        }
        Self {
            phone_number: phone_number.unwrap_or_default(),
            country_code: country_code.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberLookupRequest, QueryParam};

    #[test]
    fn query_param_names() {
        assert_eq!(<&'static str>::from(QueryParam::PhoneNumber), "phoneNumber");
        assert_eq!("countryCode".parse::<QueryParam>(), Ok(QueryParam::CountryCode));
        assert!("phonenumber".parse::<QueryParam>().is_err());
    }

    #[test]
    fn first_value_wins() {
        let request = NumberLookupRequest::from_pairs([
            ("countryCode", "US"),
            ("phoneNumber", "2125690123"),
            ("phoneNumber", "+442087654321"),
            ("countryCode", "GB"),
            ("format", "e164"),
        ]);
        assert_eq!(
            request,
            NumberLookupRequest { phone_number: "2125690123".into(), country_code: "US".into() }
        );
    }

    #[test]
    fn missing_params_are_empty() {
        let request = NumberLookupRequest::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(request, NumberLookupRequest::default());
    }
}
