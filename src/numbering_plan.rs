// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::LazyLock;

use log::{debug, trace};
use phonenumber::{country, metadata::DATABASE, Metadata, Mode, PhoneNumber, Type};
use regex::Regex;

use crate::{i18n::RegionCode, interfaces::NumberingPlan, number::ParseError};

/// Countries where mobile numbers are geographically assigned, so a mobile
/// number can still have an area code.
const GEO_MOBILE_COUNTRIES: [u16; 5] = [
    52, // Mexico
    54, // Argentina
    55, // Brazil
    62, // Indonesia: some prefixes only (fixed CMDA wireless)
    86, // China
];

/// Countries with geographically assigned mobile numbers whose mobile
/// numbers nevertheless carry no area code.
const GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES: [u16; 1] = [
    86, // China
];

/// Countries that use area codes although they have no national prefix.
const COUNTRIES_WITHOUT_NATIONAL_PREFIX_WITH_AREA_CODES: [u16; 1] = [
    52, // Mexico
];

/// Mobile tokens, keyed by country calling code, that sit between the
/// country code and the area code when a mobile number is dialled
/// internationally.
const MOBILE_TOKEN_MAPPINGS: [(u16, &str); 1] = [
    (54, "9"), // Argentina
];

static NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9]+").expect("non digits pattern must be a valid regex")
});

/// [`NumberingPlan`] backed by the metadata bundled with the
/// [`phonenumber`] crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneNumberPlan;

impl PhoneNumberPlan {
    pub fn new() -> Self {
        Self
    }

    fn region_hint_to_id(region_hint: &str) -> Option<country::Id> {
        match region_hint.to_ascii_uppercase().parse::<country::Id>() {
            Ok(id) => Some(id),
            Err(_) => {
                debug!("Invalid or unknown region code provided: {region_hint}");
                None
            }
        }
    }

    fn is_geo_mobile_country(country_calling_code: u16) -> bool {
        GEO_MOBILE_COUNTRIES.contains(&country_calling_code)
    }

    fn is_number_geographical(number_type: Type, country_calling_code: u16) -> bool {
        match number_type {
            Type::FixedLine | Type::FixedLineOrMobile => true,
            Type::Mobile => Self::is_geo_mobile_country(country_calling_code),
            _ => false,
        }
    }

    fn mobile_token(country_calling_code: u16) -> Option<&'static str> {
        MOBILE_TOKEN_MAPPINGS
            .iter()
            .find(|(code, _)| *code == country_calling_code)
            .map(|(_, token)| *token)
    }

    /// Finds the metadata of the region the number belongs to.
    ///
    /// Regions sharing a calling code are told apart by their leading digits
    /// or number patterns, matched against the national significant number
    /// with its leading zeros, so Italian fixed lines resolve to IT.
    fn metadata_for(national_number: &str, country_calling_code: u16) -> Option<&'static Metadata> {
        let regions = DATABASE.region(&country_calling_code)?;
        if let [region] = regions.as_slice() {
            if *region == RegionCode::get_non_geo_entity() {
                return DATABASE
                    .by_code(&country_calling_code)
                    .and_then(|metadata| metadata.into_iter().next());
            }
            return DATABASE.by_id(*region);
        }

        regions
            .into_iter()
            .filter_map(|region| DATABASE.by_id(region))
            .find(|metadata| match metadata.leading_digits() {
                Some(pattern) => pattern
                    .find(national_number)
                    .is_some_and(|found| found.start() == 0),
                None => Self::number_type(metadata, national_number) != Type::Unknown,
            })
    }

    /// Classifies the national significant number against the region's
    /// number descriptors, most specific types first.
    fn number_type(metadata: &Metadata, national_number: &str) -> Type {
        let descriptors = metadata.descriptors();
        let matches = |kind: Type| {
            descriptors
                .get(kind)
                .is_some_and(|descriptor| descriptor.is_match(national_number))
        };

        if !matches(Type::Unknown) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return Type::Unknown;
        }
        let specific = [
            Type::PremiumRate,
            Type::TollFree,
            Type::SharedCost,
            Type::Voip,
            Type::PersonalNumber,
            Type::Pager,
            Type::Uan,
            Type::Voicemail,
        ];
        if let Some(kind) = specific.into_iter().find(|kind| matches(*kind)) {
            return kind;
        }

        if matches(Type::FixedLine) {
            let fixed_line_pattern = descriptors
                .get(Type::FixedLine)
                .map(|descriptor| descriptor.national_number().as_str());
            let mobile_pattern = descriptors
                .get(Type::Mobile)
                .map(|descriptor| descriptor.national_number().as_str());
            if fixed_line_pattern == mobile_pattern || matches(Type::Mobile) {
                return Type::FixedLineOrMobile;
            }
            return Type::FixedLine;
        }
        if matches(Type::Mobile) {
            return Type::Mobile;
        }
        Type::Unknown
    }

    /// Returns the length of the national destination code, the group right
    /// after the country calling code in international format.
    fn length_of_national_destination_code(number: &PhoneNumber, number_type: Type) -> usize {
        let formatted = number.format().mode(Mode::International).to_string();
        // The first group is empty because of the leading '+', the second one
        // is the country calling code.
        let number_groups: Vec<&str> = NON_DIGITS.split(&formatted).collect();
        if number_groups.len() <= 3 {
            return 0;
        }

        let country_calling_code = number.code().value();
        if number_type == Type::Mobile && Self::mobile_token(country_calling_code).is_some() {
            // The token is formatted as its own group in front of the area
            // code, so both belong to the destination code.
            return number_groups[2].len() + number_groups[3].len();
        }
        number_groups[2].len()
    }
}

impl NumberingPlan for PhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, raw: &str, region_hint: Option<&str>) -> Result<PhoneNumber, ParseError> {
        let country = region_hint.and_then(Self::region_hint_to_id);
        Ok(phonenumber::parse(country, raw)?)
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn region_code(&self, number: &PhoneNumber) -> String {
        let national_number = self.national_significant_number(number);
        match Self::metadata_for(&national_number, number.code().value()) {
            Some(metadata) => metadata.id().to_owned(),
            None => {
                trace!("Missing/invalid country calling code ({})", number.code().value());
                RegionCode::get_unknown().to_owned()
            }
        }
    }

    fn country_calling_code(&self, number: &PhoneNumber) -> u16 {
        number.code().value()
    }

    fn national_significant_number(&self, number: &PhoneNumber) -> String {
        // Display keeps significant leading zeros (e.g. Italian fixed lines).
        number.national().to_string()
    }

    fn area_code_length(&self, number: &PhoneNumber) -> usize {
        let national_number = self.national_significant_number(number);
        let country_calling_code = number.code().value();
        let Some(metadata) = Self::metadata_for(&national_number, country_calling_code) else {
            return 0;
        };
        if metadata.id() == RegionCode::get_non_geo_entity() {
            return 0;
        }

        let number_type = Self::number_type(metadata, &national_number);
        if number_type == Type::Mobile
            && GEO_MOBILE_COUNTRIES_WITHOUT_MOBILE_AREA_CODES.contains(&country_calling_code)
        {
            return 0;
        }

        // If a country doesn't use a national prefix, and this number doesn't
        // have a leading zero, we assume it is a closed dialling plan with no
        // area codes.
        let has_leading_zero = national_number.starts_with('0');
        if metadata.national_prefix().is_none()
            && !has_leading_zero
            && !COUNTRIES_WITHOUT_NATIONAL_PREFIX_WITH_AREA_CODES.contains(&country_calling_code)
        {
            return 0;
        }

        if !Self::is_number_geographical(number_type, country_calling_code) {
            trace!("Number of type {number_type:?} has no geographic area code");
            return 0;
        }

        Self::length_of_national_destination_code(number, number_type)
    }
}
