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

use log::trace;

use super::{
    errors::LookupError,
    helper_functions::{has_correct_white_spaces, is_phone_number_made_of_digits},
    info::NumberInfo,
};
use crate::{interfaces::NumberingPlan, numbering_plan::PhoneNumberPlan};

/// Returns the information of a given phone number.
///
/// The phone number must be a sequence of digits in the format
/// `[+][country code][area code][local phone number]`, the '+' is optional.
/// It can have one white space between country code, area code and local
/// phone number, any other white space is invalid.
///
/// If the phone number is missing the country code then the caller must
/// provide `country_code` in ISO 3166-1 alpha-2 format. An empty
/// `country_code` means none was given.
pub fn lookup_number(raw_number: &str, country_code: &str) -> Result<NumberInfo, LookupError> {
    lookup_number_with(&PhoneNumberPlan::new(), raw_number, country_code)
}

/// Same as [`lookup_number`], with an explicit numbering plan.
pub fn lookup_number_with<P: NumberingPlan>(
    plan: &P,
    raw_number: &str,
    country_code: &str,
) -> Result<NumberInfo, LookupError> {
    if !is_phone_number_made_of_digits(raw_number) {
        trace!("Number '{raw_number}' contains characters other than digits");
        return Err(LookupError::InvalidPhoneNumber);
    }

    let region_hint = (!country_code.is_empty()).then_some(country_code);
    let number = plan.parse(raw_number, region_hint)?;
    if !plan.is_valid(&number) {
        trace!("Number '{raw_number}' doesn't match any valid pattern");
        return Err(LookupError::InvalidPhoneNumber);
    }

    let national_number = plan.national_significant_number(&number);
    let (area_code, local_phone_number) = national_number
        .split_at_checked(plan.area_code_length(&number))
        .unwrap_or(("", national_number.as_str()));

    let mut buf = itoa::Buffer::new();
    let info = NumberInfo {
        phone_number: Some(raw_number.to_owned()),
        region_code: Some(plan.region_code(&number)),
        country_code: Some(buf.format(plan.country_calling_code(&number)).to_owned()),
        area_code: (!area_code.is_empty()).then(|| area_code.to_owned()),
        local_phone_number: Some(local_phone_number.to_owned()),
    };

    if !has_correct_white_spaces(&info, raw_number) {
        return Err(LookupError::InvalidPhoneNumber);
    }

    let region_code = info.region_code.as_deref().unwrap_or_default();
    if region_hint.is_some_and(|hint| !hint.eq_ignore_ascii_case(region_code)) {
        trace!("Number '{raw_number}' belongs to {region_code}, not {country_code}");
        return Err(LookupError::InvalidCombination { region_code: region_code.to_owned() });
    }

    Ok(info)
}
