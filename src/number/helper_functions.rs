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

use log::trace;
use regex::Regex;

use super::{
    helper_constants::{ONLY_DIGITS_PATTERN, PLUS_SIGN, SEGMENT_SEPARATOR},
    info::NumberInfo,
};
use crate::regex_util::RegexFullMatch;

static ONLY_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile-time constant.
    Regex::new(ONLY_DIGITS_PATTERN).expect("ONLY_DIGITS_PATTERN must be a valid regex")
});

/// Checks if the given number is composed of only digits.
///
/// Numbering plan parsers accept letters ("1-800-FLOWERS") and punctuation,
/// so this runs before the number is handed over. Spaces and a single
/// leading '+' are allowed.
pub fn is_phone_number_made_of_digits(number: &str) -> bool {
    let without_spaces = number.replace(SEGMENT_SEPARATOR, "");
    let digits = without_spaces
        .strip_prefix(PLUS_SIGN)
        .unwrap_or(&without_spaces);
    ONLY_DIGITS.full_match(digits)
}

/// Checks that white spaces only appear between country code, area code and
/// local phone number, and that there is exactly one space at each boundary.
pub fn has_correct_white_spaces(info: &NumberInfo, number: &str) -> bool {
    let number_without_plus = number.strip_prefix(PLUS_SIGN).unwrap_or(number);
    let parts = number_without_plus.split(SEGMENT_SEPARATOR).count();

    let country_code = info.country_code_str();
    let area_code = info.area_code_str();
    let local_phone_number = info.local_phone_number_str();

    let is_correct = match parts {
        // no white spaces at all
        1 => true,
        2 if area_code.is_empty() => {
            number_without_plus == fast_cat::concat_str!(country_code, " ", local_phone_number)
        }
        2 => {
            number_without_plus
                == fast_cat::concat_str!(country_code, " ", area_code, local_phone_number)
                || number_without_plus
                    == fast_cat::concat_str!(country_code, area_code, " ", local_phone_number)
        }
        3 => {
            !area_code.is_empty()
                && number_without_plus
                    == fast_cat::concat_str!(country_code, " ", area_code, " ", local_phone_number)
        }
        // at most 3 parts (2 white spaces)
        _ => false,
    };
    if !is_correct {
        trace!("Number '{number}' has {parts} space separated parts that don't match its segments");
    }
    is_correct
}
