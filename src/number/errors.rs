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

use thiserror::Error;

/// Reasons a phone number lookup can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The input contains characters other than digits, a leading `+` and
    /// single spaces between segments, or the numbering plan does not
    /// consider it a valid number.
    #[error("invalid phone number")]
    InvalidPhoneNumber,
    /// The number is valid but belongs to a different region than the
    /// one supplied by the caller.
    #[error("invalid combination of phone number and country code")]
    InvalidCombination {
        /// Region actually inferred from the number.
        region_code: String,
    },
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Failures reported by the numbering plan while parsing raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No country calling code could be determined: the number has no
    /// leading `+` and no usable region hint was given.
    #[error("invalid country code")]
    InvalidCountryCode,
    #[error("{0}")]
    NotANumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required value is missing")]
pub struct MissingValueError;

impl From<phonenumber::ParseError> for ParseError {
    fn from(value: phonenumber::ParseError) -> Self {
        match value {
            phonenumber::ParseError::InvalidCountryCode => ParseError::InvalidCountryCode,
            other => ParseError::NotANumber(other.to_string()),
        }
    }
}
