//! Phone number lookup service.
//!
//! Validates a phone number, optionally paired with an ISO 3166-1 alpha-2
//! country code, and splits it into region, country calling code, area code
//! and local phone number. Parsing and numbering plan validation are done by
//! the [`phonenumber`] crate; this crate adds the formatting rules and the
//! HTTP endpoint on top.

pub mod api;
pub mod config;
pub mod i18n;
pub mod interfaces;
pub mod number;
pub mod numbering_plan;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use number::{lookup_number, LookupError, NumberInfo};
