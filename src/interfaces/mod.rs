use crate::number::ParseError;

/// Numbering plan API used to isolate the underlying phone number engine
/// from the lookup logic and allow different implementations to be
/// swapped in easily.
pub trait NumberingPlan {
    /// Parsed number as understood by the engine.
    type Number;

    /// Parses `raw` into a number. `region_hint` is an ISO 3166-1 alpha-2
    /// code used when the number carries no country calling code.
    fn parse(&self, raw: &str, region_hint: Option<&str>) -> Result<Self::Number, ParseError>;

    /// Returns whether the number matches a valid pattern of its region.
    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Returns the region the number belongs to.
    fn region_code(&self, number: &Self::Number) -> String;

    fn country_calling_code(&self, number: &Self::Number) -> u16;

    /// Returns the national significant number, including significant
    /// leading zeros.
    fn national_significant_number(&self, number: &Self::Number) -> String;

    /// Returns how many leading digits of the national significant number
    /// form the geographic area code. Zero if the number has none.
    fn area_code_length(&self, number: &Self::Number) -> usize;
}
