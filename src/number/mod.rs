mod helper_constants;
mod helper_functions;
mod info;
mod lookup;
pub mod errors;

pub use errors::{LookupError, MissingValueError, ParseError};
pub use helper_functions::{has_correct_white_spaces, is_phone_number_made_of_digits};
pub use info::NumberInfo;
pub use lookup::{lookup_number, lookup_number_with};
