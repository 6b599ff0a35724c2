pub mod colors;
pub mod formatting;
pub mod path;

pub use formatting::{format_amount, millis_to_units2, round2};
