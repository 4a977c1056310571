//! Token-level combinators for grid length notation.

use nom::{
    bytes::complete::tag_no_case,
    character::complete::multispace0,
    combinator::{all_consuming, map_res},
    number::complete::recognize_float,
    sequence::delimited,
    IResult,
};

/// Parse a decimal number (optional sign, fraction and exponent).
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, str::parse::<f64>)(input)
}

/// Parse a number padded with optional whitespace, consuming the whole input.
pub fn whole_number(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(multispace0, number, multispace0))(input)
}

/// Parse the `auto` keyword (any case) padded with optional whitespace,
/// consuming the whole input.
pub fn auto_keyword(input: &str) -> IResult<&str, &str> {
    all_consuming(delimited(multispace0, tag_no_case("auto"), multispace0))(input)
}
