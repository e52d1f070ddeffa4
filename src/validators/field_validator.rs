use std::ops::{Range, RangeInclusive};

const VALID_YEARS: Range<i64> = 1900..2100;
const VALID_RATINGS: RangeInclusive<i64> = 1..=100;

/// Base-10 integer parse. Anything unparseable, including overflow, is `None`.
pub fn parse_integer(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

pub fn parse_year(text: &str) -> Option<u16> {
    parse_integer(text)
        .filter(|year| VALID_YEARS.contains(year))
        .and_then(|year| u16::try_from(year).ok())
}

pub fn parse_rating(text: &str) -> Option<u8> {
    parse_integer(text)
        .filter(|rating| VALID_RATINGS.contains(rating))
        .and_then(|rating| u8::try_from(rating).ok())
}

pub fn is_valid_year(text: &str) -> bool {
    parse_year(text).is_some()
}

pub fn is_valid_rating(text: &str) -> bool {
    parse_rating(text).is_some()
}
