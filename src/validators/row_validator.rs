use crate::{
    error::Rejection,
    model::{movie::Movie, raw_row::RawRow},
    validators::field_validator::{parse_rating, parse_year},
};

const FIELD_COUNT: usize = 6;

/// Checks field count, then year, then ratings; the first failing rule is the
/// one reported.
pub fn validate_row(row: &RawRow) -> Result<Movie, Rejection> {
    let line = row.line;
    let fields = match <&[String; FIELD_COUNT]>::try_from(row.fields.as_slice()) {
        Ok(fields) => fields,
        Err(_) => return Err(Rejection::FieldCount { line }),
    };
    let [title, year, genre, rating1, rating2, rating3] = fields;

    let year = year.trim();
    let year = parse_year(year).ok_or_else(|| Rejection::Year {
        line,
        value: year.to_string(),
    })?;

    let ratings = match (
        parse_rating(rating1.trim()),
        parse_rating(rating2.trim()),
        parse_rating(rating3.trim()),
    ) {
        (Some(r1), Some(r2), Some(r3)) => [r1, r2, r3],
        _ => return Err(Rejection::Rating { line }),
    };

    Ok(Movie::new(
        title.trim().to_string(),
        year,
        genre.trim().to_string(),
        ratings,
    ))
}
