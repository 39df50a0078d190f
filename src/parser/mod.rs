use crate::types::FilmRecord;
use thiserror::Error;

/// Recoverable per-line failures; the scanner skips these, it never
/// aborts on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not have the expected tab-delimited shape")]
    MalformedLine,

    #[error("title field does not carry a parseable 4-digit year")]
    InvalidYear,
}

/// Parses one raw catalog line into a [`FilmRecord`].
///
/// The catalog format is tab-delimited but only loosely so: the title
/// field is `Name (YYYY)` with an optional ` {episode}` suffix, the
/// place field is either the last field or, when a `(filming)`-style
/// trailer occupies the last field, the one before it. Anything that
/// does not fit yields a [`ParseError`] instead of panicking.
pub fn parse_line(line: &str) -> Result<FilmRecord, ParseError> {
    let line = line.trim_end();
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 2 {
        return Err(ParseError::MalformedLine);
    }

    let place_field = pick_place_field(&fields)?;
    let stripped = strip_trailing_parentheticals(place_field);
    let (location, country) = split_place(stripped)?;

    let year = extract_year(fields[0].trim())?;

    Ok(FilmRecord { year, location, country })
}

/// The place lives in the last field unless a trailing parenthetical
/// annotation pushed it one field earlier.
fn pick_place_field<'a>(fields: &[&'a str]) -> Result<&'a str, ParseError> {
    let last = fields[fields.len() - 1].trim();
    if last.is_empty() {
        return Err(ParseError::MalformedLine);
    }
    if last.ends_with(')') && fields.len() >= 3 {
        let previous = fields[fields.len() - 2].trim();
        if previous.is_empty() {
            return Err(ParseError::MalformedLine);
        }
        return Ok(previous);
    }
    Ok(last)
}

/// Removes trailing `(...)` groups, outermost first, handling nested
/// parentheses by depth-matching from the right. An unbalanced
/// trailing group is left in place.
fn strip_trailing_parentheticals(field: &str) -> &str {
    let mut rest = field.trim_end();
    while rest.ends_with(')') {
        let mut depth = 0usize;
        let mut cut = None;
        for (idx, ch) in rest.char_indices().rev() {
            match ch {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        cut = Some(idx);
                        break;
                    }
                }
                _ => {}
            }
        }
        match cut {
            Some(idx) => rest = rest[..idx].trim_end(),
            None => break,
        }
    }
    rest
}

/// Splits a place field into (location, country).
///
/// `Country: region, place` puts the country first; otherwise the
/// catalog writes `Place, Region, Country` and the country is the
/// final whitespace-delimited token.
fn split_place(field: &str) -> Result<(String, String), ParseError> {
    if field.is_empty() {
        return Err(ParseError::MalformedLine);
    }
    if let Some((country, rest)) = field.split_once(':') {
        let country = country.trim();
        let location = rest.rsplit(',').next().unwrap_or("").trim();
        if country.is_empty() || location.is_empty() {
            return Err(ParseError::MalformedLine);
        }
        return Ok((location.to_string(), country.to_string()));
    }
    let country = field
        .split_whitespace()
        .next_back()
        .ok_or(ParseError::MalformedLine)?;
    Ok((field.to_string(), country.to_string()))
}

/// Pulls the production year out of a title like `Kumquat (2015)` or
/// `Kumquat (2015) {Pilot (#1.1)}`.
fn extract_year(title: &str) -> Result<i32, ParseError> {
    let title = if title.ends_with('}') {
        title.split(" {").next().unwrap_or(title).trim_end()
    } else {
        title
    };
    let chars: Vec<char> = title.chars().collect();
    if chars.len() < 5 {
        return Err(ParseError::InvalidYear);
    }
    // The 4 characters inside the trailing `(YYYY)` wrapper.
    let digits: String = chars[chars.len() - 5..chars.len() - 1].iter().collect();
    digits.parse().map_err(|_| ParseError::InvalidYear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_field_line_with_trailing_annotation() {
        let record =
            parse_line("Kumquat (2015) {TV}\tUSA: California, Los Angeles (filming)").unwrap();
        assert_eq!(record.year, 2015);
        assert_eq!(record.location, "Los Angeles");
        assert_eq!(record.country, "USA");
    }

    #[test]
    fn annotation_in_its_own_field_shifts_the_place_left() {
        let record =
            parse_line("Heat (1995)\tLos Angeles, California, USA\t(studio)").unwrap();
        assert_eq!(record.year, 1995);
        assert_eq!(record.location, "Los Angeles, California, USA");
        assert_eq!(record.country, "USA");
    }

    #[test]
    fn episode_marker_is_cut_before_the_year() {
        let record = parse_line("Show (2010) {Pilot (#1.1)}\tToronto, Canada").unwrap();
        assert_eq!(record.year, 2010);
        assert_eq!(record.country, "Canada");
    }

    #[test]
    fn nested_trailing_parentheticals_are_stripped() {
        let record =
            parse_line("Film (2001)\tPrague, Czech Republic (interiors (stage 4))").unwrap();
        assert_eq!(record.location, "Prague, Czech Republic");
        assert_eq!(record.country, "Republic");
    }

    #[test]
    fn single_field_line_is_malformed() {
        assert_eq!(parse_line("just a title"), Err(ParseError::MalformedLine));
    }

    #[test]
    fn empty_trailing_field_is_malformed() {
        assert_eq!(parse_line("Bad Film\t"), Err(ParseError::MalformedLine));
    }

    #[test]
    fn title_without_year_is_invalid_year() {
        assert_eq!(
            parse_line("No Year Here\tParis, France"),
            Err(ParseError::InvalidYear)
        );
    }

    #[test]
    fn short_title_is_invalid_year_not_a_panic() {
        assert_eq!(parse_line("Hi\tRome, Italy"), Err(ParseError::InvalidYear));
    }

    #[test]
    fn parsed_facets_are_never_empty() {
        let record = parse_line("Solaris (1972)\tZvenigorod, Russia").unwrap();
        assert!(!record.location.is_empty());
        assert!(!record.country.is_empty());
    }
}
