use crate::constants::{MAX_FILTER_YEAR, MIN_FILTER_YEAR};
use crate::error::{MapError, Result};
use std::collections::HashSet;

/// Set of years a record must match to be counted. An empty filter
/// accepts every record.
#[derive(Debug, Clone, Default)]
pub struct YearFilter {
    years: HashSet<i32>,
}

impl YearFilter {
    /// Accepts all years.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Self {
        Self { years: years.into_iter().collect() }
    }

    /// Parses a selection like `"1994,2001-2003"` into a filter.
    ///
    /// Each comma-separated part is a single year or an inclusive
    /// range. Selected years outside the supported span are dropped
    /// rather than rejected; a part that is not numeric at all is an
    /// error.
    pub fn parse(selection: &str) -> Result<Self> {
        let mut years = HashSet::new();
        for part in selection.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((from, to)) => {
                    let from: i32 = parse_year(from)?;
                    let to: i32 = parse_year(to)?;
                    if to < from {
                        return Err(MapError::Config(format!(
                            "Year range '{}' runs backwards",
                            part
                        )));
                    }
                    years.extend((from..=to).filter(|y| good_year(*y)));
                }
                None => {
                    let year = parse_year(part)?;
                    if good_year(year) {
                        years.insert(year);
                    }
                }
            }
        }
        Ok(Self { years })
    }

    /// An empty filter matches everything.
    pub fn matches(&self, year: i32) -> bool {
        self.years.is_empty() || self.years.contains(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }
}

fn parse_year(text: &str) -> Result<i32> {
    text.trim()
        .parse()
        .map_err(|_| MapError::Config(format!("'{}' is not a year", text.trim())))
}

/// Bound applied to user-entered years only, never to parsed records.
fn good_year(year: i32) -> bool {
    MIN_FILTER_YEAR < year && year < MAX_FILTER_YEAR
}
