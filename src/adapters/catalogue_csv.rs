use crate::domain::model::MovieRecord;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Column positions resolved from the header row.
struct Columns {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let required = |name: &str| {
            position(name).ok_or_else(|| EtlError::ValidationError {
                message: format!("missing '{}' column in header", name),
            })
        };

        Ok(Self {
            year: required("year")?,
            title: required("title")?,
            studios: required("studios")?,
            producers: required("producers")?,
            winner: position("winner"),
        })
    }
}

/// Parses the award catalogue (`year;title;studios;producers;winner`).
///
/// The first line must be the header. A row without a trailing `winner`
/// cell is a nominee that did not win.
pub fn parse_catalogue(data: &[u8], delimiter: u8) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut movies = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // 第一行是標頭
        let line = index + 2;
        movies.push(into_movie(&record?, &columns, line)?);
    }

    tracing::debug!("Parsed {} catalogue rows", movies.len());
    Ok(movies)
}

fn into_movie(record: &csv::StringRecord, columns: &Columns, line: usize) -> Result<MovieRecord> {
    let cell = |index: usize| record.get(index).unwrap_or("");

    let raw_year = cell(columns.year);
    let year = parse_year(raw_year).ok_or_else(|| EtlError::ValidationError {
        message: format!("line {}: '{}' is not a 4-digit year", line, raw_year),
    })?;

    let title = cell(columns.title);
    if title.is_empty() {
        return Err(EtlError::ValidationError {
            message: format!("line {}: title is empty", line),
        });
    }

    let winner = columns
        .winner
        .map(|index| cell(index).eq_ignore_ascii_case("yes"))
        .unwrap_or(false);

    Ok(MovieRecord {
        year,
        title: title.to_string(),
        studios: split_names(cell(columns.studios)),
        producers: split_names(cell(columns.producers)),
        winner,
    })
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Splits a studios/producers cell on commas and on a standalone "and".
pub fn split_names(cell: &str) -> Vec<String> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR.get_or_init(|| Regex::new(r",|\s+and\s+").expect("valid separator"));

    separator
        .split(cell)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
