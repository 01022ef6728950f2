//! flights
//!
//! Flight record aggregation from CSV.
//!
//! # Overview
//!
//! [`FlightData`] is parsed once from a CSV file and then answers lookups:
//! - record by identifier
//! - monthly arrival counts for a destination
//! - departure cities for a destination
//! - number of flights within an inclusive date range
//!
//! This module is independent of the coloring engine.
//!
//! # Format
//!
//! - The first non-blank line is the header; columns are matched by name
//! - The first column is the record identifier
//! - Fields are split on `,` and trimmed; quoting is not supported
//! - Short rows leave trailing columns absent; extra fields are ignored
//! - A repeated identifier replaces the earlier record
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use colorwork::flights::FlightData;
//!
//! let data = FlightData::parse(
//!     "flight_id,name_adep,name_ades,date\n\
//!      0,Paris,London,2022-03-15\n\
//!      1,Berlin,Paris,2022-04-20\n",
//! )
//! .unwrap();
//!
//! assert_eq!(data.monthly_arrivals("London")[2], 1);
//! assert!(data.departure_cities_to("Paris").contains("Berlin"));
//!
//! let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
//! assert_eq!(data.total_flights_between(start, end), 2);
//! ```

mod record;

pub use record::{FlightRecord, DATE_COLUMN, DEPARTURE_COLUMN, DESTINATION_COLUMN};

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Accepted date format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from loading flight data.
#[derive(Debug, Error)]
pub enum FlightsError {
    #[error("failed to read flight data '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read flight data: {0}")]
    Io(#[from] std::io::Error),

    #[error("flight data has no header line")]
    MissingHeader,

    #[error("line {line}: record identifier is empty")]
    EmptyId { line: usize },

    #[error("line {line}: invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { line: usize, value: String },
}

/// Parsed flight records with lookup indexes.
#[derive(Debug, Clone, Default)]
pub struct FlightData {
    /// Records in first-appearance order of their identifier
    records: Vec<FlightRecord>,
    /// Identifier -> position in `records`
    by_id: HashMap<String, usize>,
    /// Destination -> arrivals per month, all years summed
    arrivals: HashMap<String, [u32; 12]>,
    /// Date -> number of flights on that date
    by_date: BTreeMap<NaiveDate, usize>,
}

impl FlightData {
    /// Load and parse a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `FlightsError::ReadError` if the file cannot be read, or a
    /// parse error for malformed content.
    pub fn load(path: &Path) -> Result<Self, FlightsError> {
        let contents = fs::read_to_string(path).map_err(|e| FlightsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let data = Self::parse(&contents)?;
        debug!(path = %path.display(), records = data.len(), "loaded flight data");
        Ok(data)
    }

    /// Parse CSV from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, FlightsError> {
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        Self::parse(&text)
    }

    /// Parse CSV text.
    pub fn parse(text: &str) -> Result<Self, FlightsError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, header) = lines.next().ok_or(FlightsError::MissingHeader)?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let mut records: Vec<FlightRecord> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for (line, row) in lines {
            let record = Self::parse_row(line, &columns, row)?;
            match by_id.get(record.id()) {
                Some(&index) => records[index] = record,
                None => {
                    by_id.insert(record.id().to_string(), records.len());
                    records.push(record);
                }
            }
        }

        Ok(Self::index(records, by_id))
    }

    fn parse_row(line: usize, columns: &[&str], row: &str) -> Result<FlightRecord, FlightsError> {
        let values: Vec<&str> = row.split(',').map(str::trim).collect();

        let id = values.first().copied().unwrap_or_default();
        if id.is_empty() {
            return Err(FlightsError::EmptyId { line });
        }

        let fields: BTreeMap<String, String> = columns
            .iter()
            .zip(values.iter())
            .skip(1)
            .filter(|(column, _)| !column.is_empty())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();

        let date = match fields.get(DATE_COLUMN) {
            Some(value) if !value.is_empty() => Some(
                NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
                    FlightsError::InvalidDate {
                        line,
                        value: value.clone(),
                    }
                })?,
            ),
            _ => None,
        };

        Ok(FlightRecord::new(id.to_string(), fields, date))
    }

    /// Build the lookup indexes over the final record set.
    fn index(records: Vec<FlightRecord>, by_id: HashMap<String, usize>) -> Self {
        let mut arrivals: HashMap<String, [u32; 12]> = HashMap::new();
        let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();

        for record in &records {
            if let Some(date) = record.date() {
                *by_date.entry(date).or_default() += 1;
            }
            if let (Some(destination), Some(month)) = (record.destination(), record.month_index()) {
                arrivals.entry(destination.to_string()).or_default()[month] += 1;
            }
        }

        Self {
            records,
            by_id,
            arrivals,
            by_date,
        }
    }

    /// Look up a record by identifier.
    pub fn flight(&self, id: &str) -> Option<&FlightRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// All records.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arrivals at `city` per month, index 0 = January, all years summed.
    pub fn monthly_arrivals(&self, city: &str) -> [u32; 12] {
        self.arrivals.get(city).copied().unwrap_or_default()
    }

    /// Distinct departure cities of flights arriving at `city`.
    pub fn departure_cities_to(&self, city: &str) -> BTreeSet<String> {
        self.records
            .iter()
            .filter(|r| r.destination() == Some(city))
            .filter_map(|r| r.departure())
            .map(str::to_string)
            .collect()
    }

    /// Number of dated flights with `start <= date <= end`.
    ///
    /// Returns zero when `start > end`.
    pub fn total_flights_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        if start > end {
            return 0;
        }
        self.by_date
            .range(start..=end)
            .map(|(_, count)| count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const BERLIN: &str = "flight_id,name_adep,name_ades,date
    0,Paris,Berlin,2022-06-15
    1,Madrid,Berlin,2022-06-20
    2,Paris,Berlin,2022-04-15";

    mod parse {
        use super::*;

        #[test]
        fn two_flights() {
            let data = FlightData::parse(
                "flight_id,name_adep,name_ades,date
                0,Paris,London,2022-03-15
                1,Berlin,Paris,2022-04-20",
            )
            .unwrap();

            assert_eq!(data.len(), 2);
            let first = data.flight("0").unwrap();
            assert_eq!(first.departure(), Some("Paris"));
            assert_eq!(first.destination(), Some("London"));
            assert_eq!(first.date(), Some(date(2022, 3, 15)));
        }

        #[test]
        fn header_only() {
            let data = FlightData::parse(
                "flight_id,date,callsign,adep,name_adep,country_code_adep,ades,name_ades,",
            )
            .unwrap();
            assert!(data.is_empty());
            assert_eq!(data.monthly_arrivals("Berlin"), [0; 12]);
        }

        #[test]
        fn empty_text_has_no_header() {
            assert!(matches!(
                FlightData::parse("\n  \n"),
                Err(FlightsError::MissingHeader)
            ));
        }

        #[test]
        fn identifiers_only() {
            let data = FlightData::parse("flight_id\n0\n1\n2\n").unwrap();
            assert_eq!(data.len(), 3);
            assert!(data.flight("1").unwrap().fields().is_empty());
        }

        #[test]
        fn extra_columns_kept() {
            let data = FlightData::parse(
                "flight_id,name_adep,name_ades,date,extra\n0,Paris,Berlin,2022-06-15,x\n",
            )
            .unwrap();
            assert_eq!(data.flight("0").unwrap().field("extra"), Some("x"));
        }

        #[test]
        fn extra_fields_beyond_header_ignored() {
            let data = FlightData::parse("flight_id,name_ades\n0,Berlin,surplus\n").unwrap();
            assert_eq!(data.flight("0").unwrap().fields().len(), 1);
        }

        #[test]
        fn short_row_leaves_columns_absent() {
            let data = FlightData::parse("flight_id,name_adep,name_ades,date\n0,Paris\n").unwrap();
            let record = data.flight("0").unwrap();
            assert_eq!(record.departure(), Some("Paris"));
            assert_eq!(record.destination(), None);
            assert_eq!(record.date(), None);
        }

        #[test]
        fn repeated_identifier_replaces_record() {
            let text = "flight_id,name_adep,name_ades,date\n\
                        7,Paris,Berlin,2022-01-01\n\
                        7,Rome,Oslo,2022-02-02\n";
            let data = FlightData::parse(text).unwrap();
            assert_eq!(data.len(), 1);
            assert_eq!(data.flight("7").unwrap().destination(), Some("Oslo"));
            assert_eq!(data.monthly_arrivals("Berlin"), [0; 12]);
            assert_eq!(data.monthly_arrivals("Oslo")[1], 1);
        }

        #[test]
        fn empty_identifier_rejected() {
            let err = FlightData::parse("flight_id,name_ades\n,Berlin\n").unwrap_err();
            assert!(matches!(err, FlightsError::EmptyId { line: 2 }));
        }

        #[test]
        fn invalid_date_rejected() {
            let err = FlightData::parse("flight_id,date\n0,2022-13-01\n").unwrap_err();
            assert!(matches!(err, FlightsError::InvalidDate { line: 2, .. }));
            assert!(err.to_string().contains("2022-13-01"));
        }

        #[test]
        fn from_reader_matches_parse() {
            let data = FlightData::from_reader(BERLIN.as_bytes()).unwrap();
            assert_eq!(data.len(), 3);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn monthly_arrivals_by_month() {
            let data = FlightData::parse(BERLIN).unwrap();
            let arrivals = data.monthly_arrivals("Berlin");
            assert_eq!(arrivals[5], 2);
            assert_eq!(arrivals[3], 1);
            assert_eq!(arrivals.iter().sum::<u32>(), 3);
        }

        #[test]
        fn monthly_arrivals_sum_years() {
            let data = FlightData::parse(
                "flight_id,name_adep,name_ades,date
                0,Paris,Berlin,2022-04-15
                1,Madrid,Berlin,2020-06-20
                2,Paris,Berlin,2021-04-15",
            )
            .unwrap();
            assert_eq!(data.monthly_arrivals("Berlin")[3], 2);
        }

        #[test]
        fn unknown_city_has_no_arrivals() {
            let data = FlightData::parse(BERLIN).unwrap();
            assert_eq!(data.monthly_arrivals("Ibiza"), [0; 12]);
            assert!(data.departure_cities_to("Ibiza").is_empty());
        }

        #[test]
        fn departure_cities_are_distinct() {
            let data = FlightData::parse(BERLIN).unwrap();
            let cities: Vec<String> = data.departure_cities_to("Berlin").into_iter().collect();
            assert_eq!(cities, vec!["Madrid".to_string(), "Paris".to_string()]);
        }

        #[test]
        fn same_departure_and_destination() {
            let text = "flight_id,name_adep,name_ades,date\n0,Berlin,Berlin,2022-04-15\n";
            let data = FlightData::parse(text).unwrap();
            assert!(data.departure_cities_to("Berlin").contains("Berlin"));
            assert_eq!(data.monthly_arrivals("Berlin")[3], 1);
        }

        #[test]
        fn between_is_inclusive() {
            let data = FlightData::parse(BERLIN).unwrap();
            assert_eq!(
                data.total_flights_between(date(2022, 6, 1), date(2022, 6, 30)),
                2
            );
            assert_eq!(
                data.total_flights_between(date(2022, 4, 15), date(2022, 4, 15)),
                1
            );
            assert_eq!(
                data.total_flights_between(date(2022, 6, 15), date(2022, 6, 20)),
                2
            );
        }

        #[test]
        fn between_out_of_range() {
            let data = FlightData::parse(BERLIN).unwrap();
            assert_eq!(
                data.total_flights_between(date(2021, 6, 1), date(2021, 6, 30)),
                0
            );
        }

        #[test]
        fn between_reversed_range_is_zero() {
            let data = FlightData::parse(BERLIN).unwrap();
            assert_eq!(
                data.total_flights_between(date(2022, 12, 31), date(2022, 1, 1)),
                0
            );
        }

        #[test]
        fn undated_records_never_counted() {
            let data = FlightData::parse("flight_id\n0\n1\n").unwrap();
            assert_eq!(
                data.total_flights_between(date(1900, 1, 1), date(2100, 1, 1)),
                0
            );
        }
    }
}
