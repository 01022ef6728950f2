//! flights::record
//!
//! A single flight row.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column holding the departure city.
pub const DEPARTURE_COLUMN: &str = "name_adep";
/// Column holding the destination city.
pub const DESTINATION_COLUMN: &str = "name_ades";
/// Column holding the flight date, `YYYY-MM-DD`.
pub const DATE_COLUMN: &str = "date";

/// One parsed flight.
///
/// Every named column except the identifier column is kept in `fields`,
/// so columns this crate does not interpret are still available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    id: String,
    fields: BTreeMap<String, String>,
    date: Option<NaiveDate>,
}

impl FlightRecord {
    pub(crate) fn new(
        id: String,
        fields: BTreeMap<String, String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self { id, fields, date }
    }

    /// The record identifier (first column).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw value of a named column.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// All named columns except the identifier.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Departure city.
    pub fn departure(&self) -> Option<&str> {
        self.field(DEPARTURE_COLUMN)
    }

    /// Destination city.
    pub fn destination(&self) -> Option<&str> {
        self.field(DESTINATION_COLUMN)
    }

    /// Flight date, if the row had one.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Zero-based month of the flight date (0 = January).
    pub fn month_index(&self) -> Option<usize> {
        self.date.map(|d| d.month0() as usize)
    }
}
