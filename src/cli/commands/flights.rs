//! flights command - Query flight records from a CSV file

use anyhow::{anyhow, Context as _, Result};
use chrono::Month;
use std::path::{Path, PathBuf};

use super::helpers::load_config;
use crate::cli::args::FlightsQuery;
use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::flights::FlightData;
use crate::ui::output;

/// Run a flight query.
pub fn flights(
    ctx: &Context,
    csv: Option<&Path>,
    format: Option<OutputFormat>,
    query: &FlightsQuery,
) -> Result<()> {
    let config = load_config(ctx)?;
    let format = format.unwrap_or_else(|| config.output_format());

    let path: PathBuf = match csv {
        Some(path) => ctx.resolve(path)?,
        None => config.flights_csv().ok_or_else(|| {
            anyhow!("No flight data given. Pass --csv or run 'cw config set flights.csv <path>'.")
        })?,
    };
    let data = FlightData::load(&path).context("Failed to load flight data")?;

    match query {
        FlightsQuery::Arrivals { city } => {
            let arrivals = data.monthly_arrivals(city);
            match format {
                OutputFormat::Json => output::json(&arrivals)?,
                OutputFormat::Text => {
                    let lines: Vec<String> = arrivals
                        .iter()
                        .enumerate()
                        .map(|(month, count)| format!("{:<10} {}", month_name(month), count))
                        .collect();
                    output::result(lines.join("\n"));
                }
            }
        }
        FlightsQuery::Origins { city } => {
            let cities = data.departure_cities_to(city);
            match format {
                OutputFormat::Json => output::json(&cities)?,
                OutputFormat::Text => {
                    let cities: Vec<&String> = cities.iter().collect();
                    if !cities.is_empty() {
                        output::result(output::format_list(&cities, ""));
                    }
                }
            }
        }
        FlightsQuery::Between { start, end } => {
            let total = data.total_flights_between(*start, *end);
            match format {
                OutputFormat::Json => output::json(&total)?,
                OutputFormat::Text => output::result(total),
            }
        }
        FlightsQuery::Show { id } => {
            let record = data
                .flight(id)
                .ok_or_else(|| anyhow!("No flight with id '{}'", id))?;
            match format {
                OutputFormat::Json => output::json(record)?,
                OutputFormat::Text => {
                    let mut lines = vec![format!("id = {}", record.id())];
                    lines.extend(
                        record
                            .fields()
                            .iter()
                            .map(|(column, value)| format!("{} = {}", column, value)),
                    );
                    output::result(lines.join("\n"));
                }
            }
        }
    }

    Ok(())
}

fn month_name(index: usize) -> &'static str {
    u8::try_from(index + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?")
}
