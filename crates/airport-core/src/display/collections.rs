//! Markdown tables for entity collections.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::FlightTime;
use crate::models::{Airplane, Destination, Flight, Resource, Steward};

/// An entity that can be rendered as one table row.
pub trait TableRow: Resource {
    /// Column headers, the id column included.
    fn headers() -> &'static [&'static str];

    /// Cell texts in header order.
    fn cells(&self, tz: &TimeZone) -> Vec<String>;
}

impl TableRow for Steward {
    fn headers() -> &'static [&'static str] {
        &["ID", "First name", "Surname"]
    }

    fn cells(&self, _tz: &TimeZone) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.surname.clone(),
        ]
    }
}

impl TableRow for Airplane {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Type", "Capacity"]
    }

    fn cells(&self, _tz: &TimeZone) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.airplane_type.clone(),
            self.capacity.to_string(),
        ]
    }
}

impl TableRow for Destination {
    fn headers() -> &'static [&'static str] {
        &["ID", "Country", "City"]
    }

    fn cells(&self, _tz: &TimeZone) -> Vec<String> {
        vec![self.id.to_string(), self.country.clone(), self.city.clone()]
    }
}

impl TableRow for Flight {
    fn headers() -> &'static [&'static str] {
        &["ID", "From", "To", "Departure", "Arrival", "Airplane", "Crew"]
    }

    fn cells(&self, tz: &TimeZone) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.departure_location_id.to_string(),
            self.arrival_location_id.to_string(),
            FlightTime::in_zone(&self.departure_time, tz).to_string(),
            FlightTime::in_zone(&self.arrival_time, tz).to_string(),
            self.airplane_id.to_string(),
            self.steward_ids.len().to_string(),
        ]
    }
}

/// Borrowed rows rendered as a markdown table.
///
/// # Examples
///
/// ```rust
/// use airport_core::{display::Table, models::Destination};
///
/// let brno = Destination { id: 1, country: "Czech Republic".into(), city: "Brno".into() };
/// let table = Table::new(vec![&brno]);
/// assert!(table.to_string().contains("| 1 | Czech Republic | Brno |"));
///
/// let empty: Table<Destination> = Table::new(Vec::new());
/// assert_eq!(empty.to_string(), "No destinations found.\n");
/// ```
pub struct Table<'a, R> {
    rows: Vec<&'a R>,
    tz: TimeZone,
}

impl<'a, R: TableRow> Table<'a, R> {
    pub fn new(rows: Vec<&'a R>) -> Self {
        Self {
            rows,
            tz: TimeZone::UTC,
        }
    }

    /// Renders times in `tz` instead of UTC.
    pub fn in_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }
}

impl<'a, R: TableRow> From<&'a [R]> for Table<'a, R> {
    fn from(rows: &'a [R]) -> Self {
        Self::new(rows.iter().collect())
    }
}

impl<R: TableRow> fmt::Display for Table<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No {} found.", R::KIND.collection());
        }

        let headers = R::headers();
        writeln!(f, "| {} |", headers.join(" | "))?;
        writeln!(f, "|{}", "---|".repeat(headers.len()))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .cells(&self.tz)
                .into_iter()
                .map(|cell| cell.replace('|', "\\|"))
                .collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
