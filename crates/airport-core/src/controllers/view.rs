//! Sort and search state of a collection table.
//!
//! Presentation only: [`TableView::apply`] borrows the fetched collection and
//! never reorders or filters the collection itself.

use std::cmp::Ordering;

use crate::models::{Airplane, Destination, Flight, Resource, Steward};

/// An entity whose table supports sorting and free-text search.
pub trait Sortable: Resource {
    /// Columns the table can be sorted by.
    type Key: Copy + PartialEq;

    /// Compares two rows by the given column.
    fn compare(&self, other: &Self, key: Self::Key) -> Ordering;

    /// Whether the row matches a lower-cased search query.
    fn matches(&self, query: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StewardSort {
    FirstName,
    #[default]
    Surname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirplaneSort {
    #[default]
    Name,
    Type,
    Capacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestinationSort {
    #[default]
    Country,
    City,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightSort {
    Id,
    #[default]
    Departure,
    Arrival,
}

/// Sort column, direction and search text of one table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView<K> {
    pub sort_key: K,
    pub reverse: bool,
    pub query: String,
}

impl<K: Copy + PartialEq> TableView<K> {
    /// Selects a sort column. Selecting the current column again flips the
    /// direction; a new column starts ascending.
    pub fn sort_by(&mut self, key: K) {
        if self.sort_key == key {
            self.reverse = !self.reverse;
        } else {
            self.sort_key = key;
            self.reverse = false;
        }
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows to display: matching the query, sorted by the selected column with
    /// ties kept in server order.
    pub fn apply<'a, R>(&self, items: &'a [R]) -> Vec<&'a R>
    where
        R: Sortable<Key = K>,
    {
        let query = self.query.trim().to_lowercase();
        let mut rows: Vec<&R> = items
            .iter()
            .filter(|item| query.is_empty() || item.matches(&query))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = a.compare(b, self.sort_key);
            if self.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
        rows
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn contains(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

impl Sortable for Steward {
    type Key = StewardSort;

    fn compare(&self, other: &Self, key: StewardSort) -> Ordering {
        match key {
            StewardSort::FirstName => compare_text(&self.first_name, &other.first_name),
            StewardSort::Surname => compare_text(&self.surname, &other.surname),
        }
    }

    fn matches(&self, query: &str) -> bool {
        contains(&self.first_name, query) || contains(&self.surname, query)
    }
}

impl Sortable for Airplane {
    type Key = AirplaneSort;

    fn compare(&self, other: &Self, key: AirplaneSort) -> Ordering {
        match key {
            AirplaneSort::Name => compare_text(&self.name, &other.name),
            AirplaneSort::Type => compare_text(&self.airplane_type, &other.airplane_type),
            AirplaneSort::Capacity => self.capacity.cmp(&other.capacity),
        }
    }

    fn matches(&self, query: &str) -> bool {
        contains(&self.name, query) || contains(&self.airplane_type, query)
    }
}

impl Sortable for Destination {
    type Key = DestinationSort;

    fn compare(&self, other: &Self, key: DestinationSort) -> Ordering {
        match key {
            DestinationSort::Country => compare_text(&self.country, &other.country),
            DestinationSort::City => compare_text(&self.city, &other.city),
        }
    }

    fn matches(&self, query: &str) -> bool {
        contains(&self.country, query) || contains(&self.city, query)
    }
}

impl Sortable for Flight {
    type Key = FlightSort;

    fn compare(&self, other: &Self, key: FlightSort) -> Ordering {
        match key {
            FlightSort::Id => self.id.cmp(&other.id),
            FlightSort::Departure => self.departure_time.cmp(&other.departure_time),
            FlightSort::Arrival => self.arrival_time.cmp(&other.arrival_time),
        }
    }

    // Flights carry only ids, so search matches on those.
    fn matches(&self, query: &str) -> bool {
        [
            self.id,
            self.departure_location_id,
            self.arrival_location_id,
            self.airplane_id,
        ]
        .iter()
        .any(|id| id.to_string() == query)
    }
}
