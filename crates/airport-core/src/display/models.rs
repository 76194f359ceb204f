//! Display implementations for domain models.
//!
//! Each entity renders as a markdown detail block: a header with id and name
//! followed by a metadata list.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::FlightTime;
use crate::models::{Airplane, Destination, Flight, Steward};

impl fmt::Display for Steward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.full_name())?;
        writeln!(f)?;
        writeln!(f, "- First name: {}", self.first_name)?;
        writeln!(f, "- Surname: {}", self.surname)
    }
}

impl fmt::Display for Airplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.airplane_type)?;
        writeln!(f, "- Capacity: {}", self.capacity)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}, {}", self.id, self.city, self.country)?;
        writeln!(f)?;
        writeln!(f, "- Country: {}", self.country)?;
        writeln!(f, "- City: {}", self.city)
    }
}

/// A flight rendered with its times in a chosen zone.
pub struct FlightDetail<'a> {
    pub flight: &'a Flight,
    pub tz: &'a TimeZone,
}

impl fmt::Display for FlightDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flight = self.flight;
        writeln!(f, "# Flight {}", flight.id)?;
        writeln!(f)?;
        writeln!(f, "- From: destination {}", flight.departure_location_id)?;
        writeln!(f, "- To: destination {}", flight.arrival_location_id)?;
        writeln!(
            f,
            "- Departure: {}",
            FlightTime::in_zone(&flight.departure_time, self.tz)
        )?;
        writeln!(
            f,
            "- Arrival: {}",
            FlightTime::in_zone(&flight.arrival_time, self.tz)
        )?;
        writeln!(f, "- Airplane: {}", flight.airplane_id)?;
        if flight.steward_ids.is_empty() {
            writeln!(f, "- Crew: none assigned")
        } else {
            let crew: Vec<String> = flight.steward_ids.iter().map(ToString::to_string).collect();
            writeln!(f, "- Crew: {}", crew.join(", "))
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            FlightDetail {
                flight: self,
                tz: &TimeZone::UTC,
            }
        )
    }
}
