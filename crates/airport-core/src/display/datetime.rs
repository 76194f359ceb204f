//! DateTime display utilities.
//!
//! Flight times are rendered as `DD.MM.YYYY - h:mm AM/PM`. Formatting only
//! borrows the stored instant, so the canonical value sent back to the server
//! is never replaced by its display string.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// strftime pattern for `DD.MM.YYYY - h:mm AM/PM`.
const FLIGHT_TIME_FORMAT: &str = "%d.%m.%Y - %-I:%M %p";

/// Formats an instant in UTC.
///
/// ```rust
/// use airport_core::display::format_instant;
///
/// let ts = "2023-05-01T14:30:00Z".parse().unwrap();
/// assert_eq!(format_instant(&ts), "01.05.2023 - 2:30 PM");
/// ```
pub fn format_instant(timestamp: &Timestamp) -> String {
    format_instant_in(timestamp, &TimeZone::UTC)
}

/// Formats an instant in the given time zone.
pub fn format_instant_in(timestamp: &Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime(FLIGHT_TIME_FORMAT)
        .to_string()
}

/// A borrowed instant displayed in the flight time format.
///
/// Defaults to UTC; [`FlightTime::in_zone`] selects another zone.
pub struct FlightTime<'a> {
    timestamp: &'a Timestamp,
    tz: Option<&'a TimeZone>,
}

impl<'a> FlightTime<'a> {
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self {
            timestamp,
            tz: None,
        }
    }

    pub fn in_zone(timestamp: &'a Timestamp, tz: &'a TimeZone) -> Self {
        Self {
            timestamp,
            tz: Some(tz),
        }
    }
}

impl fmt::Display for FlightTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tz {
            Some(tz) => f.write_str(&format_instant_in(self.timestamp, tz)),
            None => f.write_str(&format_instant(self.timestamp)),
        }
    }
}
