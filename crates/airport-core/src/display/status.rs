//! Alert banner shown above every view.

use std::fmt;

use crate::alerts::AlertSlots;

/// Renders the non-empty alert slots, one line each.
pub struct AlertBanner<'a>(pub &'a AlertSlots);

impl fmt::Display for AlertBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.0.success {
            writeln!(f, "**Success:** {message}")?;
        }
        if let Some(message) = &self.0.warning {
            writeln!(f, "**Warning:** {message}")?;
        }
        if let Some(message) = &self.0.error {
            writeln!(f, "**Error:** {message}")?;
        }
        Ok(())
    }
}
