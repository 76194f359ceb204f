//! Success/warning/error alert slots shared by all controllers.
//!
//! [`Alerts`] is a cloneable handle injected into every controller, so all
//! views write to the same three slots. Writes are last-write-wins; a slot is
//! emptied only by dismissal or by [`Alerts::clear`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};

/// Snapshot of the three alert slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSlots {
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl AlertSlots {
    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.warning.is_none() && self.error.is_none()
    }
}

/// Shared handle to the alert slots.
#[derive(Debug, Clone, Default)]
pub struct Alerts {
    slots: Arc<Mutex<AlertSlots>>,
}

impl Alerts {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AlertSlots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reports a successful mutation; a stale error is dropped so the two
    /// are never displayed together.
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!("{message}");
        let mut slots = self.lock();
        slots.error = None;
        slots.success = Some(message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.lock().warning = Some(message);
    }

    /// Reports a failed action; a stale success is dropped.
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        error!("{message}");
        let mut slots = self.lock();
        slots.success = None;
        slots.error = Some(message);
    }

    pub fn dismiss_success(&self) {
        self.lock().success = None;
    }

    pub fn dismiss_warning(&self) {
        self.lock().warning = None;
    }

    pub fn dismiss_error(&self) {
        self.lock().error = None;
    }

    /// Empties all slots.
    pub fn clear(&self) {
        *self.lock() = AlertSlots::default();
    }

    /// Current contents of the slots.
    pub fn snapshot(&self) -> AlertSlots {
        self.lock().clone()
    }

    pub fn has_error(&self) -> bool {
        self.lock().error.is_some()
    }
}
