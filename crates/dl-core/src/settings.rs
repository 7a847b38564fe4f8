//! Global settings.
//!
//! [`Settings`] holds the **evaluation date**, the date that stands in for
//! "today" when a caller does not supply a start date.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Prefer [`ScopedEvaluationDate`] in tests so
//! the previous value is restored when the guard is dropped.

use std::sync::{Mutex, OnceLock};

use crate::Integer;

/// Process-wide settings.
pub struct Settings {
    /// The overriding evaluation date as a day serial (1 = 1900-01-01).
    evaluation_date: Mutex<Option<Integer>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set, meaning the system
    /// clock decides what "today" is.
    pub fn evaluation_date_serial(&self) -> Option<Integer> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: Integer) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// Guard that overrides the evaluation date and restores the previous value
/// on drop.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<Integer>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: Integer) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
