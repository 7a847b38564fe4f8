//! # dl-time
//!
//! Date, weekday, holiday calendar, and working-day deadline types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekend and holiday classification of single days.
pub mod classifier;

/// `Date` type.
pub mod date;

/// Working-day deadline projection.
pub mod deadline;

/// Caller-supplied holiday set.
pub mod holiday_calendar;

/// Day of the week, and label locales.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use classifier::{classify, is_holiday, is_weekend, is_working_day, DayKind};
pub use date::Date;
pub use deadline::{
    calculate_deadline, project_deadline, working_days, DeadlineResult, WorkingDayRequest,
    MAX_WORKING_DAYS,
};
pub use holiday_calendar::HolidayCalendar;
pub use weekday::{Locale, Weekday};
