//! # deadline
//!
//! Project a completion date forward from a start date over a required number
//! of working days, skipping weekends and, optionally, listed holidays.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the operator-facing layer: input validation, holiday files, and the CLI.
//!
//! ## Quick start
//!
//! ```rust
//! use deadline::time::{calculate_deadline, Date, HolidayCalendar, WorkingDayRequest};
//!
//! let holidays = HolidayCalendar::from_iso_strs("Office", ["2026-01-02"]).unwrap();
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! let request = WorkingDayRequest::new(start, 1, true).unwrap();
//! let due = calculate_deadline(&request, &holidays).unwrap();
//! assert_eq!(due.to_display_string(), "05.01.2026");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, error type, and settings.
pub use dl_core as core;

/// Dates, holiday calendars, and deadline projection.
pub use dl_time as time;

/// Raw input validation and result rendering.
pub mod adapter;

/// Command-line front end.
pub mod cli;

/// Holiday-file loading.
pub mod config;

/// Logging setup.
pub mod logger;
