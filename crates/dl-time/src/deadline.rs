//! Deadline projection over working days.
//!
//! Starting from a start date, the cursor advances one calendar day at a time.
//! Each day is classified (see [`crate::classifier`]); weekend days, and
//! holidays when holiday skipping is enabled, leave the remaining count
//! untouched, every other day decrements it.  The cursor value at which the
//! count reaches zero is the deadline.  The start date itself is never
//! counted.

use dl_core::errors::{Error, Result};
use dl_core::{ensure, Natural};
use tracing::{debug, trace};

use crate::classifier::{classify, DayKind};
use crate::date::{Date, FollowingDays};
use crate::holiday_calendar::HolidayCalendar;
use crate::weekday::{Locale, Weekday};

/// Largest accepted number of required working days.
pub const MAX_WORKING_DAYS: Natural = 1000;

/// Check that `count` is in `1..=MAX_WORKING_DAYS`.
pub fn validate_count(count: i64) -> Result<Natural> {
    ensure!(
        (1..=i64::from(MAX_WORKING_DAYS)).contains(&count),
        Error::InvalidCount {
            count,
            max: MAX_WORKING_DAYS
        }
    );
    Ok(count as Natural)
}

/// Inputs of one deadline computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkingDayRequest {
    /// Day the count starts after.
    pub start_date: Date,
    /// Number of working days to count, `1..=MAX_WORKING_DAYS`.
    pub required_working_days: Natural,
    /// Whether listed holidays are skipped like weekend days.
    pub include_holidays: bool,
}

impl WorkingDayRequest {
    /// Build a request, rejecting counts outside `1..=MAX_WORKING_DAYS`.
    pub fn new(start_date: Date, required_working_days: i64, include_holidays: bool) -> Result<Self> {
        Ok(Self {
            start_date,
            required_working_days: validate_count(required_working_days)?,
            include_holidays,
        })
    }

    /// Re-check the count; fields are public and may have been edited.
    pub fn validate(&self) -> Result<()> {
        validate_count(i64::from(self.required_working_days)).map(|_| ())
    }
}

/// A projected deadline with its weekday label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeadlineResult {
    /// The deadline.
    pub date: Date,
    /// Weekday label of `date` in the requested locale.
    pub weekday_name: &'static str,
}

impl DeadlineResult {
    /// Pair `date` with its weekday label in `locale`.
    pub fn new(date: Date, locale: Locale) -> Self {
        Self {
            date,
            weekday_name: date.weekday().name(locale),
        }
    }

    /// Weekday of the deadline.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Lazy sequence of the days counted as working days after a start date.
///
/// Created by [`working_days`].
#[derive(Debug, Clone)]
pub struct WorkingDays<'a> {
    days: FollowingDays,
    calendar: &'a HolidayCalendar,
    include_holidays: bool,
}

impl Iterator for WorkingDays<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        for day in self.days.by_ref() {
            match classify(day, self.calendar, self.include_holidays) {
                DayKind::Working => {
                    trace!(%day, "counted");
                    return Some(day);
                }
                kind => trace!(%day, ?kind, "skipped"),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for WorkingDays<'_> {}

/// Return the days counted as working days after `request.start_date`, in
/// order.
///
/// The sequence ignores `request.required_working_days`; take as many as
/// needed.
pub fn working_days<'a>(request: &WorkingDayRequest, calendar: &'a HolidayCalendar) -> WorkingDays<'a> {
    WorkingDays {
        days: request.start_date.following_days(),
        calendar,
        include_holidays: request.include_holidays,
    }
}

/// Compute the date on which `request.required_working_days` working days
/// have elapsed after `request.start_date`.
///
/// # Errors
/// * [`Error::InvalidCount`] if the count is outside `1..=MAX_WORKING_DAYS`;
///   no day is examined in that case.
/// * [`Error::Date`] if the deadline would fall after [`Date::MAX`].
pub fn calculate_deadline(request: &WorkingDayRequest, calendar: &HolidayCalendar) -> Result<Date> {
    request.validate()?;
    let required = request.required_working_days;
    debug!(
        start = %request.start_date,
        required,
        include_holidays = request.include_holidays,
        calendar = calendar.name(),
        "projecting deadline"
    );

    let deadline = working_days(request, calendar)
        .nth(required as usize - 1)
        .ok_or_else(|| {
            Error::Date(format!(
                "{required} working days after {} falls past {}",
                request.start_date,
                Date::MAX
            ))
        })?;

    debug!(%deadline, "deadline projected");
    Ok(deadline)
}

/// [`calculate_deadline`], with the weekday label in `locale`.
pub fn project_deadline(
    request: &WorkingDayRequest,
    calendar: &HolidayCalendar,
    locale: Locale,
) -> Result<DeadlineResult> {
    calculate_deadline(request, calendar).map(|date| DeadlineResult::new(date, locale))
}
