//! Holiday calendar: a named, finite set of literal non-working dates.

use std::collections::BTreeSet;

use dl_core::errors::{Error, Result};

use crate::date::Date;

/// A set of holiday dates supplied by the caller.
///
/// Membership is all that matters: inserting a date twice leaves a single
/// entry.  Weekends are not stored here; they are classified independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Create an empty calendar with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from `YYYY-MM-DD` literals.
    ///
    /// Fails on the first entry that is not a valid date.
    pub fn from_iso_strs<I, S>(name: impl Into<String>, dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cal = Self::new(name);
        for entry in dates {
            let entry = entry.as_ref();
            let date = entry.parse::<Date>().map_err(|e| match e {
                Error::Parse(_) => Error::Parse(format!("holiday entry '{entry}' is not YYYY-MM-DD")),
                other => other,
            })?;
            cal.add_holiday(date);
        }
        Ok(cal)
    }

    /// The Serbian state holidays of 2026.
    pub fn serbia_2026() -> Self {
        let mut cal = Self::new("Serbia 2026");
        for (m, d) in SERBIA_2026 {
            if let Ok(date) = Date::from_ymd(2026, m, d) {
                cal.add_holiday(date);
            }
        }
        cal
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a holiday.  Returns `false` if the date was already present.
    pub fn add_holiday(&mut self, date: Date) -> bool {
        self.holidays.insert(date)
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) -> bool {
        self.holidays.remove(&date)
    }

    /// Return `true` if `date` is listed.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Return the number of distinct holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate the holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Extend<Date> for HolidayCalendar {
    fn extend<T: IntoIterator<Item = Date>>(&mut self, iter: T) {
        self.holidays.extend(iter);
    }
}

/// (month, day) pairs of the 2026 Serbian state holidays.
const SERBIA_2026: [(u8, u8); 10] = [
    (1, 1),   // New Year
    (1, 2),   // New Year
    (1, 7),   // Orthodox Christmas
    (2, 15),  // Statehood Day
    (2, 16),  // Statehood Day
    (4, 17),  // Orthodox Good Friday
    (4, 20),  // Orthodox Easter Monday
    (5, 1),   // Labour Day
    (5, 2),   // Labour Day
    (11, 11), // Armistice Day
];
