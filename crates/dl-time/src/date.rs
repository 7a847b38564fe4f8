//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch, which
//! makes equality, ordering, and day-by-day stepping trivial.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//!
//! # Text forms
//! * `YYYY-MM-DD` is the interchange form used by holiday lists
//!   ([`Date::to_iso_string`], [`FromStr`]).
//! * `DD.MM.YYYY` is the display form ([`Date::to_display_string`]).

use std::str::FromStr;

use chrono::Datelike;
use dl_core::errors::{Error, Result};
use dl_core::{ensure, Integer, Settings};

use crate::weekday::Weekday;

/// A calendar date with no time-of-day component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Integer);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: Integer) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            ))
        );
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1900..=2199).contains(&year),
            Error::Date(format!("year {year} out of range [1900, 2199]"))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::Date(format!("month {month} out of range [1, 12]"))
        );
        let days_in = days_in_month(year, month);
        ensure!(
            day != 0 && day <= days_in,
            Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            ))
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Return the current evaluation date.
    ///
    /// Honours the override in [`Settings`]; otherwise reads the local
    /// calendar date from the system clock.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Date::from_serial(serial),
            None => Date::try_from(chrono::Local::now().date_naive()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> Integer {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Integer) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} overflows")))
            .and_then(|serial| {
                Date::from_serial(serial).map_err(|_| {
                    Error::Date(format!("date arithmetic: {self} + {n} out of range"))
                })
            })
    }

    /// Return the next calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> Integer {
        other.0 - self.0
    }

    /// Lazy sequence of the calendar days strictly after `self`, in order.
    ///
    /// The sequence ends after [`Date::MAX`].
    pub fn following_days(self) -> FollowingDays {
        FollowingDays { cursor: self }
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Format as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// Format as `DD.MM.YYYY`.
    pub fn to_display_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{d:02}.{m:02}.{y:04}")
    }
}

// ── Day sequence ──────────────────────────────────────────────────────────────

/// Iterator over successive calendar days; see [`Date::following_days`].
#[derive(Debug, Clone)]
pub struct FollowingDays {
    cursor: Date,
}

impl Iterator for FollowingDays {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.cursor >= Date::MAX {
            return None;
        }
        self.cursor = Date(self.cursor.0 + 1);
        Some(self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (Date::MAX.0 - self.cursor.0).max(0) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FollowingDays {}

impl std::iter::FusedIterator for FollowingDays {}

// ── Operators and conversions ─────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = Integer;
    fn sub(self, rhs: Date) -> Integer {
        self.0 - rhs.0
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse the strict `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Parse(format!("'{s}' is not a YYYY-MM-DD date"));
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let all_digits = |p: &str, len: usize| p.len() == len && p.bytes().all(|b| b.is_ascii_digit());
        ensure!(
            all_digits(y, 4) && all_digits(m, 2) && all_digits(d, 2),
            bad()
        );
        let year: u16 = y.parse().map_err(|_| bad())?;
        let month: u8 = m.parse().map_err(|_| bad())?;
        let day: u8 = d.parse().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1900, 2199]", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> Integer {
    let y = year as Integer;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1901, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as Integer;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as Integer
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: Integer) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as Integer;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(2199, 12, 31), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2026, 1, 1),
            (2026, 12, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let dt = date(y, m, d);
            assert_eq!(dt.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(Date::from_ymd(2026, 2, 29), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2026, 13, 1), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(2026, 4, 0), Err(Error::Date(_))));
        assert!(matches!(Date::from_ymd(1899, 12, 31), Err(Error::Date(_))));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2026, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2026, 1, 3).weekday(), Weekday::Saturday);
        assert_eq!(date(2026, 1, 4).weekday(), Weekday::Sunday);
        assert_eq!(date(2026, 5, 1).weekday(), Weekday::Friday);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2026, 1, 31);
        assert_eq!(d.succ().unwrap(), date(2026, 2, 1));
        assert_eq!(d.add_days(-31).unwrap(), date(2025, 12, 31));
        assert_eq!(date(2026, 3, 1) - date(2026, 2, 1), 28);
        assert_eq!(date(2026, 2, 1).days_between(date(2026, 3, 1)), 28);
        assert!(Date::MAX.succ().is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MIN.add_days(Integer::MAX).is_err());
    }

    #[test]
    fn test_following_days() {
        let days: Vec<Date> = date(2026, 12, 30).following_days().take(3).collect();
        assert_eq!(days, vec![date(2026, 12, 31), date(2027, 1, 1), date(2027, 1, 2)]);

        let tail: Vec<Date> = date(2199, 12, 30).following_days().collect();
        assert_eq!(tail, vec![Date::MAX]);
        assert_eq!(Date::MAX.following_days().next(), None);
        assert_eq!(date(2199, 12, 29).following_days().len(), 2);
    }

    #[test]
    fn test_text_forms() {
        let d = date(2026, 5, 6);
        assert_eq!(d.to_iso_string(), "2026-05-06");
        assert_eq!(d.to_display_string(), "06.05.2026");
        assert_eq!(d.to_string(), "2026-05-06");
        assert_eq!(format!("{d:?}"), "Date(2026-05-06)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2026-01-02".parse::<Date>().unwrap(), date(2026, 1, 2));
        for bad in ["", "2026-1-02", "2026-01-2", "02.01.2026", "2026-01-02-03", "20a6-01-02", " 2026-01-02"] {
            assert!(
                matches!(bad.parse::<Date>(), Err(Error::Parse(_))),
                "'{bad}' should not parse"
            );
        }
        assert!(matches!("2026-02-30".parse::<Date>(), Err(Error::Date(_))));
    }

    #[test]
    fn test_from_chrono() {
        let naive = chrono::NaiveDate::from_ymd_opt(2026, 11, 11).unwrap();
        assert_eq!(Date::try_from(naive).unwrap(), date(2026, 11, 11));
        let early = chrono::NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
        assert!(Date::try_from(early).is_err());
    }
}
