//! Day classification: weekend and holiday checks.
//!
//! The two checks are independent.  A holiday that falls on a Saturday is
//! both a weekend day and a holiday; callers only ever ask whether a day is
//! working, so the overlap needs no special treatment.

use crate::date::Date;
use crate::holiday_calendar::HolidayCalendar;

/// How a single day is treated while counting working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Counts toward the required total.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// Listed holiday on a weekday, with holiday skipping enabled.
    Holiday,
}

/// Return `true` if `date` falls on Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    date.weekday().is_weekend()
}

/// Return `true` if `date` is listed in `calendar`.
pub fn is_holiday(date: Date, calendar: &HolidayCalendar) -> bool {
    calendar.contains(date)
}

/// Classify `date`.
///
/// The weekend check wins; the calendar is consulted only when
/// `include_holidays` is set.
pub fn classify(date: Date, calendar: &HolidayCalendar, include_holidays: bool) -> DayKind {
    if is_weekend(date) {
        DayKind::Weekend
    } else if include_holidays && is_holiday(date, calendar) {
        DayKind::Holiday
    } else {
        DayKind::Working
    }
}

/// Return `true` if `date` counts as a working day.
pub fn is_working_day(date: Date, calendar: &HolidayCalendar, include_holidays: bool) -> bool {
    classify(date, calendar, include_holidays) == DayKind::Working
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekend_days() {
        assert!(!is_weekend(date(2026, 1, 2))); // Friday
        assert!(is_weekend(date(2026, 1, 3))); // Saturday
        assert!(is_weekend(date(2026, 1, 4))); // Sunday
        assert!(!is_weekend(date(2026, 1, 5))); // Monday
    }

    #[test]
    fn holiday_membership_ignores_weekday() {
        let cal = HolidayCalendar::serbia_2026();
        assert!(is_holiday(date(2026, 5, 2), &cal)); // Saturday, still listed
        assert!(is_holiday(date(2026, 5, 1), &cal));
        assert!(!is_holiday(date(2026, 5, 4), &cal));
    }

    #[test]
    fn holiday_on_weekend_is_weekend() {
        let cal = HolidayCalendar::serbia_2026();
        assert_eq!(classify(date(2026, 5, 2), &cal, true), DayKind::Weekend);
        assert!(!is_working_day(date(2026, 5, 2), &cal, false));
    }

    #[test]
    fn calendar_consulted_only_when_enabled() {
        let cal = HolidayCalendar::serbia_2026();
        let labour_day = date(2026, 5, 1); // Friday
        assert_eq!(classify(labour_day, &cal, true), DayKind::Holiday);
        assert_eq!(classify(labour_day, &cal, false), DayKind::Working);
        assert!(is_working_day(labour_day, &cal, false));
        assert!(!is_working_day(labour_day, &cal, true));
    }
}
