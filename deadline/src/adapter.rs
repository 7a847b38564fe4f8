//! Input adapter between raw operator input and the deadline core.
//!
//! Raw values arrive as optional text (a form field, a CLI argument).  They
//! are validated into a [`WorkingDayRequest`] before the core runs, and the
//! outcome is rendered back into display lines or an operator message.

use dl_core::errors::{Error, Result};
use dl_time::deadline::validate_count;
use dl_time::{Date, DeadlineResult, Locale, WorkingDayRequest};

/// Unvalidated operator input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// Start date as `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Required working days as decimal text.
    pub working_days: Option<String>,
    /// Whether listed holidays are skipped.
    pub include_holidays: bool,
}

/// Display lines for a projected deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// e.g. `"Deadline: 05.01.2026"`.
    pub date_line: String,
    /// e.g. `"Weekday: Monday"`.
    pub weekday_line: String,
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.date_line, self.weekday_line)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Read a leading decimal integer, ignoring anything after the digits.
fn leading_integer(s: &str) -> Option<i64> {
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate so absurdly long inputs still fail the count check.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Validate raw input into a request.
///
/// # Errors
/// * [`Error::MissingInput`] if the start date or count is absent, blank, or
///   unreadable.
/// * [`Error::InvalidCount`] if the count is not in `1..=1000`.
pub fn validate(raw: &RawInput) -> Result<WorkingDayRequest> {
    let start_text =
        non_empty(&raw.start_date).ok_or_else(|| Error::MissingInput("start date".into()))?;
    let count_text =
        non_empty(&raw.working_days).ok_or_else(|| Error::MissingInput("working days".into()))?;

    let start_date = start_text
        .parse::<Date>()
        .map_err(|e| Error::MissingInput(format!("start date ({e})")))?;
    let count = leading_integer(count_text).ok_or_else(|| {
        Error::MissingInput(format!("working days ('{count_text}' is not a number)"))
    })?;

    Ok(WorkingDayRequest {
        start_date,
        required_working_days: validate_count(count)?,
        include_holidays: raw.include_holidays,
    })
}

/// Render a projected deadline as two display lines.
pub fn render(result: &DeadlineResult, locale: Locale) -> Rendered {
    let (date_label, weekday_label) = match locale {
        Locale::English => ("Deadline:", "Weekday:"),
        Locale::Serbian => ("Rok završetka je:", "Dan u nedelji:"),
    };
    Rendered {
        date_line: format!("{date_label} {}", result.date.to_display_string()),
        weekday_line: format!("{weekday_label} {}", result.weekday_name),
    }
}

/// Operator-facing message for `err`.
pub fn error_message(err: &Error, locale: Locale) -> String {
    match locale {
        Locale::English => match err {
            Error::MissingInput(what) if what.starts_with("start date") => {
                "Please enter a start date.".to_string()
            }
            Error::MissingInput(_) => "Please enter the number of working days.".to_string(),
            Error::InvalidCount { count, max } if *count > i64::from(*max) => {
                format!("The number of working days is too large. Enter at most {max}.")
            }
            Error::InvalidCount { .. } => {
                "The number of working days must be greater than 0.".to_string()
            }
            Error::Io { path, reason } => {
                format!("Cannot read the holiday file {path}: {reason}.")
            }
            Error::Date(detail) => format!("Invalid date: {detail}."),
            Error::Parse(detail) => format!("Invalid input: {detail}."),
        },
        Locale::Serbian => match err {
            Error::MissingInput(what) if what.starts_with("start date") => {
                "Molimo unesite početni datum.".to_string()
            }
            Error::MissingInput(_) => "Molimo unesite broj radnih dana.".to_string(),
            Error::InvalidCount { count, max } if *count > i64::from(*max) => {
                "Broj radnih dana je prevelik. Unesite manji broj.".to_string()
            }
            Error::InvalidCount { .. } => "Broj radnih dana mora biti veći od 0.".to_string(),
            Error::Io { path, .. } => format!("Nije moguće pročitati datoteku praznika {path}."),
            Error::Date(_) => {
                "Datum nije ispravan ili je van podržanog opsega (01.01.1900. do 31.12.2199.)."
                    .to_string()
            }
            Error::Parse(what) if what.starts_with("holiday file") => {
                "Datoteka praznika nije ispravan TOML dokument.".to_string()
            }
            Error::Parse(what) if what.starts_with("holiday entry") => {
                "Datumi u datoteci praznika moraju biti u obliku GGGG-MM-DD.".to_string()
            }
            Error::Parse(_) => "Datum mora biti u obliku GGGG-MM-DD.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start: Option<&str>, days: Option<&str>) -> RawInput {
        RawInput {
            start_date: start.map(String::from),
            working_days: days.map(String::from),
            include_holidays: true,
        }
    }

    #[test]
    fn valid_input() {
        let req = validate(&raw(Some("2026-01-01"), Some(" 10 "))).unwrap();
        assert_eq!(req.start_date, Date::from_ymd(2026, 1, 1).unwrap());
        assert_eq!(req.required_working_days, 10);
        assert!(req.include_holidays);
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            validate(&raw(None, Some("5"))),
            Err(Error::MissingInput("start date".into()))
        );
        assert_eq!(
            validate(&raw(Some("2026-01-01"), Some("   "))),
            Err(Error::MissingInput("working days".into()))
        );
        assert!(matches!(
            validate(&raw(Some("01.01.2026"), Some("5"))),
            Err(Error::MissingInput(_))
        ));
        assert!(matches!(
            validate(&raw(Some("2026-01-01"), Some("abc"))),
            Err(Error::MissingInput(_))
        ));
    }

    #[test]
    fn leading_digits_are_read() {
        assert_eq!(leading_integer("12abc"), Some(12));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("7.5"), Some(7));
        assert_eq!(leading_integer("x7"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn count_out_of_range() {
        assert_eq!(
            validate(&raw(Some("2026-01-01"), Some("0"))),
            Err(Error::InvalidCount { count: 0, max: 1000 })
        );
        assert_eq!(
            validate(&raw(Some("2026-01-01"), Some("1001"))),
            Err(Error::InvalidCount {
                count: 1001,
                max: 1000
            })
        );
        assert!(validate(&raw(Some("2026-01-01"), Some("1000"))).is_ok());
    }

    #[test]
    fn rendering() {
        let result = DeadlineResult::new(Date::from_ymd(2026, 1, 5).unwrap(), Locale::Serbian);
        let sr = render(&result, Locale::Serbian);
        assert_eq!(sr.date_line, "Rok završetka je: 05.01.2026");
        assert_eq!(sr.weekday_line, "Dan u nedelji: Ponedeljak");

        let result = DeadlineResult::new(Date::from_ymd(2026, 1, 5).unwrap(), Locale::English);
        assert_eq!(
            render(&result, Locale::English).to_string(),
            "Deadline: 05.01.2026\nWeekday: Monday"
        );
    }

    #[test]
    fn messages() {
        let too_big = Error::InvalidCount {
            count: 1001,
            max: 1000,
        };
        assert_eq!(
            error_message(&too_big, Locale::Serbian),
            "Broj radnih dana je prevelik. Unesite manji broj."
        );
        assert_eq!(
            error_message(&Error::InvalidCount { count: -1, max: 1000 }, Locale::English),
            "The number of working days must be greater than 0."
        );
        assert_eq!(
            error_message(&Error::MissingInput("start date".into()), Locale::Serbian),
            "Molimo unesite početni datum."
        );
        assert_eq!(
            error_message(&Error::Parse("bad".into()), Locale::English),
            "Invalid input: bad."
        );
    }

    #[test]
    fn unreadable_holiday_file_names_the_file() {
        let err = Error::Io {
            path: "/nonexistent/h.toml".into(),
            reason: "No such file or directory (os error 2)".into(),
        };
        assert_eq!(
            error_message(&err, Locale::English),
            "Cannot read the holiday file /nonexistent/h.toml: No such file or directory (os error 2)."
        );
        assert_eq!(
            error_message(&err, Locale::Serbian),
            "Nije moguće pročitati datoteku praznika /nonexistent/h.toml."
        );
    }

    #[test]
    fn serbian_date_and_parse_messages() {
        assert_eq!(
            error_message(&Error::Date("past 2199-12-31".into()), Locale::Serbian),
            "Datum nije ispravan ili je van podržanog opsega (01.01.1900. do 31.12.2199.)."
        );
        assert_eq!(
            error_message(
                &Error::Parse("holiday entry '16.03.2026' is not YYYY-MM-DD".into()),
                Locale::Serbian
            ),
            "Datumi u datoteci praznika moraju biti u obliku GGGG-MM-DD."
        );
        assert_eq!(
            error_message(&Error::Parse("holiday file: expected `=`".into()), Locale::Serbian),
            "Datoteka praznika nije ispravan TOML dokument."
        );
        assert_eq!(
            error_message(&Error::Parse("'x' is not a YYYY-MM-DD date".into()), Locale::Serbian),
            "Datum mora biti u obliku GGGG-MM-DD."
        );
    }
}
