//! Command-line front end.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dl_core::errors::Result;
use dl_time::{project_deadline, working_days, Date, HolidayCalendar, Locale};

use crate::adapter::{self, RawInput};
use crate::config::load_holiday_file;

/// Project a completion date forward over working days.
#[derive(Debug, Clone, Parser)]
#[command(name = "deadline", version, about)]
pub struct Cli {
    /// Start date as YYYY-MM-DD; the count starts on the following day.
    /// Defaults to today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<String>,

    /// Number of working days, 1 to 1000.
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub days: Option<String>,

    /// Skip listed holidays as well as weekends.
    #[arg(long)]
    pub holidays: bool,

    /// TOML holiday file; defaults to the built-in Serbia 2026 list.
    #[arg(long, value_name = "PATH")]
    pub holiday_file: Option<PathBuf>,

    /// Language of the output.
    #[arg(long, value_enum, default_value_t = LocaleArg::En)]
    pub locale: LocaleArg,

    /// Also print every day counted as a working day.
    #[arg(long)]
    pub list: bool,

    /// Debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// `--locale` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// English.
    En,
    /// Serbian (Latin).
    Sr,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::English,
            LocaleArg::Sr => Locale::Serbian,
        }
    }
}

impl Cli {
    /// Validate the arguments, project the deadline, and return the text to
    /// print.
    pub fn run(&self) -> Result<String> {
        let locale = Locale::from(self.locale);
        let start = match &self.start {
            Some(s) => s.clone(),
            None => Date::today()?.to_iso_string(),
        };
        let request = adapter::validate(&RawInput {
            start_date: Some(start),
            working_days: self.days.clone(),
            include_holidays: self.holidays,
        })?;

        let calendar = match &self.holiday_file {
            Some(path) => load_holiday_file(path)?,
            None => HolidayCalendar::serbia_2026(),
        };
        tracing::info!(
            start = %request.start_date,
            days = request.required_working_days,
            holidays = request.include_holidays,
            calendar = calendar.name(),
            "calculating deadline"
        );

        let result = project_deadline(&request, &calendar, locale)?;
        let mut out = String::new();
        if self.list {
            let counted = working_days(&request, &calendar)
                .take(request.required_working_days as usize);
            for (i, day) in counted.enumerate() {
                out.push_str(&format!(
                    "{:>4}  {}  {}\n",
                    i + 1,
                    day.to_display_string(),
                    day.weekday().name(locale)
                ));
            }
        }
        out.push_str(&adapter::render(&result, locale).to_string());
        Ok(out)
    }
}
