//! Holiday-file configuration.
//!
//! A holiday file is a TOML document:
//!
//! ```toml
//! name = "Serbia 2026"
//! holidays = ["2026-01-01", "2026-01-02"]
//! ```

use std::path::Path;

use dl_core::errors::{Error, Result};
use dl_time::HolidayCalendar;
use serde::{Deserialize, Serialize};

/// On-disk form of a holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFile {
    /// Calendar name; defaults to the file stem when loaded from disk.
    #[serde(default)]
    pub name: Option<String>,
    /// Holiday dates as `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl HolidayFile {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Parse(format!("holiday file: {e}")))
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Parse(format!("holiday file: {e}")))
    }

    /// Build the calendar, validating every entry.
    pub fn into_calendar(self, fallback_name: &str) -> Result<HolidayCalendar> {
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());
        HolidayCalendar::from_iso_strs(name, &self.holidays)
    }
}

impl From<&HolidayCalendar> for HolidayFile {
    fn from(cal: &HolidayCalendar) -> Self {
        Self {
            name: Some(cal.name().to_string()),
            holidays: cal.iter().map(|d| d.to_iso_string()).collect(),
        }
    }
}

/// Load a holiday calendar from a TOML file.
///
/// I/O failures are reported as [`Error::Io`] naming the path.
pub fn load_holiday_file(path: &Path) -> Result<HolidayCalendar> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("holidays");
    let calendar = HolidayFile::from_toml_str(&text)?.into_calendar(stem)?;
    tracing::debug!(
        path = %path.display(),
        name = calendar.name(),
        holidays = calendar.holiday_count(),
        "loaded holiday file"
    );
    Ok(calendar)
}
