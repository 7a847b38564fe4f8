//! `Weekday` day-of-week enum, and the locales its names are rendered in.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

/// Language used for weekday labels and operator-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Serbian, Latin script.
    Serbian,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the weekday label in `locale`.
    pub fn name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => match self {
                Weekday::Monday => "Monday",
                Weekday::Tuesday => "Tuesday",
                Weekday::Wednesday => "Wednesday",
                Weekday::Thursday => "Thursday",
                Weekday::Friday => "Friday",
                Weekday::Saturday => "Saturday",
                Weekday::Sunday => "Sunday",
            },
            Locale::Serbian => match self {
                Weekday::Monday => "Ponedeljak",
                Weekday::Tuesday => "Utorak",
                Weekday::Wednesday => "Sreda",
                Weekday::Thursday => "Četvrtak",
                Weekday::Friday => "Petak",
                Weekday::Saturday => "Subota",
                Weekday::Sunday => "Nedelja",
            },
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Locale::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn only_saturday_and_sunday_are_weekend() {
        let weekend: Vec<Weekday> = (1..=7u8)
            .filter_map(Weekday::from_ordinal)
            .filter(Weekday::is_weekend)
            .collect();
        assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn labels() {
        assert_eq!(Weekday::Thursday.name(Locale::Serbian), "Četvrtak");
        assert_eq!(Weekday::Sunday.name(Locale::Serbian), "Nedelja");
        assert_eq!(Weekday::Monday.to_string(), "Monday");
        assert_eq!(Locale::default(), Locale::English);
    }
}
