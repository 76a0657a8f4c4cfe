use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MIN_DAY, MONTH_ABBREVIATIONS, MONTH_COUNT, MONTH_LETTERS,
    MONTH_NAMES, WEEKDAY_ABBREVIATIONS, WEEKDAY_LETTERS, WEEKDAY_NAMES, WEEK_LENGTH,
};
use crate::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based month index guaranteed to be in the range `0..=11`
/// (January = 0, December = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Self = Self(JANUARY);
    pub const DECEMBER: Self = Self(DECEMBER);

    /// Creates a new Month, validating that the index is < `MONTH_COUNT`
    ///
    /// # Errors
    /// Returns `InputError::InvalidMonth` if the index is > 11.
    pub const fn new(index: u8) -> Result<Self, InputError> {
        if index >= MONTH_COUNT {
            return Err(InputError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Returns the zero-based month index as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Full month name, e.g. "January"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// Abbreviated month name, e.g. "Jan"
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.0 as usize]
    }

    /// Single-letter month name, e.g. "J"
    pub const fn letter(self) -> &'static str {
        MONTH_LETTERS[self.0 as usize]
    }

    /// Iterates all twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MONTH_COUNT).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// A weekday number guaranteed to be in the range `0..=6` (Sunday = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Creates a new Weekday, validating that the number is < `WEEK_LENGTH`
    ///
    /// # Errors
    /// Returns `InputError::InvalidWeekday` if the number is > 6.
    pub const fn new(number: u8) -> Result<Self, InputError> {
        if number >= WEEK_LENGTH {
            return Err(InputError::InvalidWeekday(number));
        }
        Ok(Self(number))
    }

    /// Returns the weekday number as u8 (Sunday = 0)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Full weekday name, e.g. "Sunday"
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.0 as usize]
    }

    /// Abbreviated weekday name, e.g. "Sun"
    pub const fn abbreviation(self) -> &'static str {
        WEEKDAY_ABBREVIATIONS[self.0 as usize]
    }

    /// Single-letter weekday name, e.g. "S"
    pub const fn letter(self) -> &'static str {
        WEEKDAY_LETTERS[self.0 as usize]
    }

    /// Iterates all seven weekdays starting from Sunday
    pub fn all() -> impl Iterator<Item = Self> {
        (0..WEEK_LENGTH).map(Self)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// A concrete calendar date with a validated day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u8,
}

impl Date {
    /// Creates a new Date, validating the day against the month's length
    /// (leap years included)
    ///
    /// # Errors
    /// Returns `InputError::InvalidDay` if the day is 0 or past the end of
    /// the month.
    pub const fn new(year: i32, month: Month, day: u8) -> Result<Self, InputError> {
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(InputError::InvalidDay {
                year,
                month: month.get(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day of month (1-based)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day of the week this date falls on, via Sakamoto's method.
    pub const fn weekday(self) -> Weekday {
        // Sakamoto's table assumes January/February belong to the previous year
        const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let mut y = self.year;
        if self.month.get() < 2 {
            y -= 1;
        }
        let raw = y + y / 4 - y / 100 + y / 400
            + OFFSETS[self.month.get() as usize]
            + self.day as i32;
        Weekday(raw.rem_euclid(WEEK_LENGTH as i32) as u8)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based month for human-readable ISO form
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.get() + 1,
            self.day
        )
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 0..12 {
            assert!(Month::new(m).is_ok(), "Month index {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        let result = Month::new(12);
        assert!(matches!(result, Err(InputError::InvalidMonth(12))));

        let result = Month::new(255);
        assert!(matches!(result, Err(InputError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_names() {
        let feb = Month::new(1).unwrap();
        assert_eq!(feb.name(), "February");
        assert_eq!(feb.abbreviation(), "Feb");
        assert_eq!(feb.letter(), "F");
        assert_eq!(feb.to_string(), "Feb");
    }

    #[test]
    fn test_month_consts() {
        assert_eq!(Month::JANUARY.get(), 0);
        assert_eq!(Month::DECEMBER.get(), 11);
        assert_eq!(Month::DECEMBER.name(), "December");
    }

    #[test]
    fn test_month_all() {
        let all: Vec<Month> = Month::all().collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], Month::JANUARY);
        assert_eq!(all[11], Month::DECEMBER);
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 12.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_into_u8() {
        let month = Month::new(8).unwrap();
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        // Out-of-range index is rejected
        let result: Result<Month, _> = serde_json::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_new_valid() {
        for d in 0..7 {
            assert!(Weekday::new(d).is_ok(), "Weekday {d} should be valid");
        }
    }

    #[test]
    fn test_weekday_new_invalid() {
        let result = Weekday::new(7);
        assert!(matches!(result, Err(InputError::InvalidWeekday(7))));
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::SUNDAY.name(), "Sunday");
        assert_eq!(Weekday::WEDNESDAY.abbreviation(), "Wed");
        assert_eq!(Weekday::SATURDAY.letter(), "S");
        assert_eq!(Weekday::FRIDAY.to_string(), "Fri");
    }

    #[test]
    fn test_weekday_serde() {
        let weekday = Weekday::WEDNESDAY;
        let json = serde_json::to_string(&weekday).unwrap();
        assert_eq!(json, "3");

        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(weekday, parsed);

        let result: Result<Weekday, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_date_new_valid() {
        // January - 31 days
        assert!(Date::new(2024, Month::JANUARY, 1).is_ok());
        assert!(Date::new(2024, Month::JANUARY, 31).is_ok());

        // February non-leap - 28 days
        let feb = Month::new(1).unwrap();
        assert!(Date::new(2023, feb, 28).is_ok());
        assert!(Date::new(2023, feb, 29).is_err());

        // February leap year - 29 days
        assert!(Date::new(2024, feb, 29).is_ok());
        assert!(Date::new(2024, feb, 30).is_err());

        // April - 30 days
        let apr = Month::new(3).unwrap();
        assert!(Date::new(2024, apr, 30).is_ok());
        assert!(Date::new(2024, apr, 31).is_err());
    }

    #[test]
    fn test_date_new_invalid_zero() {
        let result = Date::new(2024, Month::JANUARY, 0);
        assert!(matches!(result, Err(InputError::InvalidDay { .. })));
    }

    #[test]
    fn test_date_accessors() {
        let date = Date::new(2024, Month::new(7).unwrap(), 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month().get(), 7);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_date_display() {
        let date = Date::new(2024, Month::new(7).unwrap(), 15).unwrap();
        assert_eq!(date.to_string(), "2024-08-15");
    }

    #[test]
    fn test_weekday_of_known_dates() {
        struct TestCase {
            year: i32,
            month: u8,
            day: u8,
            expected: Weekday,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                month: 1,
                day: 29,
                expected: Weekday::THURSDAY,
                description: "leap day 2024",
            },
            TestCase {
                year: 2024,
                month: 2,
                day: 31,
                expected: Weekday::SUNDAY,
                description: "end of March 2024",
            },
            TestCase {
                year: 2000,
                month: 0,
                day: 1,
                expected: Weekday::SATURDAY,
                description: "start of 2000",
            },
            TestCase {
                year: 2026,
                month: 7,
                day: 28,
                expected: Weekday::FRIDAY,
                description: "an ordinary Friday",
            },
        ];

        for case in &cases {
            let month = Month::new(case.month).unwrap();
            let date = Date::new(case.year, month, case.day).unwrap();
            assert_eq!(
                date.weekday(),
                case.expected,
                "{}: expected {}",
                case.description,
                case.expected.name()
            );
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        // Divisible by 4
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));

        // Century years not divisible by 400
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));

        // Divisible by 400
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month_lengths() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in Month::all() {
            assert_eq!(
                days_in_month(2023, month),
                expected[month.get() as usize],
                "{} has incorrect day count",
                month.name()
            );
        }
    }

    #[test]
    fn test_days_in_month_february_leap() {
        let feb = Month::new(1).unwrap();
        assert_eq!(days_in_month(2024, feb), 29);
        assert_eq!(days_in_month(1900, feb), 28);
        assert_eq!(days_in_month(2000, feb), 29);
    }
}
