use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts::DEFAULT_DAY_CELL_SIZE;
use crate::types::{Month, Weekday};
use crate::InputError;

/// How many month blocks sit side by side in the grid.
///
/// The set is fixed to the divisors that lay out cleanly over a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MonthColumns {
    One,
    Two,
    Quarter,
    Semester,
    HalfYear,
    FullYear,
}

impl MonthColumns {
    /// All choices in selector order
    pub const ALL: [Self; 6] = [
        Self::One,
        Self::Two,
        Self::Quarter,
        Self::Semester,
        Self::HalfYear,
        Self::FullYear,
    ];

    /// The column count this choice stands for
    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Quarter => 3,
            Self::Semester => 4,
            Self::HalfYear => 6,
            Self::FullYear => 12,
        }
    }

    /// Human-readable selector label
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Two => "Two",
            Self::Quarter => "Quarter",
            Self::Semester => "Semester",
            Self::HalfYear => "Half Year",
            Self::FullYear => "Full Year",
        }
    }
}

impl TryFrom<u8> for MonthColumns {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Quarter),
            4 => Ok(Self::Semester),
            6 => Ok(Self::HalfYear),
            12 => Ok(Self::FullYear),
            other => Err(InputError::InvalidColumnCount(other)),
        }
    }
}

impl From<MonthColumns> for u8 {
    fn from(columns: MonthColumns) -> Self {
        columns.count()
    }
}

impl fmt::Display for MonthColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The single source of truth for the calendar display.
///
/// Every derived value (year list, spans, week buckets, blank padding) is
/// recomputed from this on demand; nothing here is cached or persisted
/// beyond the view session. Mutation goes through the per-field setters
/// only; there is no batch update.
///
/// `first_year <= last_year` is not enforced. A violated range yields an
/// empty year list downstream and renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    first_year: i32,
    last_year: i32,
    first_month: Month,
    last_month: Month,
    day_cell_size: u16,
    has_border: bool,
    is_circled: bool,
    month_columns: MonthColumns,
    first_weekday: Weekday,
}

impl CalendarConfig {
    /// Creates a config spanning the given years, January through December,
    /// with default display options.
    pub const fn new(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
            first_month: Month::JANUARY,
            last_month: Month::DECEMBER,
            day_cell_size: DEFAULT_DAY_CELL_SIZE,
            has_border: true,
            is_circled: true,
            month_columns: MonthColumns::Semester,
            first_weekday: Weekday::SUNDAY,
        }
    }

    /// Creates a config for the current local year only.
    pub fn for_current_year() -> Self {
        let year = chrono::Local::now().year();
        Self::new(year, year)
    }

    /// First year of the range
    #[inline]
    pub const fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year of the range (inclusive)
    #[inline]
    pub const fn last_year(&self) -> i32 {
        self.last_year
    }

    /// First month of the first year
    #[inline]
    pub const fn first_month(&self) -> Month {
        self.first_month
    }

    /// Last month of the last year (inclusive)
    #[inline]
    pub const fn last_month(&self) -> Month {
        self.last_month
    }

    /// Day cell edge length in pixels
    #[inline]
    pub const fn day_cell_size(&self) -> u16 {
        self.day_cell_size
    }

    /// Whether day cells draw an outline
    #[inline]
    pub const fn has_border(&self) -> bool {
        self.has_border
    }

    /// Whether day cells are drawn as circles
    #[inline]
    pub const fn is_circled(&self) -> bool {
        self.is_circled
    }

    /// Month blocks per grid row
    #[inline]
    pub const fn month_columns(&self) -> MonthColumns {
        self.month_columns
    }

    /// Weekday that starts each display week
    #[inline]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn set_first_year(&mut self, year: i32) {
        log::debug!("config: first_year {} -> {year}", self.first_year);
        self.first_year = year;
    }

    pub fn set_last_year(&mut self, year: i32) {
        log::debug!("config: last_year {} -> {year}", self.last_year);
        self.last_year = year;
    }

    pub fn set_first_month(&mut self, month: Month) {
        log::debug!("config: first_month {} -> {month}", self.first_month);
        self.first_month = month;
    }

    pub fn set_last_month(&mut self, month: Month) {
        log::debug!("config: last_month {} -> {month}", self.last_month);
        self.last_month = month;
    }

    pub fn set_day_cell_size(&mut self, size: u16) {
        log::debug!("config: day_cell_size {} -> {size}", self.day_cell_size);
        self.day_cell_size = size;
    }

    pub fn set_has_border(&mut self, has_border: bool) {
        self.has_border = has_border;
    }

    pub fn set_is_circled(&mut self, is_circled: bool) {
        self.is_circled = is_circled;
    }

    pub fn set_month_columns(&mut self, columns: MonthColumns) {
        log::debug!("config: month_columns {} -> {columns}", self.month_columns);
        self.month_columns = columns;
    }

    pub fn set_first_weekday(&mut self, weekday: Weekday) {
        log::debug!("config: first_weekday {} -> {weekday}", self.first_weekday);
        self.first_weekday = weekday;
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::for_current_year()
    }
}
