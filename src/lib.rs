mod config;
mod consts;
mod dialog;
mod prelude;
mod span;
mod types;
mod view;
mod week;

pub use config::{CalendarConfig, MonthColumns};
pub use consts::*;
pub use dialog::{ConfigDialog, FormError, FormField};
pub use span::{leading_blank_count, total_month_count, year_list, year_spans, YearSpan};
pub use types::{days_in_month, is_leap_year, Date, Month, Weekday};
pub use view::{CalendarView, GridCell, MonthView, YearView};
pub use week::{dates_in_month, partition_into_weeks, reorder_weekdays, week_end_for, WeekBucket};

use crate::prelude::*;

/// Error type for values arriving from form inputs or stored columns.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    #[display(fmt = "Invalid month index: {} (must be 0-{})", "_0", "MONTH_COUNT - 1")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid weekday: {} (must be 0-{})", "_0", "WEEK_LENGTH - 1")]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid month column count: {_0} (must be one of 1, 2, 3, 4, 6, 12)")]
    InvalidColumnCount(u8),
}

impl std::error::Error for InputError {}

/// The derived layout snapshot for one configuration: the ordered year
/// list, each year's effective month span, the grid's total month count
/// and its leading blank padding.
///
/// This is a pure derivation of [`CalendarConfig`]; recompute it whenever
/// a config field changes. Nothing here is cached between configs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    years: Vec<i32>,
    spans: Vec<YearSpan>,
    month_count: u32,
    leading_blanks: usize,
}

impl Calendar {
    /// Derives the layout from the given configuration.
    ///
    /// An inverted year range produces an empty calendar; an inverted
    /// single-year month range produces a calendar with one year and zero
    /// months. Neither is an error.
    pub fn from_config(config: &CalendarConfig) -> Self {
        let years = span::year_list(config.first_year(), config.last_year());
        let spans = span::year_spans(&years, config.first_month(), config.last_month());
        let month_count = span::total_month_count(&spans);
        let leading_blanks =
            span::leading_blank_count(month_count, config.first_month(), config.month_columns());
        span::log_derived(&years, &spans, month_count, leading_blanks);

        Self {
            years,
            spans,
            month_count,
            leading_blanks,
        }
    }

    /// The years of the range in ascending order
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Effective month spans, one per year in range order
    pub fn spans(&self) -> &[YearSpan] {
        &self.spans
    }

    /// The span for a specific year, if it is in range
    pub fn span_for(&self, year: i32) -> Option<&YearSpan> {
        self.spans.iter().find(|span| span.year() == year)
    }

    /// Total months across the whole range (inverted spans count zero)
    pub const fn month_count(&self) -> u32 {
        self.month_count
    }

    /// Empty cells preceding the first month block in the grid
    pub const fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// True when the range contains no months at all
    pub fn is_empty(&self) -> bool {
        self.month_count == 0
    }
}
