use crate::config::{CalendarConfig, MonthColumns};
use crate::types::{Month, Weekday};
use crate::InputError;

/// Error type for raw form input arriving at the configuration dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The field requires a number and the input is not one.
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// The input was empty (e.g. a cleared numeric field).
    #[error("Empty input")]
    EmptyInput,

    /// The number parsed but is not a valid value for the field.
    #[error(transparent)]
    InvalidValue(#[from] InputError),
}

/// The editable fields of the configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstYear,
    LastYear,
    FirstMonth,
    LastMonth,
    DayCellSize,
    MonthColumns,
    FirstWeekday,
}

/// State machine behind the modal configuration dialog.
///
/// Owns the shared [`CalendarConfig`] and the dialog's open/closed flag.
/// Opening an already-open dialog or closing an already-closed one is a
/// no-op. Field submissions parse raw form text; when parsing or
/// validation fails the previous value is retained and the error is
/// returned for display, so downstream arithmetic never sees a
/// not-a-number.
#[derive(Debug, Clone, Default)]
pub struct ConfigDialog {
    config: CalendarConfig,
    open: bool,
}

impl ConfigDialog {
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config,
            open: false,
        }
    }

    /// Read access to the shared configuration
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Whether the dialog is currently shown
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the dialog; idempotent.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the dialog; idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Applies one raw form value to its field.
    ///
    /// # Errors
    /// Returns `FormError` and leaves the field unchanged when the input is
    /// empty, non-numeric, or out of range for the field.
    pub fn submit(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FormError::EmptyInput);
        }

        match field {
            FormField::FirstYear => {
                self.config.set_first_year(parse_number(trimmed)?);
            }
            FormField::LastYear => {
                self.config.set_last_year(parse_number(trimmed)?);
            }
            FormField::FirstMonth => {
                let month = Month::new(parse_number(trimmed)?)?;
                self.config.set_first_month(month);
            }
            FormField::LastMonth => {
                let month = Month::new(parse_number(trimmed)?)?;
                self.config.set_last_month(month);
            }
            FormField::DayCellSize => {
                self.config.set_day_cell_size(parse_number(trimmed)?);
            }
            FormField::MonthColumns => {
                let columns = MonthColumns::try_from(parse_number::<u8>(trimmed)?)?;
                self.config.set_month_columns(columns);
            }
            FormField::FirstWeekday => {
                let weekday = Weekday::new(parse_number(trimmed)?)?;
                self.config.set_first_weekday(weekday);
            }
        }
        Ok(())
    }

    /// Flips the day-cell border option.
    pub fn toggle_border(&mut self) {
        let flipped = !self.config.has_border();
        self.config.set_has_border(flipped);
    }

    /// Flips the circular day-cell option.
    pub fn toggle_circled(&mut self) {
        let flipped = !self.config.is_circled();
        self.config.set_is_circled(flipped);
    }

    /// Options for the month selector: (index, name) per month.
    pub fn month_options() -> impl Iterator<Item = (u8, &'static str)> {
        Month::all().map(|month| (month.get(), month.name()))
    }

    /// Options for the column-count selector: (count, label) per choice.
    pub fn column_options() -> impl Iterator<Item = (u8, &'static str)> {
        MonthColumns::ALL
            .into_iter()
            .map(|choice| (choice.count(), choice.label()))
    }

    /// Options for the first-weekday selector: (number, name) per weekday.
    pub fn weekday_options() -> impl Iterator<Item = (u8, &'static str)> {
        Weekday::all().map(|weekday| (weekday.get(), weekday.name()))
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, FormError> {
    raw.parse()
        .map_err(|_| FormError::NotANumber(raw.to_owned()))
}
