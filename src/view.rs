use std::fmt;

use crate::config::{CalendarConfig, MonthColumns};
use crate::span::YearSpan;
use crate::types::{Month, Weekday};
use crate::week::{dates_in_month, partition_into_weeks, reorder_weekdays, week_end_for, WeekBucket};
use crate::Calendar;

/// Character width of one day cell in the text renderer
const CELL_WIDTH: usize = 3;
/// Character width of one month block: seven cells plus gaps
const BLOCK_WIDTH: usize = 7 * (CELL_WIDTH + 1) - 1;
/// Gutter between month blocks in a grid row
const BLOCK_GUTTER: &str = "   ";

/// One month of the grid: its reordered weekday header and week rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: Month,
    first_weekday: Weekday,
    header: [Weekday; 7],
    weeks: Vec<WeekBucket>,
}

impl MonthView {
    pub fn new(year: i32, month: Month, first_weekday: Weekday) -> Self {
        let dates = dates_in_month(year, month);
        let weeks = partition_into_weeks(&dates, week_end_for(first_weekday));
        Self {
            year,
            month,
            first_weekday,
            header: reorder_weekdays(first_weekday),
            weeks,
        }
    }

    /// The year this month belongs to
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month being displayed
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Weekday labels in display order, starting from the configured
    /// first weekday
    pub const fn header(&self) -> &[Weekday; 7] {
        &self.header
    }

    /// Week rows in order; the last row may be partial or empty
    pub fn weeks(&self) -> &[WeekBucket] {
        &self.weeks
    }

    /// Grid column (0..7) a date lands in under the configured week start
    pub fn column_of(&self, weekday: Weekday) -> usize {
        usize::from((weekday.get() + 7 - self.first_weekday.get()) % 7)
    }

    /// Renders the month as fixed-width text lines, all `BLOCK_WIDTH` wide.
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{:<BLOCK_WIDTH$}", format!("{} {}", self.year, self.month)),
            self.header
                .iter()
                .map(|day| format!("{:<CELL_WIDTH$}", day.abbreviation()))
                .collect::<Vec<_>>()
                .join(" "),
        ];

        for week in &self.weeks {
            // A trailing empty bucket renders zero cells, so no row at all.
            if week.is_empty() {
                continue;
            }
            let mut cells = vec![format!("{:CELL_WIDTH$}", ""); 7];
            for date in week.iter() {
                cells[self.column_of(date.weekday())] = format!("{:>CELL_WIDTH$}", date.day());
            }
            lines.push(cells.join(" "));
        }
        lines
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// One year's worth of month views, following the year's effective span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    year: i32,
    months: Vec<MonthView>,
}

impl YearView {
    pub fn new(span: &YearSpan, first_weekday: Weekday) -> Self {
        Self {
            year: span.year(),
            months: span
                .months()
                .map(|month| MonthView::new(span.year(), month, first_weekday))
                .collect(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub fn months(&self) -> &[MonthView] {
        &self.months
    }
}

/// One cell of the month grid: a real month block or leading padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<'a> {
    Blank,
    Month(&'a MonthView),
}

/// The fully derived view model: leading blanks plus every month view of
/// the range, flattened in order, along with the display options consumers
/// need to draw day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    columns: MonthColumns,
    leading_blanks: usize,
    years: Vec<YearView>,
    day_cell_size: u16,
    has_border: bool,
    is_circled: bool,
}

impl CalendarView {
    pub fn new(config: &CalendarConfig) -> Self {
        let calendar = Calendar::from_config(config);
        let years = calendar
            .spans()
            .iter()
            .map(|span| YearView::new(span, config.first_weekday()))
            .collect();

        Self {
            columns: config.month_columns(),
            leading_blanks: calendar.leading_blanks(),
            years,
            day_cell_size: config.day_cell_size(),
            has_border: config.has_border(),
            is_circled: config.is_circled(),
        }
    }

    /// Month blocks per grid row
    pub const fn columns(&self) -> MonthColumns {
        self.columns
    }

    /// Empty cells preceding the first month block
    pub const fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    /// The year views in range order
    pub fn years(&self) -> &[YearView] {
        &self.years
    }

    /// Day cell edge length in pixels, for graphical consumers
    pub const fn day_cell_size(&self) -> u16 {
        self.day_cell_size
    }

    /// Whether day cells draw an outline
    pub const fn has_border(&self) -> bool {
        self.has_border
    }

    /// Whether day cells are drawn as circles
    pub const fn is_circled(&self) -> bool {
        self.is_circled
    }

    /// Every grid cell in render order: leading blanks first, then all
    /// month views of the range.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'_>> {
        let months = self
            .years
            .iter()
            .flat_map(|year| year.months().iter().map(GridCell::Month));
        std::iter::repeat_n(GridCell::Blank, self.leading_blanks).chain(months)
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<GridCell<'_>> = self.cells().collect();
        let mut first_row = true;

        for row in cells.chunks(usize::from(self.columns.count())) {
            let blocks: Vec<Vec<String>> = row
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => Vec::new(),
                    GridCell::Month(month) => month.lines(),
                })
                .collect();
            let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

            if !first_row {
                writeln!(f)?;
            }
            first_row = false;

            for line_index in 0..height {
                let line = blocks
                    .iter()
                    .map(|block| {
                        block
                            .get(line_index)
                            .map_or_else(|| format!("{:BLOCK_WIDTH$}", ""), Clone::clone)
                    })
                    .collect::<Vec<_>>()
                    .join(BLOCK_GUTTER);
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}
