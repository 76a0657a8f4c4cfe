use serde::{Deserialize, Serialize};

use crate::config::MonthColumns;
use crate::types::Month;

/// One year of the overall range together with its effective month bounds.
///
/// Interior years always span January..=December; the first and last year of
/// the range are clipped to the configured first/last month. Both clips apply
/// independently, so a single-year range gets exactly the configured bounds,
/// which may be inverted. An inverted span is preserved as-is and simply
/// contributes zero months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearSpan {
    year: i32,
    first_month: Month,
    last_month: Month,
}

impl YearSpan {
    /// Computes the span for `year` within the ordered year list `years`.
    ///
    /// `first_month` applies only when `year` is the first entry of `years`;
    /// `last_month` only when it is the last. `years` not containing `year`
    /// yields a full January..=December span.
    pub fn for_year(year: i32, years: &[i32], first_month: Month, last_month: Month) -> Self {
        let first = if years.first() == Some(&year) {
            first_month
        } else {
            Month::JANUARY
        };
        let last = if years.last() == Some(&year) {
            last_month
        } else {
            Month::DECEMBER
        };
        Self {
            year,
            first_month: first,
            last_month: last,
        }
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the first month covered by this year
    #[inline]
    pub const fn first_month(&self) -> Month {
        self.first_month
    }

    /// Returns the last month covered by this year (inclusive)
    #[inline]
    pub const fn last_month(&self) -> Month {
        self.last_month
    }

    /// Number of months this span covers. Inverted bounds contribute zero
    /// rather than a negative count, so grid-column totals stay valid.
    pub const fn month_count(&self) -> u32 {
        let first = self.first_month.get();
        let last = self.last_month.get();
        if last < first {
            0
        } else {
            (last - first + 1) as u32
        }
    }

    /// Iterates the months covered by this span in order; empty when inverted.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        (self.first_month.get()..=self.last_month.get()).filter_map(|m| Month::new(m).ok())
    }
}

/// All years of the inclusive range `first_year..=last_year`, ascending.
/// Empty when `last_year < first_year`; that is not an error, it just
/// renders nothing.
pub fn year_list(first_year: i32, last_year: i32) -> Vec<i32> {
    (first_year..=last_year).collect()
}

/// Effective month bounds per year for the whole range, in year order.
pub fn year_spans(years: &[i32], first_month: Month, last_month: Month) -> Vec<YearSpan> {
    years
        .iter()
        .map(|&year| YearSpan::for_year(year, years, first_month, last_month))
        .collect()
}

/// Total number of months across all spans, with inverted spans counting
/// as zero.
pub fn total_month_count(spans: &[YearSpan]) -> u32 {
    spans.iter().map(YearSpan::month_count).sum()
}

/// Number of empty cells to insert before the first real month so it lands
/// in its natural column, as if January were always column zero.
///
/// Ranges short enough to fit one grid row get no padding; a lone blank gap
/// in front of two months is just misleading.
pub fn leading_blank_count(
    total_months: u32,
    first_month: Month,
    columns: MonthColumns,
) -> usize {
    let count = u32::from(columns.count());
    if total_months < count {
        return 0;
    }
    (u32::from(first_month.get()) % count) as usize
}

/// Debug-level trace of the derived range state, mirroring each
/// recomputation.
pub(crate) fn log_derived(years: &[i32], spans: &[YearSpan], month_count: u32, blanks: usize) {
    log::debug!(
        "derived range: {} year(s), {} month(s), {} leading blank(s), spans {:?}",
        years.len(),
        month_count,
        blanks,
        spans
            .iter()
            .map(|s| (s.year(), s.first_month().get(), s.last_month().get()))
            .collect::<Vec<_>>()
    );
}
