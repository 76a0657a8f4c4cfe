use crate::consts::WEEK_LENGTH;
use crate::prelude::*;
use crate::types::{days_in_month, Date, Month, Weekday};

/// One display week row of a month: consecutive dates delimited by the
/// configured end-of-week day. The last bucket of a month may be partial,
/// or empty when the month's final date lands exactly on the week-end day;
/// renderers emit zero cells for an empty bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref)]
pub struct WeekBucket(Vec<Date>);

impl WeekBucket {
    fn push(&mut self, date: Date) {
        self.0.push(date);
    }
}

/// All dates of the given month in order. Always 28..=31 entries; leap-year
/// handling comes from date validation, not from special cases here.
pub fn dates_in_month(year: i32, month: Month) -> Vec<Date> {
    (1..=days_in_month(year, month))
        .filter_map(|day| Date::new(year, month, day).ok())
        .collect()
}

/// Splits `dates` into week buckets, closing a bucket after each date that
/// falls on `week_end`.
///
/// Concatenating the buckets reproduces `dates` exactly, in order. Only the
/// final bucket can be empty.
pub fn partition_into_weeks(dates: &[Date], week_end: Weekday) -> Vec<WeekBucket> {
    let mut buckets = vec![WeekBucket::default()];
    for &date in dates {
        // Bucket list is never empty by construction.
        if let Some(current) = buckets.last_mut() {
            current.push(date);
        }
        if date.weekday() == week_end {
            buckets.push(WeekBucket::default());
        }
    }
    buckets
}

/// The seven weekdays rotated left so `first` leads the week.
pub fn reorder_weekdays(first: Weekday) -> [Weekday; 7] {
    let mut ordered = [Weekday::SUNDAY; 7];
    for (offset, slot) in ordered.iter_mut().enumerate() {
        let number = (u32::from(first.get()) + offset as u32) % u32::from(WEEK_LENGTH);
        // Modular arithmetic keeps the number in 0..7.
        if let Ok(weekday) = Weekday::new(number as u8) {
            *slot = weekday;
        }
    }
    ordered
}

/// The day that ends a week starting on `first`: `(first + 6) mod 7`.
pub fn week_end_for(first: Weekday) -> Weekday {
    let number = (first.get() + WEEK_LENGTH - 1) % WEEK_LENGTH;
    Weekday::new(number).unwrap_or(Weekday::SATURDAY)
}
