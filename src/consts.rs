/// Number of months in a year
pub const MONTH_COUNT: u8 = 12;

/// Number of days in a display week
pub const WEEK_LENGTH: u8 = 7;

/// Zero-based month index for January
pub const JANUARY: u8 = 0;
/// Zero-based month index for February
pub const FEBRUARY: u8 = 1;
/// Zero-based month index for December
pub const DECEMBER: u8 = 11;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month, indexed by zero-based month.
/// February shows 28 days (non-leap year default, adjusted by `is_leap_year`)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Full month names, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated month names, indexed by zero-based month
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Single-letter month names, indexed by zero-based month
pub const MONTH_LETTERS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// Full weekday names, indexed by weekday number (Sunday = 0)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated weekday names, indexed by weekday number (Sunday = 0)
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Single-letter weekday names, indexed by weekday number (Sunday = 0)
pub const WEEKDAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Default day cell edge length in pixels
pub const DEFAULT_DAY_CELL_SIZE: u16 = 30;
/// Advisory lower bound for the day cell size form input
pub const DAY_CELL_SIZE_MIN: u16 = 16;
/// Advisory upper bound for the day cell size form input
pub const DAY_CELL_SIZE_MAX: u16 = 200;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
