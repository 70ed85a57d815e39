/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive), the largest value a `yyyy` field holds
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Largest valid hour of day
pub const MAX_HOUR: u8 = 23;
/// Largest valid minute of hour
pub const MAX_MINUTE: u8 = 59;
/// Largest valid second of minute
pub const MAX_SECOND: u8 = 59;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Default date separator (`MM/dd/yyyy`)
pub const DEFAULT_SEPARATOR: char = '/';

/// Template token for the two-digit month
pub const MONTH_TOKEN: &str = "MM";
/// Template token for the two-digit day of month
pub const DAY_TOKEN: &str = "dd";
/// Template token for the four-digit year
pub const YEAR_TOKEN: &str = "yyyy";
/// Quote character for literal text inside a template
pub const QUOTE: char = '\'';

/// Template text of `FormatPattern::default()`, the `MM/dd/yyyy` form
pub const DEFAULT_PATTERN: &str = "MM/dd/yyyy";
