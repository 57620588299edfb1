//! Wall-clock access in a fixed time zone
//!
//! Report dates and times are always written in one zone (Europe/London by
//! default), whatever the machine's local zone is. The clock is sampled only
//! when an action asks for "now".

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Date format used in reports (`DD.MM.YYYY`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Time format used in reports (24-hour `HH:MM`)
pub const TIME_FORMAT: &str = "%H:%M";

/// The zone reports are written in unless configured otherwise
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;

/// Source of the current time
pub trait Clock {
    /// Current instant in the report time zone
    fn now(&self) -> DateTime<Tz>;

    /// Current date formatted as `DD.MM.YYYY`
    fn today(&self) -> String {
        format_date(&self.now())
    }

    /// Current time formatted as `HH:MM`
    fn time_of_day(&self) -> String {
        format_time(&self.now())
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }
}

/// System clock read in a fixed zone
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    /// Create a clock for the given zone
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The zone this clock reports in
    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Clock frozen at one instant, for tests and reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    /// Freeze the clock at a UTC instant, viewed in `tz`
    pub fn at(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            instant: instant.with_timezone(&tz),
        }
    }

    /// Freeze the clock at a wall-clock time in London.
    ///
    /// Returns `None` for dates that do not exist or fall in the spring-forward gap.
    pub fn london(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let instant = DEFAULT_TIMEZONE
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()?;
        Some(Self { instant })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant
    }
}

/// Format an instant as a report date
pub fn format_date<T: TimeZone>(instant: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    instant.format(DATE_FORMAT).to_string()
}

/// Format an instant as a report time
pub fn format_time<T: TimeZone>(instant: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    instant.format(TIME_FORMAT).to_string()
}
