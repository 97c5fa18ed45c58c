//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A local calendar day with a 1-based month.
pub struct CalendarDate {
    /// Full year.
    pub year: u32,
    /// Month of year, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
}

impl CalendarDate {
    /// Returns whether this date falls on the given month/day, ignoring the year.
    pub const fn is_anniversary_of(self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Snapshot of the host's local wall clock.
pub struct LocalClockReading {
    /// Full year.
    pub year: u32,
    /// Month of year, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
}

impl LocalClockReading {
    /// Reads the host's local clock.
    ///
    /// Native builds have no browser clock and report the unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    /// Returns the calendar day part of this reading.
    pub const fn date(self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn anniversary_ignores_year() {
        let date = CalendarDate {
            year: 2031,
            month: 1,
            day: 31,
        };
        assert!(date.is_anniversary_of(1, 31));
        assert!(!date.is_anniversary_of(1, 30));
        assert!(!date.is_anniversary_of(3, 31));
    }

    #[test]
    fn reading_projects_to_date() {
        let reading = LocalClockReading {
            year: 2024,
            month: 12,
            day: 24,
            hour: 23,
            minute: 59,
            second: 58,
        };
        assert_eq!(
            reading.date(),
            CalendarDate {
                year: 2024,
                month: 12,
                day: 24
            }
        );
    }

    #[test]
    fn unix_clock_is_past_epoch() {
        assert!(unix_time_ms_now() > 0);
    }
}
