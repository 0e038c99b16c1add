use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

/// Wall-clock fields for one frame, taken after the clock's offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTime {
    /// 0..=23
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl RenderTime {
    pub const fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    pub const fn hours12(&self) -> u32 {
        self.hours % 12
    }

    pub const fn is_pm(&self) -> bool {
        self.hours >= 12
    }
}

/// Shifts `instant` by a fixed offset and reads the calendar fields in `host_zone`.
///
/// This is a plain numeric offset from host time. No timezone database is
/// consulted, so there is no DST handling for the clock's city.
pub fn compute_local_time<Tz: TimeZone>(instant: DateTime<Utc>, offset_minutes: i32, host_zone: &Tz) -> RenderTime {
    let shifted = instant
        .checked_add_signed(Duration::minutes(i64::from(offset_minutes)))
        .unwrap_or(if offset_minutes < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
    let local = shifted.with_timezone(host_zone);

    RenderTime {
        hours: local.hour(),
        minutes: local.minute(),
        seconds: local.second(),
        // leap seconds report nanoseconds past 1e9
        milliseconds: (local.nanosecond() / 1_000_000).min(999),
    }
}
