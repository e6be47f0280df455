//! Remaining time until the target, split into display units.

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Non-negative time left, broken into days/hours/minutes/seconds.
///
/// Days are unbounded; the other units are reduced by their natural modulus.
/// Sub-second remainders are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemainingDuration {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingDuration {
    /// Split a signed millisecond difference; anything `<= 0` is zero.
    pub fn from_millis(diff: i64) -> Self {
        if diff <= 0 {
            return Self::default();
        }

        Self {
            days: (diff / MILLIS_PER_DAY) as u64,
            hours: ((diff % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u8,
            minutes: ((diff % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((diff % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Values in display order: days, hours, minutes, seconds.
    pub fn units(&self) -> [u64; 4] {
        [
            self.days,
            self.hours as u64,
            self.minutes as u64,
            self.seconds as u64,
        ]
    }

    /// Whole seconds represented by this duration.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours as u64 * 3_600 + self.minutes as u64 * 60 + self.seconds as u64
    }
}
