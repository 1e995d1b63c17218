//! Wall-clock `HH:mm` times used for opening windows and filters.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validation errors for [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockTimeError {
    /// Input was not two digits, a colon, and two digits.
    #[error("expected HH:mm, got {0:?}")]
    Format(String),
    /// Hour or minute outside the 24-hour clock.
    #[error("time out of range: {0:?}")]
    OutOfRange(String),
}

/// Minute-precision time of day rendered as `HH:mm`.
///
/// Parsing is strict: `7:00`, `07:0` and `07:00:00` are all rejected.
///
/// # Examples
/// ```
/// use backend::domain::places::ClockTime;
///
/// let time: ClockTime = "09:30".parse().expect("valid time");
/// assert_eq!(time.to_string(), "09:30");
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Opening time assumed when a record has none.
    pub const DEFAULT_OPENING: Self = Self::from_hm_const(7, 0);
    /// Closing time assumed when a record has none.
    pub const DEFAULT_CLOSING: Self = Self::from_hm_const(22, 0);

    const fn from_hm_const(hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(time) => Self(time),
            None => Self(NaiveTime::MIN),
        }
    }

    /// Build from hour and minute, rejecting out-of-range values.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Hour component, 0 to 23.
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute component, 0 to 59.
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Underlying `chrono` value, used by the SQL adapter.
    pub fn as_naive(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates seconds so stored `time` columns compare on minutes only.
    fn from(value: NaiveTime) -> Self {
        Self::from_hm(value.hour(), value.minute()).unwrap_or(Self(NaiveTime::MIN))
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bytes = raw.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit);
        if !well_formed {
            return Err(ClockTimeError::Format(raw.to_owned()));
        }
        let digit = |i: usize| u32::from(bytes[i] - b'0');
        let hour = digit(0) * 10 + digit(1);
        let minute = digit(3) * 10 + digit(4);
        Self::from_hm(hour, minute).ok_or_else(|| ClockTimeError::OutOfRange(raw.to_owned()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
