//! Clock-time arithmetic for slot filtering.
//!
//! Booking platforms report times as wall-clock strings ("HH:MM",
//! "HH:MM:SS", or a compact "HHMM" token). Everything downstream works in
//! minutes since midnight, so [`ClockTime`] is the single conversion point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, de, ser};
use thiserror::Error;

/// Error returned when a provider time string cannot be interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// The string does not have a recognized shape.
    #[error("malformed clock time {0:?}")]
    Malformed(String),
    /// Hours or minutes fall outside a 24-hour day.
    #[error("clock time out of range {0:?}")]
    OutOfRange(String),
}

/// A wall-clock time expressed as minutes since midnight.
///
/// Valid values are `0..1440`. Serializes as an "HH:MM" string, which is
/// also the display form shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Number of minutes in a day; the exclusive upper bound.
    pub const MINUTES_PER_DAY: u16 = 1440;

    /// Builds a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Parses "HH:MM" or "HH:MM:SS". A seconds field is ignored.
    pub fn from_hhmm(s: &str) -> Result<Self, TimeParseError> {
        let mut parts = s.split(':');
        let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
            return Err(TimeParseError::Malformed(s.to_string()));
        };
        let hours: u16 = hours
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        let minutes: u16 = minutes
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        if hours >= 24 || minutes >= 60 {
            return Err(TimeParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Parses the compact "HHMM" token used by calendar-widget markup.
    ///
    /// Anything but exactly four ASCII digits is rejected.
    pub fn from_compact(s: &str) -> Result<Self, TimeParseError> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::Malformed(s.to_string()));
        }
        let (hours, minutes) = s.split_at(2);
        let hours: u16 = hours
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        let minutes: u16 = minutes
            .parse()
            .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
        if hours >= 24 || minutes >= 60 {
            return Err(TimeParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hhmm(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hhmm(&s).map_err(de::Error::custom)
    }
}

/// The caller-supplied range a slot must fully fit into.
///
/// `end > start` is expected but deliberately not enforced: an inverted
/// window admits nothing instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    /// Required slot start (strict equality, see [`crate::SlotQuery`]).
    pub start: ClockTime,
    /// Latest admissible slot end.
    pub end: ClockTime,
}

impl SearchWindow {
    /// Creates a new search window.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}

/// An existing reservation blocking part of a court's schedule.
///
/// Intervals are half-open: a reservation ending at 11:00 does not block a
/// candidate starting at 11:00. Only [`BusyInterval::new`] constructs one,
/// which keeps inverted ranges out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    start: ClockTime,
    end: ClockTime,
}

impl BusyInterval {
    /// Builds an interval, rejecting empty or inverted ranges.
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Start of the reservation.
    pub fn start(&self) -> ClockTime {
        self.start
    }

    /// End of the reservation (exclusive).
    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Half-open overlap test against a candidate `[start, end)`.
    pub fn overlaps(&self, start: ClockTime, end: ClockTime) -> bool {
        !(self.end <= start || self.start >= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u16, m: u16) -> ClockTime {
        ClockTime::from_minutes(h * 60 + m).unwrap()
    }

    mod clock_time {
        use super::*;

        #[test]
        fn from_minutes_bounds() {
            assert_eq!(ClockTime::from_minutes(0).unwrap().minutes(), 0);
            assert_eq!(ClockTime::from_minutes(1439).unwrap().minutes(), 1439);
            assert!(ClockTime::from_minutes(1440).is_none());
        }

        #[test]
        fn parses_hhmm() {
            assert_eq!(ClockTime::from_hhmm("13:30").unwrap(), at(13, 30));
            assert_eq!(ClockTime::from_hhmm("00:00").unwrap(), at(0, 0));
            assert_eq!(ClockTime::from_hhmm("9:05").unwrap(), at(9, 5));
        }

        #[test]
        fn ignores_seconds() {
            assert_eq!(ClockTime::from_hhmm("13:30:00").unwrap(), at(13, 30));
            assert_eq!(ClockTime::from_hhmm("09:00:59").unwrap(), at(9, 0));
        }

        #[test]
        fn rejects_malformed_hhmm() {
            assert!(matches!(
                ClockTime::from_hhmm("1330"),
                Err(TimeParseError::Malformed(_))
            ));
            assert!(ClockTime::from_hhmm("").is_err());
            assert!(ClockTime::from_hhmm("13").is_err());
            assert!(ClockTime::from_hhmm("ab:cd").is_err());
            assert!(ClockTime::from_hhmm("13:").is_err());
        }

        #[test]
        fn rejects_out_of_range_hhmm() {
            assert!(matches!(
                ClockTime::from_hhmm("24:00"),
                Err(TimeParseError::OutOfRange(_))
            ));
            assert!(ClockTime::from_hhmm("12:60").is_err());
        }

        #[test]
        fn parses_compact_token() {
            assert_eq!(ClockTime::from_compact("1300").unwrap(), at(13, 0));
            assert_eq!(ClockTime::from_compact("1530").unwrap(), at(15, 30));
            assert_eq!(ClockTime::from_compact("0905").unwrap(), at(9, 5));
        }

        #[test]
        fn rejects_non_four_digit_tokens() {
            assert!(ClockTime::from_compact("130").is_err());
            assert!(ClockTime::from_compact("13000").is_err());
            assert!(ClockTime::from_compact("13h0").is_err());
            assert!(ClockTime::from_compact("").is_err());
            assert!(ClockTime::from_compact("2500").is_err());
            assert!(ClockTime::from_compact("1260").is_err());
        }

        #[test]
        fn displays_zero_padded() {
            assert_eq!(at(9, 5).to_string(), "09:05");
            assert_eq!(at(18, 0).to_string(), "18:00");
            assert_eq!(at(0, 0).to_string(), "00:00");
        }

        #[test]
        fn ordering() {
            assert!(at(9, 0) < at(9, 30));
            assert!(at(10, 0) > at(9, 59));
        }

        #[test]
        fn from_str_matches_hhmm() {
            let parsed: ClockTime = "18:00".parse().unwrap();
            assert_eq!(parsed, at(18, 0));
            assert!("18h00".parse::<ClockTime>().is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let time = at(18, 30);
            let json = serde_json::to_string(&time).unwrap();
            assert_eq!(json, "\"18:30\"");
            let parsed: ClockTime = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, time);
        }
    }

    mod busy_interval {
        use super::*;

        #[test]
        fn rejects_inverted_or_empty() {
            assert!(BusyInterval::new(at(10, 0), at(10, 0)).is_none());
            assert!(BusyInterval::new(at(11, 0), at(10, 0)).is_none());
            assert!(BusyInterval::new(at(10, 0), at(11, 0)).is_some());
        }

        #[test]
        fn touching_intervals_do_not_overlap() {
            let busy = BusyInterval::new(at(10, 0), at(11, 0)).unwrap();
            // candidate right after
            assert!(!busy.overlaps(at(11, 0), at(12, 0)));
            // candidate right before
            assert!(!busy.overlaps(at(9, 0), at(10, 0)));
        }

        #[test]
        fn partial_overlap_detected() {
            let busy = BusyInterval::new(at(10, 0), at(11, 0)).unwrap();
            assert!(busy.overlaps(at(10, 30), at(11, 30)));
            assert!(busy.overlaps(at(9, 30), at(10, 30)));
        }

        #[test]
        fn containment_detected_both_ways() {
            let busy = BusyInterval::new(at(10, 0), at(11, 0)).unwrap();
            // busy inside candidate
            assert!(busy.overlaps(at(9, 0), at(12, 0)));
            // candidate inside busy
            assert!(busy.overlaps(at(10, 15), at(10, 45)));
        }
    }
}
