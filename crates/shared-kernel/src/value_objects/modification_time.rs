// crates/shared-kernel/src/value_objects/modification_time.rs
use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Display layout for modification timestamps (local time, minute precision).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// File modification time as fractional seconds since the Unix epoch.
///
/// Times before the epoch are negative. The raw value is only used for
/// ordering and window checks; humans see [`ModificationTime::display_local`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(f64);

impl ModificationTime {
    pub const fn from_secs_f64(secs: f64) -> Self {
        Self(secs)
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(after.as_secs_f64()),
            Err(before) => Self(-before.duration().as_secs_f64()),
        }
    }

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub const fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// Seconds elapsed between `self` and `now` (negative for future times).
    pub fn age_at(self, now: Self) -> f64 {
        now.0 - self.0
    }

    pub fn to_local(self) -> Option<DateTime<Local>> {
        let secs = self.0.floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = ((self.0 - secs) * 1e9) as u32;
        #[allow(clippy::cast_possible_truncation)]
        DateTime::<Utc>::from_timestamp(secs as i64, nanos).map(|utc| utc.with_timezone(&Local))
    }

    pub fn display_local(self) -> String {
        self.to_local().map(|dt| dt.format(DISPLAY_FORMAT).to_string()).unwrap_or_default()
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_local())
    }
}
