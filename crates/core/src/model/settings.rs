use thiserror::Error;

/// Seconds allowed per question.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 240;
/// Below this many remaining seconds the countdown is shown as urgent.
pub const DEFAULT_URGENT_THRESHOLD_SECS: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,

    #[error("urgent threshold ({threshold}s) exceeds the time limit ({limit}s)")]
    ThresholdAboveLimit { threshold: u32, limit: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrillSettings {
    time_limit_secs: u32,
    urgent_threshold_secs: u32,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            urgent_threshold_secs: DEFAULT_URGENT_THRESHOLD_SECS,
        }
    }
}

impl DrillSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if the limit is zero or the threshold exceeds it.
    pub fn new(time_limit_secs: u32, urgent_threshold_secs: u32) -> Result<Self, SettingsError> {
        if time_limit_secs == 0 {
            return Err(SettingsError::ZeroTimeLimit);
        }
        if urgent_threshold_secs > time_limit_secs {
            return Err(SettingsError::ThresholdAboveLimit {
                threshold: urgent_threshold_secs,
                limit: time_limit_secs,
            });
        }
        Ok(Self {
            time_limit_secs,
            urgent_threshold_secs,
        })
    }

    /// Settings with a custom time limit. The urgent threshold is clamped so
    /// that it never exceeds the limit.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::ZeroTimeLimit` for a zero limit.
    pub fn with_time_limit(time_limit_secs: u32) -> Result<Self, SettingsError> {
        Self::new(
            time_limit_secs,
            DEFAULT_URGENT_THRESHOLD_SECS.min(time_limit_secs),
        )
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn urgent_threshold_secs(&self) -> u32 {
        self.urgent_threshold_secs
    }

    /// Whole minutes of the time limit, rounded up, for the header target line.
    #[must_use]
    pub fn target_minutes(&self) -> u32 {
        self.time_limit_secs.div_ceil(60)
    }
}
