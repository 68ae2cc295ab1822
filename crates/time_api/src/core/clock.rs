use chrono::{DateTime, FixedOffset, Utc};

use crate::core::error::TimeApiResult;

/// Source of the current instant.
///
/// Shared across request tasks, so implementations must be readable
/// concurrently without synchronization.
pub trait Clock: Send + Sync {
    /// Returns the current instant. A failure is fatal to the request.
    fn now(&self) -> TimeApiResult<DateTime<FixedOffset>>;
}

/// Wall clock, reported at UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeApiResult<DateTime<FixedOffset>> {
        Ok(Utc::now().fixed_offset())
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeApiResult<DateTime<FixedOffset>> {
        Ok(self.instant)
    }
}
