use std::sync::Arc;

use crate::core::{
    clock::{Clock, SystemClock},
    error::TimeApiResult,
    models::CurrentTime,
};

/// Produces time snapshots from an injected clock
#[derive(Clone)]
pub struct TimeProvider {
    clock: Arc<dyn Clock>,
}

impl TimeProvider {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Read the clock once and format the instant it returns
    pub fn get_current_time(&self) -> TimeApiResult<CurrentTime> {
        let now = self.clock.now()?;
        let snapshot = CurrentTime::from_datetime(&now);

        tracing::debug!(
            timestamp = %snapshot.universal_sortable,
            unix_seconds = snapshot.unix_seconds,
            "Captured time snapshot"
        );
        Ok(snapshot)
    }
}

impl Default for TimeProvider {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
