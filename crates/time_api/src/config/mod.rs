use std::{net::SocketAddr, sync::Arc};

use chrono::{DateTime, FixedOffset};

use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::utils::logging::LogFormat;

/// Where the server reads the current instant from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    System,
    Fixed(DateTime<FixedOffset>),
}

impl ClockMode {
    pub fn into_clock(self) -> Arc<dyn Clock> {
        match self {
            ClockMode::System => Arc::new(SystemClock),
            ClockMode::Fixed(instant) => Arc::new(FixedClock::new(instant)),
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub address: SocketAddr,
    pub clock: ClockMode,
    pub log_format: LogFormat,
}
