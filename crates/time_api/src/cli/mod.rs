use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::config::{ClockMode, Config};
use crate::core::error::{TimeApiError, TimeApiResult};
use crate::core::utils::parse_rfc3339;
use crate::utils::logging::LogFormat;

/// Time API Server
///
/// A small HTTP server reporting the current instant in several textual
/// representations, plus an OpenAPI description of itself.
///
/// ## Endpoints
/// - `GET /api/time`: Current time as RFC 1123, UNIX seconds and universal formats
/// - `GET /openapi/v1.json`: Generated OpenAPI document
///
/// ## Development
/// ```bash
/// cargo run --bin time-api-server -- --port 8080
/// curl http://127.0.0.1:8080/api/time
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `TIME_API_HOST`, `TIME_API_PORT`: Listen address
/// - `TIME_API_FIXED_TIME`: Pin the clock to an RFC 3339 instant
#[derive(Parser, Debug, Clone)]
#[command(name = "time-api-server")]
#[command(about = "An HTTP server reporting the current time in several formats")]
#[command(version)]
#[command(
    long_about = "An HTTP server exposing GET /api/time, which reports the current instant as RFC 1123, \nUNIX epoch seconds and universal sortable/full strings, together with an OpenAPI document."
)]
pub struct Cli {
    /// IP address to listen on
    #[arg(long, env = "TIME_API_HOST", default_value = "127.0.0.1", value_name = "ADDR")]
    pub host: String,

    /// TCP port to listen on
    #[arg(long, env = "TIME_API_PORT", default_value_t = 5000, value_name = "PORT")]
    pub port: u16,

    /// Serve this RFC 3339 instant instead of reading the system clock
    #[arg(
        long,
        env = "TIME_API_FIXED_TIME",
        value_name = "RFC3339",
        long_help = "Pin the clock to a single instant, e.g. 2024-11-14T17:30:00Z. \nEvery request then reports this instant, which is useful for demos and tests."
    )]
    pub fixed_time: Option<String>,

    /// Log output format
    #[arg(long, env = "TIME_API_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> TimeApiResult<Config> {
        Self::parse().into_config()
    }

    /// Validate the raw arguments and resolve them into a [`Config`]
    pub fn into_config(self) -> TimeApiResult<Config> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| TimeApiError::InvalidConfiguration {
                message: format!("'{}' is not a valid IP address", self.host),
            })?;

        let clock = match self.fixed_time.as_deref() {
            Some(value) => ClockMode::Fixed(parse_rfc3339(value)?),
            None => ClockMode::System,
        };

        Ok(Config {
            address: SocketAddr::new(ip, self.port),
            clock,
            log_format: self.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn config_from(args: &[&str]) -> TimeApiResult<Config> {
        let mut argv = vec!["time-api-server"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.address, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.clock, ClockMode::System);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_custom_address() {
        let config = config_from(&["--host", "0.0.0.0", "--port", "8080"]).unwrap();
        assert_eq!(config.address, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());

        let config = config_from(&["--host", "::1", "--port", "9000"]).unwrap();
        assert_eq!(config.address, "[::1]:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_host() {
        let result = config_from(&["--host", "not-an-ip"]);
        assert!(matches!(
            result,
            Err(TimeApiError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_invalid_port_rejected_by_parser() {
        let result = Cli::try_parse_from(["time-api-server", "--port", "70000"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_time() {
        let config = config_from(&["--fixed-time", "2024-11-14T22:30:00+05:00"]).unwrap();
        let expected = DateTime::parse_from_rfc3339("2024-11-14T22:30:00+05:00").unwrap();

        assert_eq!(config.clock, ClockMode::Fixed(expected));
    }

    #[test]
    fn test_invalid_fixed_time() {
        let result = config_from(&["--fixed-time", "tomorrow"]);
        assert!(matches!(
            result,
            Err(TimeApiError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_log_format() {
        let config = config_from(&["--log-format", "json"]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
