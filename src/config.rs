use crate::cli::Args;
use crate::dns::DnsRecordType;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse interval: {0}")]
    InvalidInterval(String),
    #[error("Interval must be a positive number of seconds, got {0}")]
    NonPositiveInterval(String),
    #[error("Invalid record type: {0}. Use 'A' or 'AAAA'.")]
    InvalidRecordType(String),
    #[error("Interval is too large to schedule, got {0}")]
    IntervalOutOfRange(String),
    #[error("Timeout must be a positive number of seconds, got {0}")]
    NonPositiveTimeout(f64),
    #[error("Timeout is too large to schedule, got {0}")]
    TimeoutOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SecondsError {
    NotPositive,
    OutOfRange,
}

/// How the probe loop decides when to fire and when to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// Fire every interval, first one interval after start; stop once `timeout` has passed.
    Bounded { timeout: Duration },
    /// Fire immediately, then every interval, forever.
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPrecision {
    Seconds,
    Millis,
}

impl TimestampPrecision {
    /// chrono format string: `Jan  2 15:04:05`, optionally with `.000`.
    pub fn format(self) -> &'static str {
        match self {
            Self::Seconds => "%b %e %H:%M:%S",
            Self::Millis => "%b %e %H:%M:%S%.3f",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub domain: String,
    pub interval: Duration,
    pub filter: Option<DnsRecordType>,
    pub schedule: ScheduleMode,
    pub precision: TimestampPrecision,
}

impl ProbeConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let interval = parse_interval(&args.interval)?;

        let filter = match args.record_type.as_deref() {
            None => None,
            Some(raw) => Some(
                raw.parse::<DnsRecordType>()
                    .map_err(|e| ConfigError::InvalidRecordType(e.0))?,
            ),
        };

        let schedule = if args.forever {
            ScheduleMode::Unbounded
        } else {
            let timeout = seconds(args.timeout).map_err(|e| match e {
                SecondsError::NotPositive => ConfigError::NonPositiveTimeout(args.timeout),
                SecondsError::OutOfRange => ConfigError::TimeoutOutOfRange(args.timeout),
            })?;
            ScheduleMode::Bounded { timeout }
        };

        let precision = if args.millis {
            TimestampPrecision::Millis
        } else {
            TimestampPrecision::Seconds
        };

        Ok(Self {
            domain: args.domain.clone(),
            interval,
            filter,
            schedule,
            precision,
        })
    }
}

fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidInterval(format!("{raw:?}: {e}")))?;

    seconds(secs).map_err(|e| match e {
        SecondsError::NotPositive => ConfigError::NonPositiveInterval(raw.to_string()),
        SecondsError::OutOfRange => ConfigError::IntervalOutOfRange(raw.to_string()),
    })
}

/// Zero, negative, NaN and sub-nanosecond values are not positive; infinities
/// and values past `Duration::MAX` are out of range.
fn seconds(secs: f64) -> Result<Duration, SecondsError> {
    if secs.is_nan() || secs <= 0.0 {
        return Err(SecondsError::NotPositive);
    }
    match Duration::try_from_secs_f64(secs) {
        Ok(d) if d.is_zero() => Err(SecondsError::NotPositive),
        Ok(d) => Ok(d),
        Err(_) => Err(SecondsError::OutOfRange),
    }
}
