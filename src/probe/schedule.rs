use crate::config::ScheduleMode;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at, sleep, sleep_until};
use tokio_util::sync::CancellationToken;

/// Longest period or timeout the scheduler works with, the same horizon tokio
/// uses for "never". Longer values are capped so `Instant` arithmetic cannot overflow.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time to resolve.
    Fire,
    /// The bounded schedule ran out.
    Deadline,
    /// Shutdown was requested.
    Cancelled,
}

/// Decides when the next lookup happens. Cancellation and the deadline are
/// only observed here, between lookups.
#[derive(Debug)]
pub enum Scheduler {
    Bounded {
        ticker: Interval,
        deadline: Instant,
    },
    Unbounded {
        period: Duration,
        fired: bool,
    },
}

impl Scheduler {
    /// Must be called from within a tokio runtime; the bounded clock starts now.
    pub fn new(mode: ScheduleMode, period: Duration) -> Self {
        let period = period.min(FAR_FUTURE);
        match mode {
            ScheduleMode::Bounded { timeout } => {
                let start = Instant::now();
                let mut ticker = interval_at(start + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                Self::Bounded {
                    ticker,
                    deadline: start + timeout.min(FAR_FUTURE),
                }
            }
            ScheduleMode::Unbounded => Self::Unbounded {
                period,
                fired: false,
            },
        }
    }

    pub async fn next(&mut self, cancel: &CancellationToken) -> Tick {
        match self {
            Self::Bounded { ticker, deadline } => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Tick::Cancelled,
                    _ = sleep_until(*deadline) => Tick::Deadline,
                    _ = ticker.tick() => Tick::Fire,
                }
            }
            Self::Unbounded { period, fired } => {
                if !*fired {
                    *fired = true;
                    return if cancel.is_cancelled() {
                        Tick::Cancelled
                    } else {
                        Tick::Fire
                    };
                }
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => Tick::Cancelled,
                    _ = sleep(*period) => Tick::Fire,
                }
            }
        }
    }
}
