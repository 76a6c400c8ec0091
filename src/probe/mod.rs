mod report;
mod schedule;

use report::write_report;
use schedule::{Scheduler, Tick};

use crate::config::{ProbeConfig, ScheduleMode};
use crate::dns::{Resolve, query};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Why the probe loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The bounded schedule's timeout elapsed.
    TimedOut(Duration),
    /// The cancellation token fired (Ctrl-C).
    Interrupted,
}

pub struct Probe<R> {
    config: ProbeConfig,
    resolver: R,
}

impl<R: Resolve> Probe<R> {
    pub fn new(config: ProbeConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Resolve on every scheduler tick and write a report to `out` until the
    /// schedule ends or `cancel` fires. Lookup failures are reported, never returned.
    pub async fn run<W: Write>(&self, out: &mut W, cancel: &CancellationToken) -> Result<Exit> {
        let mut scheduler = Scheduler::new(self.config.schedule, self.config.interval);
        let mut ticks: u64 = 0;

        loop {
            match scheduler.next(cancel).await {
                Tick::Fire => {
                    ticks += 1;
                    let resolution =
                        query(&self.resolver, &self.config.domain, self.config.filter).await;
                    match &resolution.outcome {
                        Ok(ips) => debug!(
                            "tick {ticks}: {} address(es) in {:.3} ms",
                            ips.len(),
                            resolution.elapsed_ms()
                        ),
                        Err(e) => debug!("tick {ticks}: lookup failed: {e}"),
                    }
                    write_report(out, &resolution, self.config.precision)
                        .context("Failed to write report")?;
                }
                Tick::Deadline => {
                    let ScheduleMode::Bounded { timeout } = self.config.schedule else {
                        unreachable!("only bounded schedules have a deadline");
                    };
                    writeln!(out, "Exiting after {} seconds.", timeout.as_secs_f64())
                        .and_then(|()| out.flush())
                        .context("Failed to write exit notice")?;
                    info!("Timeout reached after {ticks} tick(s)");
                    return Ok(Exit::TimedOut(timeout));
                }
                Tick::Cancelled => {
                    info!("Interrupted after {ticks} tick(s)");
                    return Ok(Exit::Interrupted);
                }
            }
        }
    }
}
