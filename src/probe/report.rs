use crate::config::TimestampPrecision;
use crate::dns::Resolution;
use std::io::{self, Write};

/// Print one tick's report: a `<timestamp> : <latency> ms` header followed by
/// one address per line, or a single `<timestamp> : <error>` line.
pub fn write_report<W: Write>(
    out: &mut W,
    resolution: &Resolution,
    precision: TimestampPrecision,
) -> io::Result<()> {
    let timestamp = resolution.started_at.format(precision.format());

    match &resolution.outcome {
        Ok(ips) => {
            writeln!(out, "{timestamp} : {:.3} ms", resolution.elapsed_ms())?;
            for ip in ips {
                writeln!(out, "{}", ip.to_canonical())?;
            }
        }
        Err(err) => writeln!(out, "{timestamp} : {err}")?,
    }

    out.flush()
}
