mod cli;
mod config;
mod dns;
mod probe;

use std::io;
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use config::{ProbeConfig, ScheduleMode};
use dns::{DnsRecordType, SystemResolver};
use log::{info, warn};
use probe::{Exit, Probe};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage problems exit 1 rather than clap's 2; --help and --version stay 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            if e.print().is_err() {
                eprintln!("{e}");
            }
            exit(code);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = ProbeConfig::from_args(&args).unwrap_or_else(|err| {
        eprintln!("{err}");
        exit(1);
    });

    info!("Probing {} every {:?}", config.domain, config.interval);
    info!(
        "Record type: {}",
        config.filter.map_or("all", DnsRecordType::name)
    );
    if let ScheduleMode::Bounded { timeout } = config.schedule {
        info!("Stopping after {timeout:?}");
    }

    let cancel_token = CancellationToken::new();
    let token_clone = cancel_token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => token_clone.cancel(),
            Err(e) => warn!("Unable to listen for Ctrl-C: {e}"),
        }
    });

    let probe = Probe::new(config, SystemResolver);
    match probe.run(&mut io::stdout(), &cancel_token).await? {
        Exit::TimedOut(after) => info!("DNS probe finished after {after:?}"),
        Exit::Interrupted => info!("DNS probe interrupted"),
    }

    Ok(())
}
