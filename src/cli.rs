use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dns-probe")]
#[command(about = "Periodically resolve a domain and print its addresses with lookup latency", long_about = None)]
pub struct Args {
    /// Domain name to resolve
    pub domain: String,

    /// Seconds between lookups (fractional values allowed)
    #[arg(value_name = "INTERVAL_SECONDS", allow_negative_numbers = true)]
    pub interval: String,

    /// Restrict output to 'A' or 'AAAA' addresses; omit for both
    #[arg(value_name = "RECORD_TYPE")]
    pub record_type: Option<String>,

    /// Stop after this many seconds
    #[arg(long, value_name = "SECS", default_value_t = 10.0, conflicts_with = "forever")]
    pub timeout: f64,

    /// Resolve immediately, then every interval until interrupted
    #[arg(long)]
    pub forever: bool,

    /// Include milliseconds in report timestamps
    #[arg(long)]
    pub millis: bool,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}
