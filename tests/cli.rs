use std::net::IpAddr;
use std::process::{Command, Output};

fn dns_probe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dns-probe"))
        .args(args)
        .output()
        .expect("failed to launch dns-probe")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    for args in [&[][..], &["example.com"][..]] {
        let output = dns_probe(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn help_exits_0() {
    let output = dns_probe(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("<DOMAIN> <INTERVAL_SECONDS> [RECORD_TYPE]"));
}

#[test]
fn unparseable_interval_exits_1_before_resolving() {
    let output = dns_probe(&["example.com", "every-second"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse interval"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn non_positive_interval_exits_1() {
    let output = dns_probe(&["example.com", "-2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("positive"));
}

#[test]
fn invalid_record_type_exits_1() {
    let output = dns_probe(&["example.com", "1", "MX"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid record type: MX. Use 'A' or 'AAAA'."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn bounded_run_stops_on_its_own() {
    // An address literal resolves without touching the network.
    let output = dns_probe(&["127.0.0.1", "0.2", "A", "--timeout", "1"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.last(), Some(&"Exiting after 1 seconds."));

    let reports = lines.iter().filter(|l| l.ends_with(" ms")).count();
    assert!((3..=5).contains(&reports), "{text}");
    for line in &lines[..lines.len() - 1] {
        assert!(line.ends_with(" ms") || *line == "127.0.0.1", "{line}");
    }
}

#[test]
fn aaaa_filter_drops_ipv4_results() {
    let output = dns_probe(&["127.0.0.1", "0.2", "AAAA", "--timeout", "0.5"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.lines().all(|l| l.parse::<IpAddr>().is_err()), "{text}");
    assert!(text.lines().any(|l| l.ends_with(" ms")), "{text}");
}

#[test]
fn unresolvable_domain_reports_each_tick_and_keeps_going() {
    let output = dns_probe(&["definitely-invalid.invalid", "0.3", "--timeout", "1"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.last(), Some(&"Exiting after 1 seconds."));
    assert!(lines.len() >= 2, "{text}");
    for line in &lines[..lines.len() - 1] {
        assert!(line.contains(" : "), "{line}");
        assert!(!line.ends_with(" ms"), "{line}");
        assert!(line.parse::<IpAddr>().is_err(), "{line}");
    }
}

#[test]
fn out_of_range_interval_exits_1() {
    let output = dns_probe(&["example.com", "1e20"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Interval is too large to schedule, got 1e20"));
    assert!(stdout(&output).is_empty());
}
