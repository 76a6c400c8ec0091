use super::resolver::Resolve;
use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
enum Step {
    Answer(Vec<IpAddr>),
    Fail(String),
}

/// In-memory resolver replaying a fixed script, cycling once it runs out.
#[derive(Debug)]
pub struct ScriptedResolver {
    latency: Duration,
    steps: Vec<Step>,
    calls: Mutex<Vec<Instant>>,
}

impl ScriptedResolver {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            steps: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(mut self, ips: &[&str]) -> Self {
        let ips = ips.iter().map(|s| s.parse().unwrap()).collect();
        self.steps.push(Step::Answer(ips));
        self
    }

    pub fn fail(mut self, message: &str) -> Self {
        self.steps.push(Step::Fail(message.to_string()));
        self
    }

    /// Virtual instants at which each lookup started.
    pub fn calls(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Resolve for ScriptedResolver {
    async fn lookup_ip(&self, _domain: &str) -> io::Result<Vec<IpAddr>> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Instant::now());
            calls.len() - 1
        };
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.steps[index % self.steps.len()] {
            Step::Answer(ips) => Ok(ips.clone()),
            Step::Fail(message) => Err(io::Error::other(message.clone())),
        }
    }
}
