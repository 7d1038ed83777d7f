//! Deterministic stand-ins for the domain ports.
//!
//! These let a run be driven down either branch and inspected line by line
//! without waiting on real time.

use crate::domain::ports::{Clock, Console, RandomProvider};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Always draws the same value.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    value: f64,
    draws: usize,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self { value, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomProvider for FixedRandom {
    fn random_ratio(&mut self) -> f64 {
        self.draws += 1;
        self.value
    }
}

/// Returns immediately and remembers every requested delay.
#[derive(Debug, Clone, Default)]
pub struct RecordingClock {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .map(|sleeps| sleeps.clone())
            .unwrap_or_default()
    }
}

impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleWrite {
    pub stream: Stream,
    pub text: String,
}

/// Captures output in write order across both streams.
#[derive(Debug, Clone, Default)]
pub struct BufferedConsole {
    writes: Vec<ConsoleWrite>,
    flushes: usize,
    stdout_budget: Option<usize>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `n` stdout writes, then fails every later one with `BrokenPipe`.
    pub fn failing_stdout_after(n: usize) -> Self {
        Self {
            stdout_budget: Some(n),
            ..Self::default()
        }
    }

    pub fn writes(&self) -> &[ConsoleWrite] {
        &self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn stdout(&self) -> String {
        self.collect(Stream::Stdout)
    }

    pub fn stderr(&self) -> String {
        self.collect(Stream::Stderr)
    }

    /// Both streams interleaved as a terminal would show them, split into lines.
    pub fn transcript_lines(&self) -> Vec<String> {
        let all: String = self.writes.iter().map(|w| w.text.as_str()).collect();
        all.lines().map(str::to_string).collect()
    }

    fn collect(&self, stream: Stream) -> String {
        self.writes
            .iter()
            .filter(|w| w.stream == stream)
            .map(|w| w.text.as_str())
            .collect()
    }

    fn push(&mut self, stream: Stream, text: String) -> io::Result<()> {
        if stream == Stream::Stdout {
            if let Some(budget) = self.stdout_budget.as_mut() {
                if *budget == 0 {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
                }
                *budget -= 1;
            }
        }
        self.writes.push(ConsoleWrite { stream, text });
        Ok(())
    }
}

impl Console for BufferedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.push(Stream::Stdout, text.to_string())
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        self.push(Stream::Stdout, format!("{}\n", text))
    }

    fn eprintln(&mut self, text: &str) -> io::Result<()> {
        self.push(Stream::Stderr, format!("{}\n", text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_console_keeps_write_order() {
        let mut console = BufferedConsole::new();
        console.print("label...").unwrap();
        console.println(" done.").unwrap();
        console.eprintln("oops").unwrap();

        assert_eq!(console.stdout(), "label... done.\n");
        assert_eq!(console.stderr(), "oops\n");
        assert_eq!(console.transcript_lines(), vec!["label... done.", "oops"]);
    }

    #[test]
    fn test_failing_console_only_breaks_stdout() {
        let mut console = BufferedConsole::failing_stdout_after(1);
        assert!(console.println("first").is_ok());
        assert!(console.println("second").is_err());
        assert!(console.eprintln("still here").is_ok());
    }
}
