use crate::event::ProbeEvent;
use std::io::{self, Write};

/// Receives the probe's events as they happen.
pub trait Reporter {
    fn on_event(&mut self, event: &ProbeEvent);
}

/// Writes one line per event to a writer (stdout for the binary).
///
/// Output is flushed after every line so the status shows up before the body
/// has finished downloading.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_event(&mut self, event: &ProbeEvent) {
        let res = writeln!(self.out, "{event}").and_then(|_| self.out.flush());
        if let Err(e) = res {
            log::warn!("cannot write probe output: {e}");
        }
    }
}

/// Keeps every event in order; handy for library callers and tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<ProbeEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ProbeEvent] {
        &self.events
    }
}

impl Reporter for RecordingReporter {
    fn on_event(&mut self, event: &ProbeEvent) {
        self.events.push(event.clone());
    }
}
