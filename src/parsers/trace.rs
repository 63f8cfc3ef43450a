use crate::grammar::{format_symbols, format_terminals, Symbol, Terminal};
use std::io::{self, Write};

pub const DEFAULT_WIDTH: usize = 16;

/// Receives a snapshot of the automaton before its first step and after every
/// step. Observers cannot influence the parse.
pub trait Observer {
    /// Observes the stack, bottom first, and the input not yet consumed
    fn observe(&mut self, stack: &[Symbol], input: &[Terminal]);
}

/// An observer which discards everything
pub struct Silent;

impl Observer for Silent {
    fn observe(&mut self, _: &[Symbol], _: &[Terminal]) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rendered snapshot of the automaton
pub struct Step {
    pub stack: String,
    pub input: String,
}

#[derive(Debug, Default)]
/// An observer which keeps every snapshot in memory
pub struct Recorder {
    pub steps: Vec<Step>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder { steps: Vec::new() }
    }
}

impl Observer for Recorder {
    fn observe(&mut self, stack: &[Symbol], input: &[Terminal]) {
        self.steps.push(Step {
            stack: format_symbols(stack),
            input: format_terminals(input),
        });
    }
}

/// An observer which writes one line per snapshot: the stack padded to a
/// fixed width, a tab, then the remaining input.
///
/// Writing stops at the first I/O error, which is reported by `finish`.
pub struct TraceWriter<W: Write> {
    out: W,
    width: usize,
    error: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> TraceWriter<W> {
        Self::with_width(out, DEFAULT_WIDTH)
    }

    pub fn with_width(out: W, width: usize) -> TraceWriter<W> {
        TraceWriter {
            out,
            width,
            error: None,
        }
    }

    /// Flushes the output and returns the writer, or the first error
    /// encountered while tracing
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;

        Ok(self.out)
    }
}

impl<W: Write> Observer for TraceWriter<W> {
    fn observe(&mut self, stack: &[Symbol], input: &[Terminal]) {
        if self.error.is_some() {
            return;
        }

        if let Err(e) = writeln!(
            self.out,
            "{:<w$}\t{}",
            format_symbols(stack),
            format_terminals(input),
            w = self.width
        ) {
            self.error = Some(e);
        }
    }
}
