//! Fixed-width `#` progress bar.

use std::io::{self, Write};

/// Width of the bar, in marks, for a full pass over the wordlist.
pub const TERMINAL_WIDTH: usize = 80;

/// Emits one `#` every `total / TERMINAL_WIDTH` ticks.
#[derive(Debug)]
pub struct Progress {
    step: usize,
    count: usize,
    header: Option<&'static str>,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            step: (total / TERMINAL_WIDTH).max(1),
            count: 0,
            header: None,
        }
    }

    /// Line printed once, right before the first mark.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Records one processed seed, drawing a mark when a step completes.
    pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.count += 1;
        if self.count % self.step != 0 {
            return Ok(());
        }

        if self.count == self.step {
            if let Some(header) = self.header {
                writeln!(out, "{}", header)?;
            }
        }
        write!(out, "#")?;
        out.flush()
    }
}
