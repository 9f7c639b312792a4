//! Console output for the `PUT` instruction.
//!
//! `PUT` is the only instruction with an externally visible side effect. The
//! CPU writes through the [`Console`] trait so hosts and tests can choose
//! where the output lands.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Sink for values printed by `PUT`.
pub trait Console {
    /// Emits the value of register `reg`.
    fn put(&mut self, reg: usize, value: i16);
}

/// Formats one `PUT` line without its trailing newline.
pub fn format_put(reg: usize, value: i16) -> String {
    format!("\t$R{reg}: {value}")
}

/// Console that prints to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn put(&mut self, reg: usize, value: i16) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", format_put(reg, value)) {
            tracing::warn!("PUT r{reg}: stdout write failed: {e}");
        }
    }
}

/// Console that records lines in memory.
///
/// Clones share the same buffer, so a clone kept by the caller observes
/// everything written through the one handed to the CPU.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl Console for BufferConsole {
    fn put(&mut self, reg: usize, value: i16) {
        self.lines.borrow_mut().push(format_put(reg, value));
    }
}
