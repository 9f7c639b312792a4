//! `TestContext`: a simulator with captured console output.

#![allow(dead_code)]

use xsim_core::config::LatencyConfig;
use xsim_core::core::StepOutcome;
use xsim_core::io::BufferConsole;
use xsim_core::sim::{Simulator, Termination};
use xsim_core::stats::Stats;

use super::builder::to_bytes;

pub struct TestContext {
    pub sim: Simulator,
    console: BufferConsole,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_latencies(LatencyConfig::default())
    }

    pub fn with_latencies(config: LatencyConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("xsim_core=debug")
            .try_init();

        let console = BufferConsole::new();
        let sim = Simulator::with_console(&config, Box::new(console.clone()));
        Self { sim, console }
    }

    /// Load instruction words into program memory at address 0.
    pub fn load_program(mut self, words: &[u16]) -> Self {
        self.sim
            .load_program(&to_bytes(words))
            .expect("program fits in memory");
        self
    }

    /// Set a register value.
    pub fn set_reg(&mut self, reg: usize, val: i16) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a register value.
    pub fn get_reg(&self, reg: usize) -> i16 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u16 {
        self.sim.cpu.pc
    }

    pub fn step(&mut self) -> StepOutcome {
        self.sim.step()
    }

    pub fn run(&mut self) -> Termination {
        self.sim.run()
    }

    pub fn stats(&self) -> Stats {
        self.sim.stats()
    }

    /// Lines printed by `PUT`.
    pub fn output(&self) -> Vec<String> {
        self.console.lines()
    }
}
