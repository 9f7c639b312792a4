//! Simulation utilities and program loading.
//!
//! Provides the text image loader, the `Simulator` run loop, and output
//! writing.

pub mod loader;

pub mod simulator;

pub use simulator::{Simulator, Termination};
