//! Simulation utilities and program loading.
//!
//! Provides the program loader, the top-level [`Simulator`] that owns all run state,
//! and the observer hook through which run output is surfaced.

pub mod loader;
pub mod observer;
pub mod simulator;

pub use loader::Program;
pub use observer::{NullObserver, Recorder, SimObserver};
pub use simulator::{RunLimit, RunMode, RunSummary, Simulator};
