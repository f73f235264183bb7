//! Run observers.
//!
//! A [`SimObserver`] receives output as the run produces it: checkpoints in checksum
//! mode and finished rows in CRT mode. Both methods default to doing nothing.

use crate::soc::devices::Checkpoint;

/// Receives run output as it is produced.
pub trait SimObserver {
    /// Called when a checksum checkpoint is sampled.
    fn on_checkpoint(&mut self, _checkpoint: &Checkpoint) {}

    /// Called when the CRT finishes row `index`.
    fn on_row(&mut self, _index: usize, _row: &str) {}
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SimObserver for NullObserver {}

/// Observer that keeps everything it is given, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    /// Checkpoints, in the order sampled.
    pub checkpoints: Vec<Checkpoint>,
    /// Finished rows, in the order emitted.
    pub rows: Vec<String>,
}

impl SimObserver for Recorder {
    fn on_checkpoint(&mut self, checkpoint: &Checkpoint) {
        self.checkpoints.push(*checkpoint);
    }

    fn on_row(&mut self, _index: usize, row: &str) {
        self.rows.push(row.to_string());
    }
}
