//! Round sequencing: shuffled, exhaust-once question order.

pub mod sequencer;

pub use sequencer::{NextRound, RoundSequencer, SequencerState};
