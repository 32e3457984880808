//! Round sequencer.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start--> InProgress --next (none left)--> Exhausted
//!      ^                                                    |
//!      +--------------------------reset---------------------+
//! ```
//!
//! `start` with an empty list goes straight to `Exhausted`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::GameRng;
use crate::questions::Question;

/// Where the sequencer is in its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencerState {
    #[default]
    NotStarted,
    InProgress,
    Exhausted,
}

/// Result of asking for the next round.
///
/// Exhaustion is the expected end of a session, not a failure: callers
/// show the summary screen on `Exhausted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextRound {
    Question(Question),
    Exhausted,
}

impl NextRound {
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// The question, if any.
    #[must_use]
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Question(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Hands out a shuffled question list, each text at most once.
///
/// ## Example
///
/// ```
/// use blame_game::core::GameRng;
/// use blame_game::questions::Question;
/// use blame_game::rounds::{NextRound, RoundSequencer};
///
/// let questions = vec![
///     Question::new("q1", "a", "A", ""),
///     Question::new("q2", "a", "A", ""),
/// ];
///
/// let mut seq = RoundSequencer::new();
/// seq.start(questions, &mut GameRng::new(3));
///
/// assert!(!seq.next().is_exhausted());
/// assert!(!seq.next().is_exhausted());
/// assert_eq!(seq.next(), NextRound::Exhausted);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoundSequencer {
    state: SequencerState,
    /// Remaining questions; the next one is at the back.
    queue: Vec<Question>,
    played: Vec<String>,
    played_set: FxHashSet<String>,
    current: Option<Question>,
}

impl RoundSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle `questions` and begin a new cycle, forgetting played texts.
    pub fn start(&mut self, questions: Vec<Question>, rng: &mut GameRng) {
        self.clear();

        let mut queue = questions;
        rng.shuffle(&mut queue);
        self.queue = queue;

        self.state = if self.queue.is_empty() {
            SequencerState::Exhausted
        } else {
            SequencerState::InProgress
        };
        debug!(questions = self.queue.len(), state = ?self.state, "round sequence started");
    }

    /// Hand out the next unplayed question.
    ///
    /// Questions whose text was already played this cycle are skipped.
    /// Outside `InProgress` this yields `Exhausted` without changing state.
    pub fn next(&mut self) -> NextRound {
        if self.state != SequencerState::InProgress {
            return NextRound::Exhausted;
        }

        while let Some(question) = self.queue.pop() {
            if !self.played_set.insert(question.text.clone()) {
                warn!(text = %question.text, "skipping question whose text was already played");
                continue;
            }
            self.played.push(question.text.clone());
            self.current = Some(question.clone());
            return NextRound::Question(question);
        }

        debug!(rounds = self.played.len(), "round sequence exhausted");
        self.state = SequencerState::Exhausted;
        self.current = None;
        NextRound::Exhausted
    }

    /// Back to `NotStarted`, dropping all played state.
    pub fn reset(&mut self) {
        self.clear();
        self.state = SequencerState::NotStarted;
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The question most recently handed out, until exhaustion.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Texts handed out this cycle, in order.
    #[must_use]
    pub fn played(&self) -> &[String] {
        &self.played
    }

    #[must_use]
    pub fn has_played(&self, text: &str) -> bool {
        self.played_set.contains(text)
    }

    /// Upper bound on rounds left; duplicate texts still queued count here.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// 1-based number of the current round, 0 before the first.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.played.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.played.clear();
        self.played_set.clear();
        self.current = None;
    }
}
