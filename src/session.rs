//! Game session: one play-through from the first round to exhaustion.
//!
//! A session snapshots the roster at start, builds its question list from
//! the chosen categories, and drives a [`RoundSequencer`]. In NameBlame
//! mode players take turns as the blamer in roster order and each round
//! records who they blamed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameError, GameMode, GameRng, SessionConfig};
use crate::players::{Player, PlayerId, PlayerRegistry};
use crate::questions::{select_random_categories, Question, QuestionPool};
use crate::rounds::{NextRound, RoundSequencer, SequencerState};
use crate::settings::Preferences;

/// How the session's categories are chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    /// Exactly these category ids.
    Manual(Vec<String>),
    /// This many distinct categories drawn at random.
    Random { count: usize },
}

impl CategorySelection {
    /// Follow the stored toggle: manual picks if enabled and non-empty,
    /// otherwise the configured number of random categories.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences, config: &SessionConfig) -> Self {
        if prefs.manual_category_selection && !prefs.selected_categories.is_empty() {
            Self::Manual(prefs.selected_categories.clone())
        } else {
            Self::Random {
                count: config.random_category_count,
            }
        }
    }
}

/// One recorded blame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blame {
    /// 1-based round number.
    pub round: usize,
    pub question: String,
    pub blamer: PlayerId,
    pub blamed: PlayerId,
}

/// End-of-session figures for the summary screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub rounds_played: usize,
    /// Times each player was blamed, in roster order.
    pub blame_counts: Vec<(Player, usize)>,
}

impl SessionSummary {
    /// Players blamed most often; empty if nobody was blamed.
    #[must_use]
    pub fn most_blamed(&self) -> Vec<&Player> {
        let max = self.blame_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.blame_counts
            .iter()
            .filter(|(_, n)| *n == max)
            .map(|(p, _)| p)
            .collect()
    }
}

/// A running game.
#[derive(Clone, Debug)]
pub struct GameSession {
    mode: GameMode,
    players: Vec<Player>,
    categories: Vec<String>,
    sequencer: RoundSequencer,
    blames: Vec<Blame>,
}

impl GameSession {
    /// Validate the roster, build the question list and start round one's
    /// sequence.
    ///
    /// Category picks and round order draw from separate streams of `rng`.
    pub fn start(
        registry: &PlayerRegistry,
        pool: &QuestionPool,
        mode: GameMode,
        selection: &CategorySelection,
        rng: &GameRng,
    ) -> Result<Self, GameError> {
        if !registry.can_start(mode) {
            return Err(GameError::NotEnoughPlayers {
                mode,
                required: mode.min_players(),
                actual: registry.len(),
            });
        }

        let categories = match selection {
            CategorySelection::Manual(ids) => ids.clone(),
            CategorySelection::Random { count } => {
                let mut category_rng = rng.for_context("categories");
                select_random_categories(&pool.category_ids(), *count, &mut category_rng)
            }
        };

        let questions = pool.questions_in_categories(&categories);
        if questions.is_empty() {
            return Err(GameError::NoQuestions);
        }

        let mut sequencer = RoundSequencer::new();
        sequencer.start(questions, &mut rng.for_context("rounds"));

        info!(
            %mode,
            players = registry.len(),
            categories = categories.len(),
            questions = sequencer.remaining(),
            "session started"
        );

        Ok(Self {
            mode,
            players: registry.players().to_vec(),
            categories,
            sequencer,
            blames: Vec::new(),
        })
    }

    /// Advance to the next round.
    pub fn next_round(&mut self) -> NextRound {
        let next = self.sequencer.next();
        if next.is_exhausted() {
            debug!(rounds = self.rounds_played(), "session exhausted");
        }
        next
    }

    /// The question on screen, if a round is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.sequencer.current()
    }

    /// Whose turn it is to blame. `None` in Classic mode or between rounds.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        if self.mode != GameMode::NameBlame || self.sequencer.current().is_none() {
            return None;
        }
        let round = self.sequencer.round_number();
        self.players.get((round - 1) % self.players.len())
    }

    /// Record that the active player blames `blamed` for the current round.
    ///
    /// Blaming again in the same round replaces the earlier choice.
    pub fn blame(&mut self, blamed: &PlayerId) -> Result<&Blame, GameError> {
        if self.mode != GameMode::NameBlame {
            return Err(GameError::BlameNotAvailable);
        }
        let question = self
            .sequencer
            .current()
            .map(|q| q.text.clone())
            .ok_or(GameError::NoActiveRound)?;
        let blamer = self.active_player().ok_or(GameError::NoActiveRound)?.id.clone();

        if !self.players.iter().any(|p| &p.id == blamed) {
            return Err(GameError::UnknownPlayer(blamed.clone()));
        }
        if &blamer == blamed {
            return Err(GameError::SelfBlame);
        }

        let round = self.sequencer.round_number();
        debug!(round, %blamer, %blamed, "blame recorded");

        self.blames.retain(|b| b.round != round);
        self.blames.push(Blame {
            round,
            question,
            blamer,
            blamed: blamed.clone(),
        });
        Ok(&self.blames[self.blames.len() - 1])
    }

    /// Summary of the rounds played so far.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let blame_counts = self
            .players
            .iter()
            .map(|p| {
                let count = self.blames.iter().filter(|b| b.blamed == p.id).count();
                (p.clone(), count)
            })
            .collect();

        SessionSummary {
            mode: self.mode,
            rounds_played: self.rounds_played(),
            blame_counts,
        }
    }

    /// Abandon the session, e.g. when returning to the intro screen.
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.blames.clear();
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Category ids the question list was built from.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn blames(&self) -> &[Blame] {
        &self.blames
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.sequencer.round_number()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sequencer.state() == SequencerState::Exhausted
    }

    #[must_use]
    pub fn sequencer(&self) -> &RoundSequencer {
        &self.sequencer
    }
}
