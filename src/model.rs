//! Round state for Word Weave.
//! A `Round` owns the board, selection, scorer and clock for one play session
//! and applies discrete commands to them, in the same spirit as a reducer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{Theme, ThemeCatalog};
use crate::input::Command;
use crate::state::{Phase, RoundClock, Scorer, Selection, SubmitOutcome, Surface, TileBoard};
use crate::util::clog;

#[derive(Clone, Debug, PartialEq)]
pub struct RoundConfig {
    pub round_secs: f64,
    /// How long a combo survives without another accepted word.
    pub combo_window_secs: f64,
    pub points_per_letter: u32,
    pub miss_penalty: u32,
    pub leaderboard_cap: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_secs: 90.0,
            combo_window_secs: 5.0,
            points_per_letter: 10,
            miss_penalty: 5,
            leaderboard_cap: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCause {
    TimeUp,
    Restarted,
}

/// Emitted once per finished round; the engine turns it into a leaderboard record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundEnd {
    pub score: u32,
    pub theme_id: &'static str,
    pub cause: EndCause,
}

#[derive(Clone, Debug)]
pub struct Round {
    pub config: RoundConfig,
    pub surface: Surface,
    pub catalog: ThemeCatalog,
    pub theme_index: usize,
    pub board: TileBoard,
    pub selection: Selection,
    pub scorer: Scorer,
    pub clock: RoundClock,
    rng: ChaCha8Rng,
}

impl Round {
    pub fn new(config: RoundConfig, surface: Surface, seed: u64) -> Self {
        let catalog = ThemeCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = TileBoard::layout(catalog.get(0), surface, &mut rng);
        let clock = RoundClock::new(config.round_secs);
        Self {
            config,
            surface,
            catalog,
            theme_index: 0,
            board,
            selection: Selection::default(),
            scorer: Scorer::default(),
            clock,
            rng,
        }
    }

    pub fn theme(&self) -> &Theme {
        self.catalog.get(self.theme_index)
    }

    pub fn current_word(&self) -> String {
        self.selection.current_word(&self.board.tiles)
    }

    pub fn running(&self) -> bool {
        self.clock.running()
    }

    pub fn over(&self) -> bool {
        self.clock.over()
    }

    /// Applies one command. Everything except restart is ignored once the round is over.
    pub fn apply(&mut self, command: Command) -> Option<RoundEnd> {
        if self.over() && command != Command::Restart {
            return None;
        }
        match command {
            Command::PickAt { x, y } => {
                if self.running() {
                    if let Some(idx) = self.board.hit_test(x, y) {
                        self.selection.pick(&mut self.board.tiles, idx);
                    }
                }
                None
            }
            Command::Submit => {
                self.submit();
                None
            }
            Command::RemoveLast => {
                self.selection.remove_last(&mut self.board.tiles);
                None
            }
            Command::Clear => {
                self.selection.clear(&mut self.board.tiles);
                None
            }
            Command::NextTheme => {
                self.switch_theme(self.theme_index + 1);
                None
            }
            Command::TogglePause => {
                self.clock.toggle_pause();
                clog(&format!("pause toggled: {:?}", self.clock.phase));
                None
            }
            Command::Restart => self.restart(),
        }
    }

    /// Scores the current word and always clears the selection afterwards.
    pub fn submit(&mut self) -> SubmitOutcome {
        let word = self.current_word();
        let theme = self.catalog.get(self.theme_index);
        let outcome = self.scorer.submit(&word, theme, &self.config);
        self.selection.clear(&mut self.board.tiles);
        match &outcome {
            SubmitOutcome::Accepted { word, points } => {
                clog(&format!("accepted '{}' +{} (combo x{})", word, points, self.scorer.combo))
            }
            SubmitOutcome::Rejected { reason, penalty } => {
                clog(&format!("rejected '{}' ({:?}) -{}", word, reason, penalty))
            }
        }
        outcome
    }

    /// Moves to another theme: fresh board, empty selection and found list.
    pub fn switch_theme(&mut self, index: usize) {
        self.theme_index = self.catalog.normalize(index);
        self.selection = Selection::default();
        self.scorer.reset_found();
        self.board = TileBoard::layout(self.catalog.get(self.theme_index), self.surface, &mut self.rng);
        clog(&format!("theme: {}", self.theme().id));
    }

    /// Abandons the current round and starts over on the first theme.
    /// The abandoned score is always reported, also after a time-out.
    pub fn restart(&mut self) -> Option<RoundEnd> {
        let ended = RoundEnd {
            score: self.scorer.score,
            theme_id: self.theme().id,
            cause: EndCause::Restarted,
        };
        self.scorer = Scorer::default();
        self.clock = RoundClock::new(self.config.round_secs);
        self.switch_theme(0);
        clog("round restarted");
        Some(ended)
    }

    /// Frame update: combo decay and countdown, only while running.
    pub fn advance(&mut self, dt: f64) -> Option<RoundEnd> {
        if self.clock.phase != Phase::Running {
            return None;
        }
        self.scorer.decay(dt);
        if self.clock.tick(dt) {
            clog(&format!("time up, final score {}", self.scorer.score));
            return Some(RoundEnd {
                score: self.scorer.score,
                theme_id: self.theme().id,
                cause: EndCause::TimeUp,
            });
        }
        None
    }
}
