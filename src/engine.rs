//! Single update surface for one running game: input, frames and persistence
//! all go through an `Engine`, so every mutation happens in one place.

use crate::input::{Command, InputDispatcher, InputEvent};
use crate::leaderboard::{Leaderboard, PLAYER_NAME, ScoreRecord, ScoreStore};
use crate::model::{Round, RoundConfig, RoundEnd};
use crate::render::{FrameTimer, Snapshot};
use crate::state::Surface;
use crate::util::clog;

pub struct Engine<S> {
    pub round: Round,
    pub input: InputDispatcher,
    leaderboard: Leaderboard<S>,
    timer: FrameTimer,
    /// Wall clock in epoch milliseconds, used to stamp records.
    now_ms: fn() -> f64,
}

impl<S: ScoreStore> Engine<S> {
    pub fn new(config: RoundConfig, surface: Surface, seed: u64, store: S, now_ms: fn() -> f64) -> Self {
        let leaderboard = Leaderboard::new(store, config.leaderboard_cap);
        Self {
            round: Round::new(config, surface, seed),
            input: InputDispatcher::default(),
            leaderboard,
            timer: FrameTimer::default(),
            now_ms,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    /// Feeds one raw input event through the dispatcher into the round.
    pub fn handle(&mut self, event: &InputEvent) {
        if let Some(command) = self.input.translate(event) {
            self.command(command);
        }
    }

    /// Applies a command directly, e.g. from the pause and restart buttons.
    pub fn command(&mut self, command: Command) {
        if let Some(end) = self.round.apply(command) {
            self.record(end);
        }
    }

    /// Animation frame: advance by the time since the last frame and return the view to paint.
    pub fn frame(&mut self, timestamp_ms: f64) -> Snapshot {
        let dt = self.timer.advance(timestamp_ms);
        if let Some(end) = self.round.advance(dt) {
            self.record(end);
        }
        Snapshot::of(&self.round)
    }

    fn record(&mut self, end: RoundEnd) {
        let record = ScoreRecord {
            name: PLAYER_NAME.to_string(),
            score: end.score,
            timestamp_ms: (self.now_ms)().max(0.0) as u64,
            theme_id: end.theme_id.to_string(),
        };
        clog(&format!("round ended ({:?}) with {} on {}", end.cause, end.score, end.theme_id));
        self.leaderboard.append_and_persist(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryScoreStore;

    fn fixed_now() -> f64 {
        1_700_000_000_000.0
    }

    fn engine() -> Engine<MemoryScoreStore> {
        Engine::new(
            RoundConfig::default(),
            Surface::default(),
            5,
            MemoryScoreStore::default(),
            fixed_now,
        )
    }

    fn press_key(e: &mut Engine<MemoryScoreStore>, code: &str, key: &str) {
        e.handle(&InputEvent::key(code, key));
    }

    /// Drags across the tiles spelling `word`, then releases.
    fn drag_word(e: &mut Engine<MemoryScoreStore>, word: &str) {
        let mut first = true;
        for ch in word.chars() {
            let t = e
                .round
                .board
                .tiles
                .iter()
                .find(|t| !t.used && t.ch == ch.to_ascii_uppercase())
                .cloned()
                .unwrap();
            let ev = if first {
                InputEvent::PointerDown { x: t.x, y: t.y }
            } else {
                InputEvent::PointerMove { x: t.x, y: t.y }
            };
            first = false;
            e.handle(&ev);
        }
        e.handle(&InputEvent::PointerUp);
    }

    #[test]
    fn drag_and_submit_scores_a_word() {
        let mut e = engine();
        e.frame(0.0);
        drag_word(&mut e, "plan");
        assert_eq!(e.round.current_word(), "plan");
        press_key(&mut e, "Enter", "Enter");
        assert_eq!(e.round.scorer.score, 40);
        assert_eq!(e.round.scorer.combo, 2);
    }

    #[test]
    fn moving_without_the_button_does_not_pick() {
        let mut e = engine();
        let t = e.round.board.tiles[0].clone();
        e.handle(&InputEvent::PointerMove { x: t.x, y: t.y });
        assert!(e.round.selection.is_empty());
    }

    #[test]
    fn releasing_keeps_the_selection() {
        let mut e = engine();
        drag_word(&mut e, "pe");
        assert_eq!(e.round.current_word(), "pe");
        press_key(&mut e, "Backspace", "Backspace");
        assert_eq!(e.round.current_word(), "p");
        press_key(&mut e, "Space", " ");
        assert_eq!(e.round.current_word(), "");
    }

    #[test]
    fn time_out_persists_one_record() {
        let mut e = engine();
        e.frame(0.0);
        drag_word(&mut e, "plan");
        press_key(&mut e, "Enter", "Enter");
        let mut t = 0.0;
        for _ in 0..120 {
            t += 1000.0;
            e.frame(t);
        }
        assert!(e.round.over());
        let list = e.leaderboard().load();
        assert_eq!(
            list,
            vec![ScoreRecord {
                name: "Player".into(),
                score: 40,
                timestamp_ms: 1_700_000_000_000,
                theme_id: "space".into(),
            }]
        );
    }

    #[test]
    fn restart_mid_round_persists_before_resetting() {
        let mut e = engine();
        e.frame(0.0);
        drag_word(&mut e, "plan");
        press_key(&mut e, "Enter", "Enter");
        press_key(&mut e, "KeyT", "t");
        e.frame(3000.0);
        press_key(&mut e, "KeyR", "r");
        let list = e.leaderboard().load();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].score, 40);
        assert_eq!(list[0].theme_id, "myth");
        assert_eq!(e.round.scorer.score, 0);
        assert_eq!(e.round.theme_index, 0);
        assert_eq!(e.round.clock.time_left, 90.0);
    }

    #[test]
    fn restart_after_time_up_records_the_round_again() {
        let mut e = engine();
        e.frame(0.0);
        e.frame(91_000.0);
        assert!(e.round.over());
        assert_eq!(e.leaderboard().load().len(), 1);
        press_key(&mut e, "KeyP", "p");
        assert!(e.round.over());
        press_key(&mut e, "KeyR", "R");
        assert!(e.round.running());
        assert_eq!(e.leaderboard().load().len(), 2);
    }

    #[test]
    fn paused_frames_freeze_the_clock() {
        let mut e = engine();
        e.frame(0.0);
        e.frame(10_000.0);
        press_key(&mut e, "KeyP", "p");
        e.frame(40_000.0);
        let snap = e.frame(50_000.0);
        assert!(snap.paused);
        assert_eq!(e.round.clock.time_left, 80.0);
        press_key(&mut e, "KeyP", "p");
        e.frame(51_000.0);
        assert_eq!(e.round.clock.time_left, 79.0);
    }

    #[test]
    fn leaderboard_never_exceeds_capacity() {
        let mut e = engine();
        for _ in 0..55 {
            press_key(&mut e, "KeyR", "r");
        }
        let list = e.leaderboard().load();
        assert_eq!(list.len(), 50);
        assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
