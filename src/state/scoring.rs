// Word validation, score and the combo multiplier.
use std::collections::HashSet;

use crate::catalog::Theme;
use crate::model::RoundConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    NotInDictionary,
    AlreadyFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, points: u32 },
    Rejected { reason: RejectReason, penalty: u32 },
}

/// Words accepted under the active theme: set lookups, listed in the order found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoundWords {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl FoundWords {
    /// Returns false if the word was already there.
    pub fn insert(&mut self, word: &str) -> bool {
        if !self.seen.insert(word.to_string()) {
            return false;
        }
        self.order.push(word.to_string());
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.order.clear();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scorer {
    pub score: u32,
    /// Multiplier applied to the next accepted word; never below 1.
    pub combo: u32,
    /// Seconds left before the combo falls back to 1.
    pub combo_decay: f64,
    pub found: FoundWords,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            score: 0,
            combo: 1,
            combo_decay: 0.0,
            found: FoundWords::default(),
        }
    }
}

impl Scorer {
    pub fn submit(&mut self, word: &str, theme: &Theme, cfg: &RoundConfig) -> SubmitOutcome {
        let reason = if word.is_empty() {
            Some(RejectReason::Empty)
        } else if !theme.accepts(word) {
            Some(RejectReason::NotInDictionary)
        } else if self.found.contains(word) {
            Some(RejectReason::AlreadyFound)
        } else {
            None
        };
        match reason {
            None => {
                let base = word.chars().count() as u32 * cfg.points_per_letter;
                let points = base.saturating_mul(self.combo);
                self.found.insert(word);
                self.score = self.score.saturating_add(points);
                self.combo = self.combo.saturating_add(1);
                self.combo_decay = cfg.combo_window_secs;
                SubmitOutcome::Accepted {
                    word: word.to_string(),
                    points,
                }
            }
            Some(reason) => {
                let before = self.score;
                self.score = self.score.saturating_sub(cfg.miss_penalty);
                self.combo = 1;
                self.combo_decay = 0.0;
                SubmitOutcome::Rejected {
                    reason,
                    penalty: before - self.score,
                }
            }
        }
    }

    /// Runs the combo window down by `dt` seconds.
    pub fn decay(&mut self, dt: f64) {
        if self.combo_decay <= 0.0 {
            return;
        }
        self.combo_decay -= dt;
        if self.combo_decay <= 0.0 {
            self.combo_decay = 0.0;
            self.combo = 1;
        }
    }

    /// Forgets found words; score and combo carry over.
    pub fn reset_found(&mut self) {
        self.found.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ThemeCatalog;

    fn space() -> Theme {
        ThemeCatalog::standard().get(0).clone()
    }

    #[test]
    fn accepted_word_scores_with_combo() {
        let cfg = RoundConfig::default();
        let mut s = Scorer::default();
        let out = s.submit("plan", &space(), &cfg);
        assert_eq!(
            out,
            SubmitOutcome::Accepted {
                word: "plan".into(),
                points: 40
            }
        );
        assert_eq!(s.score, 40);
        assert_eq!(s.combo, 2);
        assert_eq!(s.combo_decay, 5.0);
        assert!(s.found.contains("plan"));

        s.submit("pets", &space(), &cfg);
        assert_eq!(s.score, 40 + 80);
        assert_eq!(s.combo, 3);
    }

    #[test]
    fn unknown_word_costs_the_penalty() {
        let cfg = RoundConfig::default();
        let mut s = Scorer {
            score: 12,
            combo: 3,
            combo_decay: 2.5,
            ..Scorer::default()
        };
        let out = s.submit("zzz", &space(), &cfg);
        assert_eq!(
            out,
            SubmitOutcome::Rejected {
                reason: RejectReason::NotInDictionary,
                penalty: 5
            }
        );
        assert_eq!(s.score, 7);
        assert_eq!(s.combo, 1);
        assert_eq!(s.combo_decay, 0.0);
        assert_eq!(s.found.iter().count(), 0);
    }

    #[test]
    fn penalty_floors_at_zero() {
        let cfg = RoundConfig::default();
        let mut s = Scorer {
            score: 3,
            ..Scorer::default()
        };
        let out = s.submit("", &space(), &cfg);
        assert_eq!(
            out,
            SubmitOutcome::Rejected {
                reason: RejectReason::Empty,
                penalty: 3
            }
        );
        assert_eq!(s.score, 0);
        s.submit("nope", &space(), &cfg);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn repeated_word_is_treated_as_a_miss() {
        let cfg = RoundConfig::default();
        let mut s = Scorer::default();
        s.submit("plan", &space(), &cfg);
        let out = s.submit("plan", &space(), &cfg);
        assert_eq!(
            out,
            SubmitOutcome::Rejected {
                reason: RejectReason::AlreadyFound,
                penalty: 5
            }
        );
        assert_eq!(s.score, 35);
        assert_eq!(s.combo, 1);
        assert_eq!(s.combo_decay, 0.0);
        assert_eq!(s.found.iter().count(), 1);
    }

    #[test]
    fn combo_expires_after_the_window() {
        let cfg = RoundConfig::default();
        let mut s = Scorer::default();
        s.submit("plan", &space(), &cfg);
        s.decay(3.0);
        assert_eq!(s.combo, 2);
        assert_eq!(s.combo_decay, 2.0);
        s.decay(2.5);
        assert_eq!(s.combo, 1);
        assert_eq!(s.combo_decay, 0.0);
        s.decay(1.0);
        assert_eq!(s.combo, 1);
        assert_eq!(s.combo_decay, 0.0);
    }

    #[test]
    fn found_words_keep_discovery_order() {
        let cfg = RoundConfig::default();
        let mut s = Scorer::default();
        for w in ["tan", "set", "ant"] {
            s.submit(w, &space(), &cfg);
        }
        let listed: Vec<&str> = s.found.iter().map(String::as_str).collect();
        assert_eq!(listed, vec!["tan", "set", "ant"]);
        s.reset_found();
        assert_eq!(s.found.iter().count(), 0);
        assert!(!s.found.contains("tan"));
    }
}
