//! Local leaderboard persistence.
//!
//! The whole list lives in one storage slot as a JSON array and is rewritten
//! on every round end: read, append, sort by score descending, cap, write.

use serde::{Deserialize, Serialize};

use crate::util::cwarn;

pub const SCORE_KEY: &str = "gf_quantum_scores";
pub const PLAYER_NAME: &str = "Player";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    /// Epoch milliseconds at round end.
    #[serde(rename = "ts")]
    pub timestamp_ms: u64,
    #[serde(rename = "theme")]
    pub theme_id: String,
}

/// A single string slot holding the serialized leaderboard.
pub trait ScoreStore {
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&mut self, raw: &str) -> Result<(), String>;
}

/// Browser `localStorage` slot.
#[derive(Clone, Debug)]
pub struct LocalScoreStore {
    key: String,
}

impl LocalScoreStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage() -> Result<web_sys::Storage, String> {
        let win = web_sys::window().ok_or("no window")?;
        match win.local_storage() {
            Ok(Some(store)) => Ok(store),
            Ok(None) => Err("localStorage unavailable".into()),
            Err(e) => Err(format!("localStorage access denied: {:?}", e)),
        }
    }
}

impl ScoreStore for LocalScoreStore {
    fn read(&self) -> Result<Option<String>, String> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| format!("read {}: {:?}", self.key, e))
    }

    fn write(&mut self, raw: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|e| format!("write {}: {:?}", self.key, e))
    }
}

/// In-memory slot for headless engines and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub raw: Option<String>,
    /// When set, every read fails with this message.
    pub fail_reads: Option<String>,
    /// When set, every write fails with this message.
    pub fail_writes: Option<String>,
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> Result<Option<String>, String> {
        if let Some(msg) = &self.fail_reads {
            return Err(msg.clone());
        }
        Ok(self.raw.clone())
    }

    fn write(&mut self, raw: &str) -> Result<(), String> {
        if let Some(msg) = &self.fail_writes {
            return Err(msg.clone());
        }
        self.raw = Some(raw.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Leaderboard<S> {
    store: S,
    cap: usize,
}

impl<S: ScoreStore> Leaderboard<S> {
    pub fn new(store: S, cap: usize) -> Self {
        Self { store, cap }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored records; anything missing or unreadable counts as an empty board.
    pub fn load(&self) -> Vec<ScoreRecord> {
        let raw = match self.store.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                cwarn(&format!("leaderboard read failed: {}", e));
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                cwarn(&format!("leaderboard corrupt, starting empty: {}", e));
                Vec::new()
            }
        }
    }

    /// Adds `record` and rewrites the capped, score-ordered list.
    /// Write failures are logged and dropped so play is never interrupted.
    pub fn append_and_persist(&mut self, record: ScoreRecord) -> Vec<ScoreRecord> {
        let mut list = self.load();
        list.push(record);
        list.sort_by(|a, b| b.score.cmp(&a.score));
        list.truncate(self.cap);
        match serde_json::to_string(&list) {
            Ok(raw) => {
                if let Err(e) = self.store.write(&raw) {
                    cwarn(&format!("could not save score: {}", e));
                }
            }
            Err(e) => cwarn(&format!("could not encode scores: {}", e)),
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(score: u32, ts: u64) -> ScoreRecord {
        ScoreRecord {
            name: PLAYER_NAME.into(),
            score,
            timestamp_ms: ts,
            theme_id: "space".into(),
        }
    }

    #[test]
    fn record_uses_the_short_json_field_names() {
        let json = serde_json::to_value(rec(40, 1_700_000_000_000)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Player", "score": 40, "ts": 1_700_000_000_000u64, "theme": "space"})
        );
    }

    #[test]
    fn appended_records_are_sorted_and_written_back() {
        let mut board = Leaderboard::new(MemoryScoreStore::default(), 50);
        board.append_and_persist(rec(10, 1));
        board.append_and_persist(rec(30, 2));
        let list = board.append_and_persist(rec(20, 3));
        let scores: Vec<u32> = list.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);
        assert_eq!(board.load(), list);
    }

    #[test]
    fn list_is_capped_at_capacity() {
        let mut board = Leaderboard::new(MemoryScoreStore::default(), 50);
        for i in 0..60 {
            board.append_and_persist(rec(i, i as u64));
        }
        let list = board.append_and_persist(rec(1000, 99));
        assert_eq!(list.len(), 50);
        assert_eq!(list[0], rec(1000, 99));
        assert!(list.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board.load().len(), 50);
    }

    #[test]
    fn low_score_falls_off_a_full_board() {
        let mut board = Leaderboard::new(MemoryScoreStore::default(), 3);
        for s in [50, 40, 30] {
            board.append_and_persist(rec(s, 0));
        }
        let list = board.append_and_persist(rec(1, 0));
        assert_eq!(list.iter().map(|r| r.score).collect::<Vec<_>>(), vec![50, 40, 30]);
    }

    #[test]
    fn equal_scores_keep_arrival_order() {
        let mut board = Leaderboard::new(MemoryScoreStore::default(), 50);
        board.append_and_persist(rec(10, 1));
        let list = board.append_and_persist(rec(10, 2));
        assert_eq!(list.iter().map(|r| r.timestamp_ms).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let store = MemoryScoreStore {
            raw: Some("{not json".into()),
            ..Default::default()
        };
        let mut board = Leaderboard::new(store, 50);
        assert!(board.load().is_empty());
        let list = board.append_and_persist(rec(5, 1));
        assert_eq!(list, vec![rec(5, 1)]);
        assert_eq!(board.load(), list);
    }

    #[test]
    fn failed_write_is_swallowed() {
        let store = MemoryScoreStore {
            fail_writes: Some("quota exceeded".into()),
            ..Default::default()
        };
        let mut board = Leaderboard::new(store, 50);
        let list = board.append_and_persist(rec(5, 1));
        assert_eq!(list.len(), 1);
        assert!(board.store().raw.is_none());
    }

    #[test]
    fn unreadable_storage_counts_as_empty() {
        let store = MemoryScoreStore {
            raw: Some(serde_json::to_string(&vec![rec(90, 1)]).unwrap()),
            fail_reads: Some("access denied".into()),
            ..Default::default()
        };
        let mut board = Leaderboard::new(store, 50);
        assert!(board.load().is_empty());
        let list = board.append_and_persist(rec(7, 2));
        assert_eq!(list, vec![rec(7, 2)]);
        assert_eq!(board.store().raw.as_deref(), Some(serde_json::to_string(&list).unwrap().as_str()));
    }
}
