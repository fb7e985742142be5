//! Top-score leaderboard.
//!
//! Persisted to LocalStorage as a bare JSON array of `{score, date}` entries,
//! sorted best first and capped at `MAX_LEADERBOARD`.

use crate::config::{LEADERBOARD_KEY, MAX_LEADERBOARD};
use crate::storage::{self, StorageError};
use serde::{Deserialize, Serialize};

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u32,
    /// Human-readable local time the run ended
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builds a board from arbitrary entries, restoring order and the size cap.
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score on the board, 0 when empty
    pub fn best_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Adds a finished run. Zero scores are never recorded.
    /// Returns whether the board changed.
    pub fn record(&mut self, score: u32, date: impl Into<String>) -> bool {
        if score == 0 {
            return false;
        }
        let before = self.entries.clone();
        self.entries.push(LeaderboardEntry { score, date: date.into() });
        self.normalize();
        self.entries != before
    }

    // Dedup exact (score, date) pairs keeping first occurrence, stable sort descending, truncate.
    fn normalize(&mut self) {
        let mut seen: Vec<LeaderboardEntry> = Vec::with_capacity(self.entries.len());
        for e in self.entries.drain(..) {
            if !seen.contains(&e) {
                seen.push(e);
            }
        }
        seen.sort_by(|a, b| b.score.cmp(&a.score));
        seen.truncate(MAX_LEADERBOARD);
        self.entries = seen;
    }

    /// Load from LocalStorage; missing or malformed records give an empty board.
    pub fn load() -> Self {
        let board: Leaderboard = storage::load_or_default(LEADERBOARD_KEY);
        log::info!("loaded {} leaderboard entries", board.entries.len());
        Self::from_entries(board.entries)
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::save_json(LEADERBOARD_KEY, self)?;
        log::info!("leaderboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32, date: &str) -> LeaderboardEntry {
        LeaderboardEntry { score, date: date.to_string() }
    }

    #[test]
    fn test_zero_score_is_not_recorded() {
        let mut board = Leaderboard::new();
        assert!(!board.record(0, "today"));
        assert!(board.is_empty());
        assert_eq!(board.best_score(), 0);

        let mut full = Leaderboard::from_entries(vec![entry(4, "a")]);
        let before = full.clone();
        assert!(!full.record(0, "b"));
        assert_eq!(full, before);
    }

    #[test]
    fn test_record_sorts_descending() {
        let mut board = Leaderboard::new();
        board.record(3, "a");
        board.record(12, "b");
        board.record(7, "c");
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![12, 7, 3]);
        assert_eq!(board.best_score(), 12);
    }

    #[test]
    fn test_capped_at_five() {
        let mut board = Leaderboard::new();
        for s in 1..=8 {
            board.record(s, format!("run {}", s));
        }
        assert_eq!(board.entries().len(), MAX_LEADERBOARD);
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![8, 7, 6, 5, 4]);
        // a score below the cutoff does not change the board
        assert!(!board.record(1, "late"));
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let mut board = Leaderboard::new();
        board.record(5, "same");
        assert!(!board.record(5, "same"));
        assert_eq!(board.entries().len(), 1);
        // same score, different date is a distinct entry
        assert!(board.record(5, "other"));
        assert_eq!(board.entries().len(), 2);
    }

    #[test]
    fn test_best_score_tracks_maximum() {
        let mut board = Leaderboard::new();
        for (s, d) in [(4, "a"), (9, "b"), (2, "c"), (9, "d"), (11, "e"), (1, "f")] {
            board.record(s, d);
            let max = board.entries().iter().map(|e| e.score).max().unwrap_or(0);
            assert_eq!(board.best_score(), max);
        }
    }

    #[test]
    fn test_persisted_format() {
        let board = Leaderboard::from_entries(vec![entry(10, "1/2/2025, 10:00:00 AM")]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[{"score":10,"date":"1/2/2025, 10:00:00 AM"}]"#);
        let back: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_from_entries_normalizes_unsorted_input() {
        let raw = r#"[{"score":1,"date":"x"},{"score":9,"date":"y"},{"score":1,"date":"x"},
            {"score":3,"date":"z"},{"score":4,"date":"w"},{"score":6,"date":"v"},{"score":2,"date":"u"}]"#;
        let parsed: Leaderboard = serde_json::from_str(raw).unwrap();
        let board = Leaderboard::from_entries(parsed.entries().to_vec());
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 6, 4, 3, 2]);
    }

    #[test]
    fn test_malformed_record_is_rejected() {
        assert!(serde_json::from_str::<Leaderboard>("{oops").is_err());
        assert!(serde_json::from_str::<Leaderboard>(r#"{"score":1}"#).is_err());
    }
}
