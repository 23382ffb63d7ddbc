//! Statistics tracking for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Statistics snapshot for one committed generation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Generation index (0 = the seed)
    pub generation: u64,
    /// Live cells in this generation
    pub live: usize,
    /// Cells born during the tick that produced this generation
    pub born: usize,
    /// Cells that survived the tick
    pub survived: usize,
    /// Cells that died during the tick
    pub died: usize,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "gen {:>5} | live {:>6} | born {:>5} | survived {:>5} | died {:>5}",
            self.generation, self.live, self.born, self.survived, self.died
        )
    }
}

/// Recorded statistics for every generation of a run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    records: Vec<Stats>,
}

impl StatsHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one generation's stats
    pub fn record(&mut self, stats: Stats) {
        self.records.push(stats);
    }

    /// All recorded generations, oldest first
    pub fn records(&self) -> &[Stats] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Save history as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Errors raised while persisting statistics
#[derive(Debug)]
pub enum StatsError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for StatsError {}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_contains_counts() {
        let stats = Stats {
            generation: 3,
            live: 12,
            born: 4,
            survived: 8,
            died: 2,
        };

        let summary = stats.summary();
        assert!(summary.contains("gen"));
        assert!(summary.contains("12"));
    }

    #[test]
    fn test_history_records_in_order() {
        let mut history = StatsHistory::new();
        assert!(history.is_empty());

        for generation in 0..3 {
            history.record(Stats {
                generation,
                live: 5,
                ..Stats::default()
            });
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.records()[2].generation, 2);
    }

    #[test]
    fn test_history_json_roundtrip() {
        let mut history = StatsHistory::new();
        history.record(Stats {
            generation: 1,
            live: 3,
            born: 3,
            survived: 0,
            died: 3,
        });

        let json = serde_json::to_string(&history.records).unwrap();
        let loaded: Vec<Stats> = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].live, 3);
    }
}
