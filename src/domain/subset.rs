// ============================================================
// Layer 3 — Subset Tag
// ============================================================
// The two sides of a split, plus a small per-category tally of
// how many rows actually landed on each side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which output a row is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    Train,
    Test,
}

impl Subset {
    /// The side a forced reassignment goes to.
    pub fn other(self) -> Self {
        match self {
            Subset::Train => Subset::Test,
            Subset::Test => Subset::Train,
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::Train => f.write_str("train"),
            Subset::Test => f.write_str("test"),
        }
    }
}

/// Rows written to each side for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCounts {
    pub train: usize,
    pub test: usize,
}

impl SideCounts {
    pub fn total(&self) -> usize {
        self.train + self.test
    }
}

/// Per-category record of what a split pass wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetTally {
    pub categories: BTreeMap<String, SideCounts>,
}

impl SubsetTally {
    pub fn record(&mut self, category: &str, subset: Subset) {
        let counts = self.categories.entry(category.to_string()).or_default();
        match subset {
            Subset::Train => counts.train += 1,
            Subset::Test => counts.test += 1,
        }
    }

    pub fn get(&self, category: &str) -> SideCounts {
        self.categories.get(category).copied().unwrap_or_default()
    }

    pub fn train_rows(&self) -> usize {
        self.categories.values().map(|c| c.train).sum()
    }

    pub fn test_rows(&self) -> usize {
        self.categories.values().map(|c| c.test).sum()
    }
}
