// ============================================================
// Layer 3 — Quota Allocation
// ============================================================
// Turns category frequencies and a test ratio into two quota
// maps: how many rows of each category are still owed to the
// train subset and to the test subset.
//
//   test[k]  = floor(ratio * freq[k])
//   train[k] = freq[k] - test[k]
//
// so train[k] + test[k] == freq[k] for every category.
//
// A category seen only once is rejected outright rather than
// split into a one-sided quota.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::error::StratifyError;
use crate::domain::frequency::FrequencyMap;
use crate::domain::ratio::TestRatio;
use crate::domain::subset::Subset;

/// Remaining rows owed per category, one map per side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaPlan {
    train: HashMap<String, usize>,
    test: HashMap<String, usize>,
}

/// One line of a plan as shown by the `plan` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanLine {
    pub category: String,
    pub total: usize,
    pub train: usize,
    pub test: usize,
}

impl QuotaPlan {
    /// Allocate quotas for every category in `freq`.
    pub fn allocate(freq: &FrequencyMap, ratio: TestRatio) -> Result<Self, StratifyError> {
        let singles = freq.single_entry_categories();
        if !singles.is_empty() {
            return Err(StratifyError::SingleEntryCategory { categories: singles });
        }

        let mut plan = QuotaPlan::default();
        for (category, count) in freq.iter() {
            let test = ratio.test_share(count);
            plan.train.insert(category.to_string(), count - test);
            plan.test.insert(category.to_string(), test);
        }
        Ok(plan)
    }

    /// Remaining quota of `category` on `side`, or None if unknown.
    pub fn remaining(&self, category: &str, side: Subset) -> Option<usize> {
        self.side(side).get(category).copied()
    }

    /// Take one unit of quota. Returns false, leaving the plan untouched,
    /// if the quota is unknown or already zero.
    pub(crate) fn take(&mut self, category: &str, side: Subset) -> bool {
        let map = match side {
            Subset::Train => &mut self.train,
            Subset::Test => &mut self.test,
        };
        match map.get_mut(category) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum of remaining quota on one side.
    pub fn total(&self, side: Subset) -> usize {
        self.side(side).values().sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.total(Subset::Train) == 0 && self.total(Subset::Test) == 0
    }

    /// Sorted per-category view of the plan.
    pub fn lines(&self) -> Vec<PlanLine> {
        let mut lines: Vec<PlanLine> = self
            .train
            .iter()
            .map(|(category, &train)| {
                let test = self.test.get(category).copied().unwrap_or(0);
                PlanLine {
                    category: category.clone(),
                    total: train + test,
                    train,
                    test,
                }
            })
            .collect();
        lines.sort_by(|a, b| a.category.cmp(&b.category));
        lines
    }

    fn side(&self, side: Subset) -> &HashMap<String, usize> {
        match side {
            Subset::Train => &self.train,
            Subset::Test => &self.test,
        }
    }
}
