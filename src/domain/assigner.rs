// ============================================================
// Layer 3 — Row Assigner
// ============================================================
// Decides, one row at a time, whether a row goes to train or
// test, and charges that decision against the quota plan.
//
// Two modes:
//
//   Deterministic — fill a category's train quota first, then
//                   send the rest of that category to test.
//                   Output order follows input order exactly.
//
//   Shuffle       — flip a fair coin per row. If the chosen
//                   side has no quota left for the category,
//                   the row goes to the other side instead.
//
// In both modes the final per-category counts equal the plan.
// The coin only changes WHICH rows end up where, never HOW MANY.
//
// The random source is passed in by the caller so a seeded RNG
// gives a reproducible shuffle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::StratifyError;
use crate::domain::quota::QuotaPlan;
use crate::domain::subset::Subset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignMode {
    Deterministic,
    Shuffle,
}

impl From<bool> for AssignMode {
    /// `true` means shuffle.
    fn from(shuffle: bool) -> Self {
        if shuffle {
            AssignMode::Shuffle
        } else {
            AssignMode::Deterministic
        }
    }
}

/// Owns the quota plan for the duration of a split pass.
#[derive(Debug)]
pub struct RowAssigner {
    plan: QuotaPlan,
    mode: AssignMode,
}

impl RowAssigner {
    pub fn new(plan: QuotaPlan, mode: AssignMode) -> Self {
        Self { plan, mode }
    }

    /// Route one row of `category` and consume one unit of quota.
    ///
    /// `rng` is only drawn from in shuffle mode, once per row.
    pub fn assign<R: Rng + ?Sized>(
        &mut self,
        category: &str,
        rng: &mut R,
    ) -> Result<Subset, StratifyError> {
        let train_left = self
            .plan
            .remaining(category, Subset::Train)
            .ok_or_else(|| StratifyError::UnknownCategory {
                category: category.to_string(),
            })?;

        let side = match self.mode {
            AssignMode::Deterministic => {
                if train_left != 0 {
                    Subset::Train
                } else {
                    Subset::Test
                }
            }
            AssignMode::Shuffle => {
                let drawn = if rng.gen_bool(0.5) { Subset::Test } else { Subset::Train };
                // Clamp: an exhausted side forces the other one
                if self.plan.remaining(category, drawn) == Some(0) {
                    drawn.other()
                } else {
                    drawn
                }
            }
        };

        if !self.plan.take(category, side) {
            return Err(StratifyError::QuotaExhausted {
                category: category.to_string(),
            });
        }
        Ok(side)
    }

    pub fn remaining(&self, category: &str, side: Subset) -> Option<usize> {
        self.plan.remaining(category, side)
    }

    /// Quota still owed across all categories and both sides.
    pub fn remaining_total(&self) -> usize {
        self.plan.total(Subset::Train) + self.plan.total(Subset::Test)
    }

    /// True once every quota on both sides reached zero.
    pub fn is_exhausted(&self) -> bool {
        self.plan.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frequency::FrequencyMap;
    use crate::domain::ratio::TestRatio;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assigner(rows: &[&str], ratio: f64, mode: AssignMode) -> RowAssigner {
        let freq: FrequencyMap = rows.iter().copied().collect();
        let plan = QuotaPlan::allocate(&freq, TestRatio::new(ratio).unwrap()).unwrap();
        RowAssigner::new(plan, mode)
    }

    fn run(rows: &[&str], ratio: f64, mode: AssignMode, seed: u64) -> Vec<Subset> {
        let mut a   = assigner(rows, ratio, mode);
        let mut rng = StdRng::seed_from_u64(seed);
        let out: Vec<Subset> = rows.iter().map(|k| a.assign(k, &mut rng).unwrap()).collect();
        assert!(a.is_exhausted());
        out
    }

    fn count(rows: &[&str], sides: &[Subset], category: &str, side: Subset) -> usize {
        rows.iter()
            .zip(sides)
            .filter(|(k, s)| **k == category && **s == side)
            .count()
    }

    // 12 rows: A×8, B×4, interleaved
    const ROWS: [&str; 12] = ["A", "B", "A", "A", "B", "A", "A", "B", "A", "A", "B", "A"];

    #[test]
    fn test_deterministic_front_loads_train() {
        let sides = run(&ROWS, 0.25, AssignMode::Deterministic, 0);

        assert_eq!(count(&ROWS, &sides, "A", Subset::Test), 2);
        assert_eq!(count(&ROWS, &sides, "B", Subset::Test), 1);
        assert_eq!(count(&ROWS, &sides, "A", Subset::Train), 6);
        assert_eq!(count(&ROWS, &sides, "B", Subset::Train), 3);

        // For each category, every train row precedes every test row
        for cat in ["A", "B"] {
            let per_cat: Vec<Subset> = ROWS
                .iter()
                .zip(&sides)
                .filter(|(k, _)| **k == cat)
                .map(|(_, s)| *s)
                .collect();
            let first_test = per_cat.iter().position(|s| *s == Subset::Test).unwrap();
            assert!(per_cat[first_test..].iter().all(|s| *s == Subset::Test));
        }
    }

    #[test]
    fn test_deterministic_is_repeatable() {
        let a = run(&ROWS, 0.25, AssignMode::Deterministic, 1);
        let b = run(&ROWS, 0.25, AssignMode::Deterministic, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_counts_exact_for_any_seed() {
        for seed in 0..50 {
            let sides = run(&ROWS, 0.25, AssignMode::Shuffle, seed);
            assert_eq!(count(&ROWS, &sides, "A", Subset::Test), 2);
            assert_eq!(count(&ROWS, &sides, "B", Subset::Test), 1);
            assert_eq!(count(&ROWS, &sides, "A", Subset::Train), 6);
            assert_eq!(count(&ROWS, &sides, "B", Subset::Train), 3);
        }
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let a = run(&ROWS, 0.5, AssignMode::Shuffle, 42);
        let b = run(&ROWS, 0.5, AssignMode::Shuffle, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_order_varies_across_seeds() {
        let rows: Vec<&str> = std::iter::repeat("k").take(40).collect();
        let first = run(&rows, 0.5, AssignMode::Shuffle, 0);
        let differs = (1..20).any(|seed| run(&rows, 0.5, AssignMode::Shuffle, seed) != first);
        assert!(differs);
    }

    #[test]
    fn test_ratio_extremes_route_everything_one_way() {
        let all_train = run(&ROWS, 0.0, AssignMode::Shuffle, 7);
        assert!(all_train.iter().all(|s| *s == Subset::Train));

        let all_test = run(&ROWS, 1.0, AssignMode::Shuffle, 7);
        assert!(all_test.iter().all(|s| *s == Subset::Test));
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let mut a   = assigner(&["A", "A"], 0.5, AssignMode::Deterministic);
        let mut rng = StdRng::seed_from_u64(0);
        let err     = a.assign("Z", &mut rng).unwrap_err();
        assert!(matches!(err, StratifyError::UnknownCategory { .. }));
    }

    #[test]
    fn test_extra_row_reports_exhaustion() {
        for mode in [AssignMode::Deterministic, AssignMode::Shuffle] {
            let mut a   = assigner(&["A", "A"], 0.5, mode);
            let mut rng = StdRng::seed_from_u64(3);
            a.assign("A", &mut rng).unwrap();
            a.assign("A", &mut rng).unwrap();
            let err = a.assign("A", &mut rng).unwrap_err();
            assert!(matches!(err, StratifyError::QuotaExhausted { .. }));
            // Failed call leaves the plan untouched
            assert_eq!(a.remaining("A", Subset::Train), Some(0));
            assert_eq!(a.remaining("A", Subset::Test), Some(0));
        }
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(AssignMode::from(true), AssignMode::Shuffle);
        assert_eq!(AssignMode::from(false), AssignMode::Deterministic);
    }
}
