// ============================================================
// Layer 3 — Test Ratio
// ============================================================
// The fraction of every category that goes to the test subset.
// A TestRatio can only be built from a finite value in [0, 1],
// so holding one means the ratio has already been validated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::StratifyError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TestRatio(f64);

impl TestRatio {
    pub fn new(value: f64) -> Result<Self, StratifyError> {
        // NaN fails this range check too
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(StratifyError::InvalidRatio(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of rows out of `count` owed to the test subset.
    /// Truncates, so any remainder stays on the train side.
    pub fn test_share(self, count: usize) -> usize {
        (self.0 * count as f64).floor() as usize
    }

    /// True when the ratio sends nothing to test.
    pub fn is_all_train(self) -> bool {
        self.0 == 0.0
    }

    /// True when the ratio sends nothing to train.
    pub fn is_all_test(self) -> bool {
        self.0 == 1.0
    }
}

impl TryFrom<f64> for TestRatio {
    type Error = StratifyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TestRatio> for f64 {
    fn from(r: TestRatio) -> Self {
        r.0
    }
}

impl fmt::Display for TestRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
