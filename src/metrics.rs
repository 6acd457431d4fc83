//! Confusion-matrix counters and the metrics derived from them.
use serde::{Serialize, Deserialize};

use std::fmt;


/// The outcome of evaluating a classifier over a batch of examples:
/// four confusion-matrix counters.
/// The derived metrics are computed on demand;
/// each returns `NaN` when its denominator is zero
/// (e.g. precision without a single positive prediction),
/// never a silent fallback value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct Results {
    true_positive: u64,
    true_negative: u64,
    false_positive: u64,
    false_negative: u64,
}


impl Results {
    /// Construct a result with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }


    /// Tally one classified example.
    pub fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => { self.true_positive += 1; },
            (false, false) => { self.true_negative += 1; },
            (true, false) => { self.false_positive += 1; },
            (false, true) => { self.false_negative += 1; },
        }
    }


    /// Correctly classified positive examples.
    pub fn true_positive(&self) -> u64 {
        self.true_positive
    }


    /// Correctly classified negative examples.
    pub fn true_negative(&self) -> u64 {
        self.true_negative
    }


    /// Examples classified positive that are negative.
    pub fn false_positive(&self) -> u64 {
        self.false_positive
    }


    /// Examples classified negative that are positive.
    pub fn false_negative(&self) -> u64 {
        self.false_negative
    }


    /// The number of examples tallied so far.
    pub fn total(&self) -> u64 {
        self.true_positive
            + self.true_negative
            + self.false_positive
            + self.false_negative
    }


    /// `TP / (TP + FP)`.
    /// `NaN` when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        let denominator = self.true_positive + self.false_positive;
        self.true_positive as f64 / denominator as f64
    }


    /// `TP / (TP + FN)`.
    /// `NaN` when no positive example was evaluated.
    pub fn recall(&self) -> f64 {
        let denominator = self.true_positive + self.false_negative;
        self.true_positive as f64 / denominator as f64
    }


    /// `(TP + TN) / total`.
    /// `NaN` when no example was evaluated.
    pub fn accuracy(&self) -> f64 {
        let correct = self.true_positive + self.true_negative;
        correct as f64 / self.total() as f64
    }
}


impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Precision: {:.4}", self.precision())?;
        writeln!(f, "Recall: {:.4}", self.recall())?;
        writeln!(f, "Accuracy: {:.4}", self.accuracy())
    }
}
