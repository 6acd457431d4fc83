//! The core library for the `Classifier` trait.
use rayon::prelude::*;

use crate::Sample;
use crate::metrics::Results;


/// A trait that defines the function all fitted classifiers
/// of this crate provide.
pub trait Classifier: Sync {
    /// Predicts the label of the `row`-th example of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> bool;


    /// Predicts the labels of all examples of `sample`.
    /// Rows are classified in parallel;
    /// the returned labels keep the row order.
    fn predict_all(&self, sample: &Sample) -> Vec<bool> {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect()
    }


    /// Classify every example of `sample` and compare against
    /// its true target, tallying the four confusion counters.
    fn evaluate(&self, sample: &Sample) -> Results {
        let mut results = Results::new();
        let predictions = self.predict_all(sample);
        for (predicted, example) in predictions.into_iter()
            .zip(sample.examples())
        {
            results.record(predicted, example.target());
        }

        results
    }
}
