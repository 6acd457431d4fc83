//! This directory provides some features for research:
//! utilities for estimating the generalization of a fitted tree.

/// Provides train/test folds for cross validation.
pub mod cross_validation;

pub use cross_validation::CrossValidation;
