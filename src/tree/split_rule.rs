//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::sample::Example;


/// The output of the function `apply` of [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// The example satisfies the predicate.
    Yes,
    /// The example does not satisfy the predicate.
    No,
}


/// The comparison a [`Predicate`] performs on its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Test {
    /// `value < threshold`, for numeric columns.
    LessThan(f64),
    /// `value = label`, for categorical columns.
    EqualTo(String),
}


/// A binary test over a single column.
/// Numeric columns are compared with `<` against a threshold,
/// categorical columns with `=` against an observed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub(crate) column: usize,
    pub(crate) name: String,
    pub(crate) test: Test,
}


impl Predicate {
    /// A `value < threshold` test on a numeric column.
    pub(crate) fn less_than(column: usize, name: &str, threshold: f64)
        -> Self
    {
        let name = name.to_string();
        Self { column, name, test: Test::LessThan(threshold), }
    }


    /// A `value = label` test on a categorical column.
    pub(crate) fn equal_to(column: usize, name: &str, label: &str)
        -> Self
    {
        let name = name.to_string();
        Self { column, name, test: Test::EqualTo(label.to_string()), }
    }


    /// Defines the splitting.
    #[inline]
    pub fn apply(&self, example: &Example) -> Answer {
        let yes = match &self.test {
            Test::LessThan(threshold) => {
                example.numeric(self.column) < *threshold
            },
            Test::EqualTo(label) => {
                example.categorical(self.column) == label
            },
        };

        if yes { Answer::Yes } else { Answer::No }
    }


    /// Returns the column index this predicate tests.
    pub fn column(&self) -> usize {
        self.column
    }


    /// Returns the comparison this predicate performs.
    pub fn test(&self) -> &Test {
        &self.test
    }


    /// The normalized identity of this predicate,
    /// used to avoid re-splitting on (nearly) the same test
    /// along a root-to-leaf path.
    /// Numeric thresholds are quantized by `epsilon` so that
    /// thresholds closer than `epsilon` collapse to one key.
    pub(crate) fn key(&self, epsilon: f64) -> PredicateKey {
        let test = match &self.test {
            Test::LessThan(threshold) => {
                TestKey::LessThan((threshold / epsilon).round() as i64)
            },
            Test::EqualTo(label) => TestKey::EqualTo(label.clone()),
        };

        PredicateKey { column: self.column, test, }
    }
}


impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.test {
            Test::LessThan(threshold) => {
                write!(f, "{} < {}", self.name, threshold)
            },
            Test::EqualTo(label) => {
                write!(f, "{} = {}", self.name, label)
            },
        }
    }
}


/// Identity of a [`Predicate`] under the epsilon equality rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PredicateKey {
    column: usize,
    test: TestKey,
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum TestKey {
    LessThan(i64),
    EqualTo(String),
}
