#![warn(missing_docs)]

//!
//! A crate that grows binary decision tree classifiers
//! from labeled tabular examples.
//!
//! The input is a sample of typed rows
//! mixing categorical and continuous columns,
//! with a boolean target column
//! (e.g., predicting whether someone makes over $50K a year
//! from their census data).
//! Column types are inferred once, from the first data row.
//!
//! Trees are grown greedily:
//! every value observed in the current example set yields a
//! candidate split (`<` threshold for numeric columns,
//! `=` value for categorical columns),
//! the candidate minimizing conditional entropy wins,
//! and no test is repeated along a root-to-leaf path.
//! Splits indistinguishable from noise under a chi-square test
//! are pruned to majority-vote leaves at construction time.
//!
//! ```no_run
//! use greedytree::prelude::*;
//!
//! let (train, test) = SampleReader::new()
//!     .file("adult.csv")
//!     .target_feature("Target")
//!     .read_train_test()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(&train)
//!     .build();
//!
//! println!("{tree}");
//! println!("Test data results:");
//! println!("{}", tree.evaluate(&test));
//! ```

pub mod sample;
pub mod hypothesis;
pub mod tree;
pub mod metrics;
pub mod research;
pub mod prelude;


pub use sample::{
    ColumnType,
    Example,
    Sample,
    SampleReader,
    Schema,
    Value,
};

pub use hypothesis::Classifier;

pub use tree::{
    Answer,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    Predicate,
    Test,
};

pub use metrics::Results;

pub use research::CrossValidation;
