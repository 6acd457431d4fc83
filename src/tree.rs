//! Decision tree induction and classification.
//! This module provides the tree growing algorithm
//! together with the underlying entropy computations.

// Provides split rules for the branch nodes.
pub(crate) mod split_rule;
// Provides the entropy engine, the split selector,
// and the chi-square statistic.
pub(crate) mod criterion;
// Provides the tree representation.
pub(crate) mod node;
// Provides the tree growing algorithm.
pub(crate) mod builder;
// Provides the fitted classifier.
pub(crate) mod dtree_classifier;


pub use split_rule::{Answer, Predicate, Test};
pub use criterion::{conditional_entropy, entropy};
pub use node::{BranchNode, LeafNode, Node};
pub use builder::{
    DecisionTreeBuilder,
    DEFAULT_CHI_THRESHOLD,
    DEFAULT_EPSILON,
};
pub use dtree_classifier::DecisionTreeClassifier;
