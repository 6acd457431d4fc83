use std::collections::HashSet;

use crate::Sample;
use crate::sample::Example;
use super::criterion::{best_split, chi_square, partition};
use super::node::Node;
use super::split_rule::PredicateKey;
use super::dtree_classifier::DecisionTreeClassifier;


/// The chi-square critical value set as default.
/// Corresponds to p ≈ 0.05 at one degree of freedom.
pub const DEFAULT_CHI_THRESHOLD: f64 = 3.84;
/// The tolerance under which two numeric thresholds
/// count as the same split, set as default.
pub const DEFAULT_EPSILON: f64 = 1e-8;


/// A struct that builds [`DecisionTreeClassifier`].
/// `DecisionTreeBuilder` keeps parameters for growing the tree.
///
/// # Example
///
/// ```no_run
/// use greedytree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .target_feature("Target")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .chi_threshold(3.84)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,

    chi_threshold: f64,
    epsilon: f64,
    pruning: bool,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// chi_threshold: DEFAULT_CHI_THRESHOLD == 3.84,
    /// epsilon: DEFAULT_EPSILON == 1e-8,
    /// pruning: true,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            chi_threshold: DEFAULT_CHI_THRESHOLD,
            epsilon: DEFAULT_EPSILON,
            pruning: true,
        }
    }


    /// Specify the chi-square critical value for pruning.
    /// Splits whose statistic falls below this value are replaced
    /// by majority-vote leaves.
    pub fn chi_threshold(mut self, threshold: f64) -> Self {
        assert!(
            threshold >= 0.0,
            "The chi-square critical value must be non-negative",
        );
        self.chi_threshold = threshold;
        self
    }


    /// Specify the tolerance under which two numeric thresholds
    /// count as the same candidate split.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        assert!(epsilon > 0.0, "The tolerance must be positive");
        self.epsilon = epsilon;
        self
    }


    /// Enable or disable chi-square pruning.
    /// Pruning is enabled by default.
    #[inline]
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }


    /// Build a [`DecisionTreeClassifier`].
    /// This method consumes `self`.
    ///
    /// # Panics
    /// Panics when the sample holds no example.
    pub fn build(self) -> DecisionTreeClassifier {
        let n_sample = self.sample.shape().0;
        assert!(
            n_sample > 0,
            "Cannot grow a decision tree from an empty sample",
        );

        let examples = self.sample.examples()
            .iter()
            .collect::<Vec<_>>();
        let root = self.grow(&examples, HashSet::new());

        DecisionTreeClassifier::from(root)
    }


    /// Grow the tree for `examples`,
    /// never re-splitting on a predicate whose key is in `used`.
    ///
    /// The recursion terminates:
    /// either the set becomes pure,
    /// or `used` grows along every path until
    /// no candidate remains and a majority leaf is emitted.
    fn grow(
        &self,
        examples: &[&Example],
        used: HashSet<PredicateKey>,
    ) -> Node
    {
        // All targets agree; nothing left to separate.
        let first = examples[0].target();
        if examples.iter().all(|example| example.target() == first) {
            return Node::leaf(first);
        }

        let schema = self.sample.schema();
        let Some(predicate) = best_split(
            schema, examples, &used, self.epsilon,
        ) else {
            // Every candidate along this path is exhausted.
            return Node::leaf(majority(examples));
        };

        let (yes, no) = partition(examples, &predicate);

        // A split indistinguishable from noise is not worth a node.
        if self.pruning
            && chi_square(examples, &yes, &no) < self.chi_threshold
        {
            return Node::leaf(majority(examples));
        }

        // Each branch rules out the predicate independently;
        // a sibling path may still use it.
        let mut used_yes = used;
        used_yes.insert(predicate.key(self.epsilon));
        let used_no = used_yes.clone();

        let yes = if yes.is_empty() {
            // Degenerate partition: the predicate separated nothing.
            // The empty side falls back to the parent majority.
            Node::leaf(majority(examples))
        } else {
            self.grow(&yes, used_yes)
        };
        let no = if no.is_empty() {
            Node::leaf(majority(examples))
        } else {
            self.grow(&no, used_no)
        };

        Node::branch(predicate, yes, no)
    }
}


// Majority vote over the targets; a tie counts as `false`.
fn majority(examples: &[&Example]) -> bool {
    let positive = examples.iter()
        .filter(|example| example.target())
        .count();

    2 * positive > examples.len()
}
