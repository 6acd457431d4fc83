//! Entropic impurity, split selection, and the chi-square statistic.
use std::collections::HashSet;

use crate::sample::{ColumnType, Example, Schema};
use super::split_rule::{Answer, Predicate, PredicateKey};


/// Returns the binary Shannon entropy of the target distribution
/// of `examples`.
/// A pure set has entropy `0`;
/// a perfectly balanced set has entropy `1`.
/// The empty set is defined to have entropy `0` so that
/// weighted averages over partitions stay well-defined.
#[inline]
pub fn entropy(examples: &[&Example]) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }

    let total = examples.len() as f64;
    let positive = examples.iter()
        .filter(|example| example.target())
        .count() as f64;

    let p = positive / total;
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    let q = 1.0 - p;

    -(p * p.log2() + q * q.log2())
}


/// Returns the example-count-weighted average entropy of the two
/// subsets induced by `predicate`.
/// A predicate that sends every example to one side scores exactly
/// the parent entropy, i.e. yields no information gain.
#[inline]
pub fn conditional_entropy(examples: &[&Example], predicate: &Predicate)
    -> f64
{
    let (yes, no) = partition(examples, predicate);
    let total = examples.len() as f64;

    let p_yes = yes.len() as f64 / total;
    let p_no = no.len() as f64 / total;

    p_yes * entropy(&yes) + p_no * entropy(&no)
}


/// Split `examples` into the subsets answering
/// [`Answer::Yes`] and [`Answer::No`] to `predicate`.
pub(crate) fn partition<'a>(
    examples: &[&'a Example],
    predicate: &Predicate,
) -> (Vec<&'a Example>, Vec<&'a Example>)
{
    let mut yes = Vec::new();
    let mut no = Vec::new();
    for &example in examples {
        match predicate.apply(example) {
            Answer::Yes => { yes.push(example); },
            Answer::No => { no.push(example); },
        }
    }

    (yes, no)
}


/// Returns the unused predicate minimizing conditional entropy,
/// or `None` if every candidate is already in `used`.
///
/// Candidates are generated from the values observed in `examples`,
/// scanning columns in schema order and rows in example order;
/// ties keep the first candidate encountered,
/// so selection is deterministic for a fixed column and row order.
pub(crate) fn best_split(
    schema: &Schema,
    examples: &[&Example],
    used: &HashSet<PredicateKey>,
    epsilon: f64,
) -> Option<Predicate>
{
    let mut seen = used.clone();
    let mut best_score = f64::INFINITY;
    let mut best: Option<Predicate> = None;

    for column in schema.feature_columns() {
        let name = schema.name(column);
        for &example in examples {
            let candidate = match schema.column_type(column) {
                ColumnType::Numeric => {
                    Predicate::less_than(
                        column, name, example.numeric(column),
                    )
                },
                ColumnType::Categorical => {
                    Predicate::equal_to(
                        column, name, example.categorical(column),
                    )
                },
            };

            if !seen.insert(candidate.key(epsilon)) {
                continue;
            }

            let score = conditional_entropy(examples, &candidate);
            if score < best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
    }

    best
}


/// The chi-square statistic of a split,
/// comparing the observed positive/negative counts of each branch
/// against the counts expected when the branch is drawn from the
/// parent's target distribution.
/// Cells with zero expected count contribute nothing.
pub(crate) fn chi_square(
    parent: &[&Example],
    yes: &[&Example],
    no: &[&Example],
) -> f64
{
    let total = parent.len() as f64;
    let positive_rate = parent.iter()
        .filter(|example| example.target())
        .count() as f64
        / total;
    let negative_rate = 1.0 - positive_rate;

    let mut statistic = 0.0;
    for branch in [yes, no] {
        let size = branch.len() as f64;
        let observed_positive = branch.iter()
            .filter(|example| example.target())
            .count() as f64;
        let observed_negative = size - observed_positive;

        let cells = [
            (observed_positive, positive_rate * size),
            (observed_negative, negative_rate * size),
        ];
        for (observed, expected) in cells {
            if expected > 0.0 {
                statistic += (observed - expected).powi(2) / expected;
            }
        }
    }

    statistic
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Value;

    // One numeric column `X` plus the target column.
    fn example(x: f64, target: bool) -> Example {
        let raw = if target { "1" } else { "0" };
        let values = vec![
            Value::Numeric(x),
            Value::Categorical(raw.to_string()),
        ];
        Example::new(values, target)
    }


    #[test]
    fn entropy_is_zero_on_pure_sets() {
        let examples = vec![example(1.0, true), example(2.0, true)];
        let refs = examples.iter().collect::<Vec<_>>();
        assert_eq!(entropy(&refs), 0.0);

        let examples = vec![example(1.0, false)];
        let refs = examples.iter().collect::<Vec<_>>();
        assert_eq!(entropy(&refs), 0.0);

        assert_eq!(entropy(&[]), 0.0);
    }


    #[test]
    fn entropy_is_one_on_balanced_sets() {
        let examples = vec![
            example(1.0, true),
            example(2.0, false),
            example(3.0, true),
            example(4.0, false),
        ];
        let refs = examples.iter().collect::<Vec<_>>();
        assert!((entropy(&refs) - 1.0).abs() < 1e-12);
    }


    #[test]
    fn perfect_split_has_zero_conditional_entropy() {
        let examples = vec![
            example(1.0, true),
            example(2.0, true),
            example(3.0, false),
            example(4.0, false),
        ];
        let refs = examples.iter().collect::<Vec<_>>();
        let predicate = Predicate::less_than(0, "X", 3.0);
        assert_eq!(conditional_entropy(&refs, &predicate), 0.0);
    }


    #[test]
    fn degenerate_split_scores_the_parent_entropy() {
        let examples = vec![
            example(1.0, true),
            example(2.0, false),
            example(3.0, false),
        ];
        let refs = examples.iter().collect::<Vec<_>>();
        // `X < 1` sends every example to the `No` side.
        let predicate = Predicate::less_than(0, "X", 1.0);
        let conditional = conditional_entropy(&refs, &predicate);
        assert!((conditional - entropy(&refs)).abs() < 1e-12);
    }


    #[test]
    fn chi_square_of_a_perfect_balanced_split_is_the_sample_size() {
        let examples = (0..8)
            .map(|i| example(i as f64, i < 4))
            .collect::<Vec<_>>();
        let refs = examples.iter().collect::<Vec<_>>();
        let predicate = Predicate::less_than(0, "X", 4.0);
        let (yes, no) = partition(&refs, &predicate);

        let statistic = chi_square(&refs, &yes, &no);
        assert!((statistic - 8.0).abs() < 1e-12);
    }


    #[test]
    fn chi_square_of_an_uninformative_split_is_zero() {
        // Both branches mirror the parent's 50/50 distribution.
        let examples = vec![
            example(1.0, true),
            example(1.0, false),
            example(5.0, true),
            example(5.0, false),
        ];
        let refs = examples.iter().collect::<Vec<_>>();
        let predicate = Predicate::less_than(0, "X", 5.0);
        let (yes, no) = partition(&refs, &predicate);

        assert!(chi_square(&refs, &yes, &no).abs() < 1e-12);
    }
}
