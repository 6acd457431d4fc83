use greedytree::prelude::*;
use polars::prelude::*;


// Eight examples split perfectly by `X < 4`:
// the chi-square statistic of that split is 8, above the 3.84 default.
fn separable_sample() -> Sample {
    let x = Series::new("X", &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let target = Series::new("Target", &[0_i64, 0, 0, 0, 1, 1, 1, 1]);
    let df = DataFrame::new(vec![x]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


// Four examples whose labels alternate along `X`:
// no single threshold does better than noise
// (the best split scores a statistic of about 1.33).
fn noisy_sample() -> Sample {
    let x = Series::new("X", &[1.0, 2.0, 3.0, 4.0]);
    let target = Series::new("Target", &[1_i64, 0, 1, 0]);
    let df = DataFrame::new(vec![x]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


#[test]
fn significant_splits_survive_pruning() {
    let sample = separable_sample();
    let tree = DecisionTreeBuilder::new(&sample).build();

    assert!(matches!(tree.root(), Node::Branch(_)));
    assert_eq!(tree.evaluate(&sample).accuracy(), 1.0);
}


#[test]
fn insignificant_splits_collapse_to_a_majority_leaf() {
    let sample = noisy_sample();
    let tree = DecisionTreeBuilder::new(&sample).build();

    match tree.root() {
        Node::Leaf(leaf) => assert!(!leaf.decision()),
        Node::Branch(_) => {
            panic!("A noise-level split must be pruned");
        },
    }
}


#[test]
fn disabling_pruning_keeps_the_split() {
    let sample = noisy_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    assert!(matches!(tree.root(), Node::Branch(_)));
}


#[test]
fn a_zero_threshold_never_prunes() {
    let sample = noisy_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .chi_threshold(0.0)
        .build();

    assert!(matches!(tree.root(), Node::Branch(_)));
}


#[test]
fn a_high_threshold_prunes_even_strong_splits() {
    let sample = separable_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .chi_threshold(100.0)
        .build();

    match tree.root() {
        // The 4/4 majority tie resolves to `false`.
        Node::Leaf(leaf) => assert!(!leaf.decision()),
        Node::Branch(_) => panic!("Everything must be pruned"),
    }
}
