use greedytree::prelude::*;
// Both preludes export a `Schema`; the decision tree one is meant here.
use greedytree::{ColumnType, Schema};
use polars::prelude::*;


// Toy example from a census-style table.
//
//   Age  | Education | Target
//   -----+-----------+-------
//   25   | HS        | 0
//   45   | HS        | 1
//   50   | College   | 1
//
// `Age < 45` separates the negative example perfectly,
// so it must beat every imperfect split.
fn census_sample() -> Sample {
    let age = Series::new("Age", &[25.0, 45.0, 50.0]);
    let education = Series::new("Education", &["HS", "HS", "College"]);
    let target = Series::new("Target", &[0_i64, 1, 1]);

    let df = DataFrame::new(vec![age, education]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


#[test]
fn first_split_minimizes_conditional_entropy() {
    let sample = census_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let root = match tree.root() {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("An impure sample must yield a split"),
    };

    assert_eq!(root.predicate().column(), 0);
    match root.predicate().test() {
        Test::LessThan(threshold) => {
            assert!((threshold - 45.0).abs() < 1e-12);
        },
        Test::EqualTo(_) => {
            panic!("The best split is numeric, not categorical");
        },
    }
}


#[test]
fn training_examples_on_pure_paths_classify_as_themselves() {
    let sample = census_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let predictions = tree.predict_all(&sample);
    for (predicted, example) in predictions.iter().zip(sample.examples()) {
        assert_eq!(*predicted, example.target());
    }

    let results = tree.evaluate(&sample);
    assert_eq!(results.true_positive(), 2);
    assert_eq!(results.true_negative(), 1);
    assert_eq!(results.total(), 3);
    assert_eq!(results.accuracy(), 1.0);
}


#[test]
fn pure_samples_yield_a_single_leaf() {
    let x = Series::new("X", &[3.0, 1.0, 4.0, 1.0]);
    let target = Series::new("Target", &[1_i64, 1, 1, 1]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = DecisionTreeBuilder::new(&sample).build();
    match tree.root() {
        Node::Leaf(leaf) => assert!(leaf.decision()),
        Node::Branch(_) => panic!("A pure sample must yield a leaf"),
    }
}


#[test]
fn construction_is_deterministic() {
    let x = Series::new("X", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let color = Series::new(
        "Color", &["red", "blue", "red", "blue", "red", "blue"],
    );
    let target = Series::new("Target", &[0_i64, 0, 1, 1, 0, 1]);
    let df = DataFrame::new(vec![x, color]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let first = DecisionTreeBuilder::new(&sample).pruning(false).build();
    let second = DecisionTreeBuilder::new(&sample).pruning(false).build();
    assert_eq!(first, second);
}


// Walk every root-to-leaf path and check that no predicate repeats
// under the epsilon equality rule.
fn assert_no_repeats(node: &Node, path: &mut Vec<(usize, Test)>) {
    match node {
        Node::Branch(branch) => {
            let predicate = branch.predicate();
            let current = (predicate.column(), predicate.test().clone());
            for (column, test) in path.iter() {
                if *column != current.0 {
                    continue;
                }
                let repeated = match (test, &current.1) {
                    (Test::LessThan(a), Test::LessThan(b)) => {
                        (a - b).abs() < DEFAULT_EPSILON
                    },
                    (Test::EqualTo(a), Test::EqualTo(b)) => a == b,
                    _ => false,
                };
                assert!(
                    !repeated,
                    "Predicate repeated along a path: {current:?}",
                );
            }

            path.push(current);
            assert_no_repeats(branch.yes_branch(), path);
            assert_no_repeats(branch.no_branch(), path);
            path.pop();
        },
        Node::Leaf(_) => {},
    }
}


#[test]
fn no_predicate_repeats_along_any_path() {
    // `X` carries two thresholds closer than the tolerance;
    // they must collapse to a single candidate.
    let x = Series::new("X", &[5.0, 5.0 + 1e-12, 7.0, 7.0, 2.0, 2.0]);
    let color = Series::new(
        "Color", &["red", "blue", "blue", "red", "red", "blue"],
    );
    let target = Series::new("Target", &[1_i64, 0, 0, 1, 0, 1]);
    let df = DataFrame::new(vec![x, color]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let mut path = Vec::new();
    assert_no_repeats(tree.root(), &mut path);
}


#[test]
fn exhausted_candidates_fall_back_to_majority_with_ties_negative() {
    // A single constant column cannot separate anything:
    // the one candidate `X < 1` is degenerate, and once it is used
    // the candidate pool is empty.  The 2/2 tie resolves to `false`.
    let x = Series::new("X", &[1.0, 1.0, 1.0, 1.0]);
    let target = Series::new("Target", &[1_i64, 1, 0, 0]);
    let df = DataFrame::new(vec![x]).unwrap();
    let sample = Sample::from_dataframe(df, target).unwrap();

    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let predictions = tree.predict_all(&sample);
    assert!(predictions.iter().all(|prediction| !prediction));

    // With pruning enabled, the degenerate split scores zero
    // and collapses to the majority leaf directly.
    let pruned = DecisionTreeBuilder::new(&sample).build();
    match pruned.root() {
        Node::Leaf(leaf) => assert!(!leaf.decision()),
        Node::Branch(_) => {
            panic!("A zero-score split must be pruned to a leaf");
        },
    }
}


#[test]
#[should_panic]
fn building_from_an_empty_sample_panics() {
    let schema = Schema::new(
        vec!["X".to_string(), "Target".to_string()],
        vec![ColumnType::Numeric, ColumnType::Categorical],
        "Target",
    );
    let sample = Sample::new(schema, Vec::new());

    DecisionTreeBuilder::new(&sample).build();
}


#[test]
fn display_renders_nested_conditionals() {
    let sample = census_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let rendered = format!("{tree}");
    assert!(rendered.starts_with("if Age < 45"));
    assert!(rendered.contains("else"));
    assert!(rendered.contains("YES"));
    assert!(rendered.contains("NO"));
}


#[test]
fn fitted_trees_round_trip_through_json() {
    let sample = census_sample();
    let tree = DecisionTreeBuilder::new(&sample)
        .pruning(false)
        .build();

    let path = std::env::temp_dir().join("greedytree_census.json");
    tree.to_json_file(&path).unwrap();
    let reloaded = DecisionTreeClassifier::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(tree, reloaded);
}
