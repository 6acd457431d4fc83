use greedytree::prelude::*;
use polars::prelude::*;


fn ten_rows() -> Sample {
    let x = Series::new(
        "X", &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
    );
    let target = Series::new("Target", &[0_i64, 0, 0, 0, 0, 1, 1, 1, 1, 1]);
    let df = DataFrame::new(vec![x]).unwrap();
    Sample::from_dataframe(df, target).unwrap()
}


#[test]
fn folds_have_the_configured_shape() {
    let sample = ten_rows();
    let folds = CrossValidation::new(&sample)
        .n_folds(5)
        .collect::<Vec<_>>();

    assert_eq!(folds.len(), 5);
    for (train, test) in &folds {
        assert_eq!(train.shape().0, 8);
        assert_eq!(test.shape().0, 2);
        assert_eq!(train.schema(), sample.schema());
    }
}


#[test]
fn shuffling_with_the_same_seed_is_reproducible() {
    let sample = ten_rows();
    let first = CrossValidation::new(&sample)
        .seed(777)
        .shuffle()
        .collect::<Vec<_>>();
    let second = CrossValidation::new(&sample)
        .seed(777)
        .shuffle()
        .collect::<Vec<_>>();

    assert_eq!(first, second);
}


#[test]
fn every_fold_grows_a_usable_tree() {
    let sample = ten_rows();
    for (train, test) in CrossValidation::new(&sample).n_folds(5) {
        let tree = DecisionTreeBuilder::new(&train).build();
        let results = tree.evaluate(&test);
        assert_eq!(results.total(), test.shape().0 as u64);
    }
}
