use minitrees::prelude::*;
use minitrees::evaluate;

use std::sync::Arc;


// `f1` and `f2` split the rows into one pure pair and one mixed pair,
// so both have the same entropy at the root.
// `f3` is constant and scores worse.
fn tied(f1: [&str; 4], f2: [&str; 4]) -> Dataset {
    let names = ["f1", "f2", "f3", "class"];
    let class = ["0", "0", "0", "1"];
    let rows = (0..4)
        .map(|i| vec![f1[i], f2[i], "e", class[i]])
        .collect::<Vec<_>>();
    Dataset::from_rows(&names, rows).unwrap()
}


fn parallel(data: Dataset) -> TreeNode {
    let eval_pool = Arc::new(WorkerPool::new(3).unwrap());
    let aggregator_pool = Arc::new(WorkerPool::new(1).unwrap());
    ParallelBuilder::new(Arc::new(data), eval_pool, aggregator_pool)
        .build()
        .unwrap()
}


#[test]
fn tie_is_exact() {
    let data = tied(["a", "a", "b", "b"], ["c", "d", "c", "d"]);
    let h1 = evaluate(&data, &[], 1).entropy();
    let h2 = evaluate(&data, &[], 2).entropy();
    let h3 = evaluate(&data, &[], 3).entropy();
    assert_eq!(h1, h2, "the dataset must tie exactly");
    assert!(h1 < h3);
}


#[test]
fn smaller_column_wins_a_tie() {
    let data = tied(["a", "a", "b", "b"], ["c", "d", "c", "d"]);

    let root = SequentialBuilder::new(&data).build().unwrap();
    assert!(root.children().iter().all(|c| c.features()[0].column() == 1));

    let root = parallel(data);
    assert!(root.children().iter().all(|c| c.features()[0].column() == 1));
}


// `f1` and `f2` partition the rows identically into three groups,
// but the labels of the first and last group are swapped,
// so the groups are visited in opposite orders.
fn relabeled() -> Dataset {
    let names = ["f1", "f2", "class"];
    let rows = vec![
        vec!["a", "c", "0"],
        vec!["a", "c", "2"],
        vec!["b", "b", "0"],
        vec!["b", "b", "1"],
        vec!["c", "a", "0"],
        vec!["c", "a", "1"],
        vec!["c", "a", "2"],
        vec!["c", "a", "2"],
    ];
    Dataset::from_rows(&names, rows).unwrap()
}


#[test]
fn smaller_column_wins_a_relabeled_tie() {
    let data = relabeled();
    let h1 = evaluate(&data, &[], 1).entropy();
    let h2 = evaluate(&data, &[], 2).entropy();
    assert_eq!(h1.to_bits(), h2.to_bits(), "{h1} != {h2}");

    let root = SequentialBuilder::new(&data).build().unwrap();
    assert_eq!(root.children().len(), 3);
    assert!(root.children().iter().all(|c| c.features()[0].column() == 1));

    let root = parallel(data);
    assert_eq!(root.children().len(), 3);
    assert!(root.children().iter().all(|c| c.features()[0].column() == 1));
}


#[test]
fn lower_entropy_beats_a_smaller_column() {
    // `f1` is now constant, so `f2` is strictly better.
    let data = tied(["a", "a", "a", "a"], ["c", "d", "c", "d"]);

    let root = SequentialBuilder::new(&data).build().unwrap();
    assert!(root.children().iter().all(|c| c.features()[0].column() == 2));

    let root = parallel(data);
    assert!(root.children().iter().all(|c| c.features()[0].column() == 2));
}


#[test]
fn maximal_entropy_stops_the_branch() {
    // XOR: every single column leaves both classes
    // uniformly mixed, so no split beats the ceiling.
    let names = ["f1", "f2", "class"];
    let rows = vec![
        vec!["0", "0", "0"],
        vec!["0", "1", "1"],
        vec!["1", "0", "1"],
        vec!["1", "1", "0"],
    ];
    let data = Dataset::from_rows(&names, rows).unwrap();

    let root = SequentialBuilder::new(&data).build().unwrap();
    assert!(root.is_leaf());

    let root = parallel(data);
    assert!(root.is_leaf());
}


#[test]
fn uniform_node_stops_at_any_size() {
    for n_rows in [4, 6, 10, 14, 30] {
        let names = ["f1", "class"];
        let rows = (0..n_rows)
            .map(|i| vec!["a".to_string(), (i % 2).to_string()])
            .collect::<Vec<_>>();
        let data = Dataset::from_rows(&names, rows).unwrap();

        let h = evaluate(&data, &[], 1).entropy();
        assert_eq!(h, 1.0, "{n_rows} rows");

        let root = SequentialBuilder::new(&data).build().unwrap();
        assert!(root.is_leaf(), "{n_rows} rows");

        let root = parallel(data);
        assert!(root.is_leaf(), "{n_rows} rows");
    }
}
