use minitrees::prelude::*;
use minitrees::evaluate;

use std::sync::Arc;


// Feature `A` perfectly predicts the class,
// feature `B` is unrelated to it.
//
//   A  B  class
//   x  p  yes
//   x  q  yes
//   y  p  no
//   y  q  no
fn perfect_predictor() -> Dataset {
    let names = ["A", "B", "class"];
    let rows = vec![
        vec!["x", "p", "yes"],
        vec!["x", "q", "yes"],
        vec!["y", "p", "no"],
        vec!["y", "q", "no"],
    ];
    Dataset::from_rows(&names, rows).unwrap()
}


fn check_shape(root: &TreeNode) {
    assert!(root.features().is_empty());
    assert_eq!(root.children().len(), 2);

    for child in root.children() {
        assert_eq!(child.depth(), 1);
        assert_eq!(child.features()[0].column(), 1, "depth 0 must split on A");
        assert_eq!(child.children().len(), 2);

        for grandchild in child.children() {
            assert!(grandchild.is_leaf());
            assert_eq!(grandchild.features()[1].column(), 2, "depth 1 must split on B");
        }
    }

    let mut values = root.children()
        .iter()
        .map(|child| child.features()[0].value().to_string())
        .collect::<Vec<_>>();
    values.sort();
    assert_eq!(values, vec!["x", "y"]);
}


#[test]
fn entropies_at_the_root() {
    let data = perfect_predictor();
    let a = evaluate(&data, &[], 1);
    let b = evaluate(&data, &[], 2);
    assert_eq!(a.entropy(), 0.0);
    assert!((b.entropy() - 1.0).abs() < 1e-9, "got {}", b.entropy());
}


#[test]
fn sequential_selects_a_then_b() {
    let data = perfect_predictor();
    let root = SequentialBuilder::new(&data)
        .build()
        .unwrap();

    println!("{}", root.render(2));
    check_shape(&root);
}


#[test]
fn parallel_selects_a_then_b() {
    let data = Arc::new(perfect_predictor());
    let eval_pool = Arc::new(WorkerPool::named(2, "eval").unwrap());
    let aggregator_pool = Arc::new(WorkerPool::named(2, "aggregator").unwrap());

    let root = ParallelBuilder::new(data, eval_pool, aggregator_pool)
        .verbose(true)
        .build()
        .unwrap();

    println!("{}", root.render(2));
    check_shape(&root);
}


#[test]
fn builders_agree_step_by_step() {
    let data = perfect_predictor();
    let mut seq = SequentialBuilder::new(&data);

    let eval_pool = Arc::new(WorkerPool::new(1).unwrap());
    let aggregator_pool = Arc::new(WorkerPool::new(1).unwrap());
    let mut par = ParallelBuilder::new(
        Arc::new(data.clone()), eval_pool, aggregator_pool
    );

    assert_eq!(seq.n_features().unwrap(), 2);
    assert_eq!(par.n_features().unwrap(), 2);

    for expected in [2, 4] {
        assert_eq!(seq.grow_one_level().unwrap(), expected);
        assert_eq!(par.grow_one_level().unwrap(), expected);
        assert_eq!(seq.frontier(), par.frontier());
    }
}
