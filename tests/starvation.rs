use minitrees::prelude::*;
use minitrees::Aggregator;

use std::sync::Arc;
use std::time::Duration;


// Generous bound so that a broken build fails instead of hanging.
const GUARD: Duration = Duration::from_secs(30);


// `f1` takes six values, so the second level
// submits six aggregators.
fn wide() -> Dataset {
    let names = ["f1", "f2", "f3", "class"];
    let rows = (0..24)
        .map(|i| {
            vec![
                format!("v{}", i % 6),
                format!("w{}", i % 4),
                format!("u{}", i % 3),
                format!("{}", (i % 6) / 2),
            ]
        })
        .collect::<Vec<_>>();
    Dataset::from_rows(&names, rows).unwrap()
}


#[test]
fn single_worker_pools_complete() {
    let data = wide();
    let expected = SequentialBuilder::new(&data).build().unwrap();

    let eval_pool = Arc::new(WorkerPool::named(1, "eval").unwrap());
    let aggregator_pool = Arc::new(WorkerPool::named(1, "aggregator").unwrap());
    let root = ParallelBuilder::new(Arc::new(data), eval_pool, aggregator_pool)
        .stall_timeout(GUARD)
        .build()
        .unwrap();

    assert_eq!(root.children().len(), 6);
    assert_eq!(root, expected);
}


#[test]
fn more_aggregators_than_workers_complete() {
    let data = Arc::new(wide());
    let eval_pool = Arc::new(WorkerPool::named(1, "eval").unwrap());
    let aggregator_pool = WorkerPool::named(2, "aggregator").unwrap();

    // Eight pending aggregators on two workers,
    // each spawning three evaluations on a distinct pool.
    let futures = (0..8)
        .map(|_| {
            let aggregator = Aggregator::new(
                Arc::clone(&data), Arc::clone(&eval_pool), &[], 3
            ).stall_timeout(Some(GUARD));
            aggregator_pool.submit(move || aggregator.run())
        })
        .collect::<Vec<_>>();

    for future in futures {
        let children = future.wait_timeout(GUARD).unwrap().unwrap();
        assert_eq!(children.len(), 6);
    }
}


#[test]
fn shared_pool_stalls() {
    // Routing both kinds of unit through one worker:
    // the aggregator occupies it while its evaluations wait in the queue.
    // This is the only shared size whose outcome does not depend on timing.
    let shared = Arc::new(WorkerPool::named(1, "shared").unwrap());
    let result = ParallelBuilder::new(Arc::new(wide()), Arc::clone(&shared), shared)
        .stall_timeout(Duration::from_millis(200))
        .build();

    assert!(
        matches!(result, Err(TreeError::Stalled(_))),
        "expected a stall, got {result:?}"
    );
}


#[test]
fn shared_pool_with_spare_workers_never_hangs() {
    // With two shared workers, whether an evaluation is picked up
    // before both workers block depends on scheduling.
    // The bounded wait turns either outcome into a return value.
    let shared = Arc::new(WorkerPool::named(2, "shared").unwrap());
    let result = ParallelBuilder::new(Arc::new(wide()), Arc::clone(&shared), shared)
        .stall_timeout(Duration::from_millis(200))
        .build();

    match result {
        Ok(root) => assert!(root.n_nodes() > 1),
        Err(TreeError::Stalled(_)) => {},
        Err(e) => panic!("expected a tree or a stall, got {e:?}"),
    }
}
