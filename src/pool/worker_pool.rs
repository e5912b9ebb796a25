use colored::Colorize;

use std::fmt;
use std::sync::mpsc;

use crate::error::Result;
use super::future::Future;


/// A fixed set of worker threads consuming an unordered queue of units.
///
/// Units are submitted with [`WorkerPool::submit`]
/// and observed through the returned [`Future`].
/// A unit that panics does not abort the process;
/// its future reports [`TreeError::Abandoned`](crate::TreeError::Abandoned).
pub struct WorkerPool {
    name: String,
    n_workers: usize,
    pool: rayon::ThreadPool,
}


impl WorkerPool {
    /// Construct a pool of `n_workers` threads.
    pub fn new(n_workers: usize) -> Result<Self> {
        Self::named(n_workers, "worker")
    }


    /// Construct a pool of `n_workers` threads
    /// whose threads are named `{prefix}-{index}`.
    pub fn named<S: AsRef<str>>(n_workers: usize, prefix: S) -> Result<Self> {
        assert!(n_workers > 0, "A worker pool must have a worker");
        let name = prefix.as_ref().to_string();

        let thread_prefix = name.clone();
        let panic_prefix = name.clone();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_workers)
            .thread_name(move |i| format!("{thread_prefix}-{i}"))
            .panic_handler(move |_| {
                eprintln!(
                    "{} a unit on pool `{}` panicked",
                    "[ERR]".bold().bright_red(),
                    panic_prefix,
                );
            })
            .build()?;

        Ok(Self { name, n_workers, pool })
    }


    /// Enqueue `work` for asynchronous execution by some worker.
    /// No ordering guarantee exists among submitted units.
    pub fn submit<F, T>(&self, work: F) -> Future<T>
        where F: FnOnce() -> T + Send + 'static,
              T: Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(1);
        self.pool.spawn(move || {
            // The waiter may already have given up.
            let _ = sender.send(work());
        });
        Future::new(receiver)
    }


    /// Returns the number of workers.
    #[inline]
    pub fn n_workers(&self) -> usize {
        self.n_workers
    }


    /// Returns the name of this pool.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}


impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.name)
            .field("n_workers", &self.n_workers)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeError;
    use std::time::Duration;

    #[test]
    fn submitted_unit_completes() {
        let pool = WorkerPool::new(2).unwrap();
        let future = pool.submit(|| 6 * 7);
        assert_eq!(future.wait().unwrap(), 42);
    }

    #[test]
    fn panicking_unit_is_abandoned() {
        let pool = WorkerPool::new(1).unwrap();
        let future = pool.submit(|| -> usize { panic!("boom") });
        assert!(matches!(future.wait(), Err(TreeError::Abandoned)));

        // The pool survives the panic.
        let future = pool.submit(|| 1_usize);
        assert_eq!(future.wait().unwrap(), 1);
    }

    #[test]
    fn blocked_pool_stalls() {
        let pool = WorkerPool::new(1).unwrap();
        let (tx, rx) = mpsc::channel::<()>();

        // Occupy the only worker until the test releases it.
        let blocker = pool.submit(move || { let _ = rx.recv(); });
        let starved = pool.submit(|| 0_usize);

        let limit = Duration::from_millis(100);
        assert!(matches!(
            starved.wait_timeout(limit), Err(TreeError::Stalled(_))
        ));

        tx.send(()).unwrap();
        blocker.wait().unwrap();
    }
}
