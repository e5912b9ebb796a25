//! The scheduling substrate: worker pools and one-shot futures.

mod worker_pool;
mod future;


pub use worker_pool::WorkerPool;
pub use future::Future;
