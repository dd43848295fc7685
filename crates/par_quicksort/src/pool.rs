//! Work-stealing task pool the sorts run on.
//!
//! Every entry point of the crate root goes through one process-wide pool that
//! is built lazily on first use. It holds no caller data, only rayon's
//! scheduling queues, so any number of independent sorts may share it
//! concurrently. [`TaskPool::new`] builds a dedicated pool instead.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, error, trace};
use once_cell::sync::OnceCell;

use crate::algorithms::quick_sort_parallel::SortTask;
use crate::{SortError, check_range};

const DEFAULT_THREAD_NAME_PREFIX: &str = "par-quicksort";

/// Settings for building a [`TaskPool`].
#[derive(Clone, Debug)]
pub struct PoolConfig {
    num_threads: Option<usize>,
    thread_name_prefix: String,
    stack_size: Option<usize>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
            stack_size: None,
        }
    }
}

impl PoolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of worker threads. Without it (or with `0`) rayon's default
    /// applies: `RAYON_NUM_THREADS`, else the available hardware parallelism.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = (num_threads > 0).then_some(num_threads);
        self
    }

    /// Workers are named `<prefix>-<index>`.
    pub fn thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Stack size of each worker in bytes. Recursion depth grows with the
    /// number of partitioning rounds, so very large inputs with adversarial
    /// patterns may need more than the platform default.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    fn builder(&self) -> rayon::ThreadPoolBuilder {
        let prefix = self.thread_name_prefix.clone();
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(move |index| format!("{prefix}-{index}"));
        if let Some(num_threads) = self.num_threads {
            builder = builder.num_threads(num_threads);
        }
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }
        builder
    }
}

/// A work-stealing pool running sort tasks to completion.
///
/// Dropping the pool lets its workers exit once their queues drain.
pub struct TaskPool {
    // `None` runs on rayon's implicit global pool.
    inner: Option<rayon::ThreadPool>,
}

impl TaskPool {
    pub fn new(config: PoolConfig) -> Result<Self, SortError> {
        let inner = config.builder().build()?;
        debug!(
            "task pool '{}' started with {} worker threads",
            config.thread_name_prefix,
            inner.current_num_threads()
        );
        Ok(Self { inner: Some(inner) })
    }

    fn implicit() -> Self {
        Self { inner: None }
    }

    pub fn current_num_threads(&self) -> usize {
        match &self.inner {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Runs `op` on the pool and blocks until it returns. Forks made by `op`
    /// are scheduled on the same pool. A panic in `op` or in any of its forks
    /// resumes on the calling thread.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.inner {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    pub fn sort<T>(&self, data: &mut [T])
    where
        T: Ord + Send,
    {
        self.run(data, &T::cmp);
    }

    pub fn sort_range<T>(&self, data: &mut [T], start: usize, end: usize) -> Result<(), SortError>
    where
        T: Ord + Send,
    {
        self.sort_range_by(data, start, end, T::cmp)
    }

    pub fn sort_by<T, F>(&self, data: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        self.run(data, &compare);
    }

    pub fn sort_range_by<T, F>(
        &self,
        data: &mut [T],
        start: usize,
        end: usize,
        compare: F,
    ) -> Result<(), SortError>
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        check_range(start, end, data.len())?;
        self.run(&mut data[start..=end], &compare);
        Ok(())
    }

    pub fn sort_by_key<T, K, F>(&self, data: &mut [T], key: F)
    where
        T: Send,
        K: Ord,
        F: Fn(&T) -> K + Sync,
    {
        self.run(data, &|a: &T, b: &T| key(a).cmp(&key(b)));
    }

    fn run<T, F>(&self, data: &mut [T], compare: &F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        if data.len() <= 1 {
            return;
        }
        trace!("sorting {} elements", data.len());
        self.install(|| SortTask::new(data, compare).compute());
    }
}

struct GlobalPool {
    config: OnceCell<PoolConfig>,
    pool: Mutex<Option<Arc<TaskPool>>>,
}

impl GlobalPool {
    const fn new() -> Self {
        Self {
            config: OnceCell::new(),
            pool: Mutex::new(None),
        }
    }

    fn configure(&self, config: PoolConfig) -> Result<(), SortError> {
        self.config
            .set(config)
            .map_err(|_| SortError::PoolAlreadyInitialized)
    }

    fn get(&self) -> Arc<TaskPool> {
        let mut slot = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pool) = slot.as_ref() {
            return Arc::clone(pool);
        }

        let config = self.config.get_or_init(PoolConfig::default).clone();
        let pool = match TaskPool::new(config) {
            Ok(pool) => pool,
            Err(err) => {
                error!("{err}; falling back to rayon's global pool");
                TaskPool::implicit()
            }
        };
        let pool = Arc::new(pool);
        *slot = Some(Arc::clone(&pool));
        pool
    }

    fn shutdown(&self) -> bool {
        let taken = self.pool.lock().unwrap_or_else(PoisonError::into_inner).take();
        match taken {
            Some(pool) => {
                debug!(
                    "releasing global task pool ({} worker threads)",
                    pool.current_num_threads()
                );
                true
            }
            None => false,
        }
    }
}

static GLOBAL_POOL: GlobalPool = GlobalPool::new();

/// Returns the process-wide pool, creating it on first use.
pub fn global_pool() -> Arc<TaskPool> {
    GLOBAL_POOL.get()
}

/// Sets the configuration of the process-wide pool. Only possible before the
/// pool is first used.
pub fn configure_global_pool(config: PoolConfig) -> Result<(), SortError> {
    GLOBAL_POOL.configure(config)
}

/// Releases the process-wide pool. Its workers exit once sorts still holding
/// it have finished; a later sort builds a fresh pool with the same
/// configuration. Returns whether a pool was running.
pub fn shutdown_global_pool() -> bool {
    GLOBAL_POOL.shutdown()
}
