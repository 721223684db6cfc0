use std::sync::atomic::{AtomicUsize, Ordering};

struct Config {
    multithread_threshold: AtomicUsize,
    default_max_rows: AtomicUsize,
    default_max_cols: AtomicUsize,
    worker_count: AtomicUsize,
}

static CONFIG: Config = Config {
    multithread_threshold: AtomicUsize::new(100_000),
    default_max_rows: AtomicUsize::new(2048),
    default_max_cols: AtomicUsize::new(2048),
    worker_count: AtomicUsize::new(0),
};

/// Values picked up by a [`Grid`](crate::Grid) when it is constructed.
#[derive(Clone, Copy, Debug)]
pub struct ConfigSnapshot {
    /// Populations strictly above this value are stepped on several threads.
    pub multithread_threshold: usize,
    pub default_max_rows: usize,
    pub default_max_cols: usize,
    /// Number of workers for partitioned steps, `0` means hardware parallelism.
    pub worker_count: usize,
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        multithread_threshold: CONFIG.multithread_threshold.load(Ordering::Relaxed),
        default_max_rows: CONFIG.default_max_rows.load(Ordering::Relaxed),
        default_max_cols: CONFIG.default_max_cols.load(Ordering::Relaxed),
        worker_count: CONFIG.worker_count.load(Ordering::Relaxed),
    }
}

pub fn set_multithread_threshold(threshold: usize) {
    CONFIG
        .multithread_threshold
        .store(threshold, Ordering::Relaxed);
}

pub fn set_default_max_size(max_rows: usize, max_cols: usize) {
    CONFIG.default_max_rows.store(max_rows, Ordering::Relaxed);
    CONFIG.default_max_cols.store(max_cols, Ordering::Relaxed);
}

pub fn set_worker_count(workers: usize) {
    CONFIG.worker_count.store(workers, Ordering::Relaxed);
}

/// Resolves a configured worker count, where `0` stands for "all cores".
pub(crate) fn effective_workers(configured: usize) -> usize {
    if configured != 0 {
        return configured;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn setters_are_visible_in_snapshot() {
        let before = get_config();

        set_multithread_threshold(7);
        set_default_max_size(4096, 8192);
        set_worker_count(3);
        let snapshot = get_config();
        assert_eq!(snapshot.multithread_threshold, 7);
        assert_eq!(snapshot.default_max_rows, 4096);
        assert_eq!(snapshot.default_max_cols, 8192);
        assert_eq!(snapshot.worker_count, 3);

        set_multithread_threshold(before.multithread_threshold);
        set_default_max_size(before.default_max_rows, before.default_max_cols);
        set_worker_count(before.worker_count);
    }

    #[test]
    fn zero_workers_means_hardware() {
        assert_eq!(effective_workers(5), 5);
        assert!(effective_workers(0) >= 1);
    }
}
