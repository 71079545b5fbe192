use log::{debug, error};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::core::error::Result;
use crate::core::types::{ProbeResult, join_url};
use crate::scan::counters::ScanCounters;
use crate::scan::notify::ProbeObserver;
use crate::scan::probe::Probe;
use crate::scan::sink::ResultSink;

/// Number of workers to launch: an explicit count, or the hardware
/// parallelism times `multiplier`. Never less than one.
pub fn worker_count(threads: Option<usize>, multiplier: usize) -> usize {
    threads
        .unwrap_or_else(|| num_cpus::get().saturating_mul(multiplier))
        .max(1)
}

/// Fixed set of OS threads, one per chunk, each probing its chunk in order.
#[derive(Clone)]
pub struct WorkerPool {
    probe: Arc<dyn Probe>,
    counters: Arc<ScanCounters>,
    sink: Arc<ResultSink>,
    observers: Arc<[Arc<dyn ProbeObserver>]>,
}

impl WorkerPool {
    pub fn new(
        probe: Arc<dyn Probe>,
        counters: Arc<ScanCounters>,
        sink: Arc<ResultSink>,
        observers: Vec<Arc<dyn ProbeObserver>>,
    ) -> Self {
        Self {
            probe,
            counters,
            sink,
            observers: observers.into(),
        }
    }

    pub fn counters(&self) -> &Arc<ScanCounters> {
        &self.counters
    }

    pub fn sink(&self) -> &Arc<ResultSink> {
        &self.sink
    }

    /// Launch one worker per chunk and return immediately.
    ///
    /// Every worker is counted as running before the first one is spawned, so
    /// the running count can only reach zero once all chunks are done.
    pub fn run(&self, base_url: &str, chunks: Vec<Vec<String>>) -> Result<Vec<JoinHandle<()>>> {
        self.launch(base_url, chunks, |name, job| {
            thread::Builder::new().name(name).spawn(job)
        })
    }

    /// Spawn the workers through `spawn`. When a spawn fails, the workers
    /// already launched are joined before the error is returned.
    fn launch<F>(
        &self,
        base_url: &str,
        chunks: Vec<Vec<String>>,
        mut spawn: F,
    ) -> Result<Vec<JoinHandle<()>>>
    where
        F: FnMut(String, Job) -> io::Result<JoinHandle<()>>,
    {
        let base_url: Arc<str> = Arc::from(base_url);
        let total = chunks.len();
        self.counters.workers_started(total);

        let mut handles = Vec::with_capacity(total);
        for (index, chunk) in chunks.into_iter().enumerate() {
            let pool = self.clone();
            let base_url = Arc::clone(&base_url);
            let job: Job = Box::new(move || pool.work(&base_url, chunk));

            match spawn(format!("probe-worker-{index}"), job) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    error!("Could not spawn worker {index}: {err}");
                    for _ in index..total {
                        self.finish_worker();
                    }
                    join_all(handles);
                    return Err(err.into());
                }
            }
        }

        debug!("Launched {total} workers");
        Ok(handles)
    }

    /// Launch the workers and wait for all of them to exit.
    pub fn run_to_completion(&self, base_url: &str, chunks: Vec<Vec<String>>) -> Result<()> {
        join_all(self.run(base_url, chunks)?);
        Ok(())
    }

    fn work(&self, base_url: &str, chunk: Vec<String>) {
        let _guard = WorkerGuard { pool: self };

        for path in chunk {
            let url = join_url(base_url, &path);
            let status = self.probe.probe(&url);
            let result = ProbeResult::new(status, url);

            self.sink.add(result.clone());
            for observer in self.observers.iter() {
                observer.on_probe(&result);
            }
            self.counters.probe_visited();
        }
    }

    fn finish_worker(&self) {
        if self.counters.worker_finished() {
            debug!("Last worker exited, {} probes", self.counters.visited());
            for observer in self.observers.iter() {
                observer.on_complete();
            }
        }
    }
}

type Job = Box<dyn FnOnce() + Send>;

fn join_all(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if handle.join().is_err() {
            error!("A worker thread panicked");
        }
    }
}

/// Marks its worker as finished on drop, panics included.
struct WorkerGuard<'a> {
    pool: &'a WorkerPool,
}

impl Drop for WorkerGuard<'_> {
    fn drop(&mut self) {
        self.pool.finish_worker();
    }
}
