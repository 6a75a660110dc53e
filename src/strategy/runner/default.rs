use std::{
    cmp,
    num::NonZeroUsize,
    thread::{Scope, ScopedJoinHandle},
    time::Instant,
};

use crate::{
    args::HarnessArgs,
    outcome::{TestOutcome, TestStatus},
    runner::TestRunner,
    test::TestMeta,
};

/// Runs tests on a pool of worker threads.
///
/// Jobs are handed to the workers through a bounded channel, outcomes come
/// back in completion order.
#[derive(Debug, Clone)]
pub struct DefaultRunner {
    threads: NonZeroUsize,
}

impl Default for DefaultRunner {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl DefaultRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_count(self, count: NonZeroUsize) -> Self {
        Self { threads: count }
    }
}

impl From<&HarnessArgs> for DefaultRunner {
    fn from(args: &HarnessArgs) -> Self {
        match args.test_threads {
            Some(threads) => Self { threads },
            None => Self::default(),
        }
    }
}

struct DefaultRunnerIterator<'t, 's, I, F, Extra>
where
    I: Iterator<Item = (F, &'t TestMeta<Extra>)>,
    F: (Fn() -> TestStatus) + Send,
    Extra: 't,
{
    source: I,
    push_job: crossbeam_channel::Sender<Option<(F, &'t TestMeta<Extra>)>>,
    wait_job: crossbeam_channel::Receiver<(&'t TestMeta<Extra>, TestOutcome)>,
    _workers: Vec<ScopedJoinHandle<'s, ()>>,
}

impl<'t, 's, I, F, Extra> DefaultRunnerIterator<'t, 's, I, F, Extra>
where
    I: Iterator<Item = (F, &'t TestMeta<Extra>)>,
    F: (Fn() -> TestStatus) + Send + 's,
    Extra: Sync + 't,
{
    fn new(worker_count: NonZeroUsize, mut source: I, scope: &'s Scope<'s, 't>) -> Self {
        let (itx, irx) = crossbeam_channel::bounded(worker_count.get());
        let (otx, orx) = crossbeam_channel::bounded(1);
        let workers = (0..worker_count.get())
            .map(|_| {
                let irx = irx.clone();
                let otx = otx.clone();
                // Every worker starts with one job, `None` if there is nothing left.
                let _ = itx.send(source.next());
                scope.spawn(move || {
                    while let Ok(Some((f, meta))) = irx.recv() {
                        let now = Instant::now();
                        let status = f();
                        let duration = now.elapsed();
                        if otx.send((meta, TestOutcome { status, duration })).is_err() {
                            return;
                        }
                    }
                })
            })
            .collect();

        Self {
            source,
            push_job: itx,
            wait_job: orx,
            _workers: workers,
        }
    }
}

impl<'t, 's, I, F, Extra> Iterator for DefaultRunnerIterator<'t, 's, I, F, Extra>
where
    I: Iterator<Item = (F, &'t TestMeta<Extra>)>,
    F: (Fn() -> TestStatus) + Send + 's,
    Extra: 't,
{
    type Item = (&'t TestMeta<Extra>, TestOutcome);

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.wait_job.recv().ok()?;
        // Refill the slot the finished job left; `None` tells a worker to stop.
        if let Err(crossbeam_channel::SendError(Some((_, meta)))) =
            self.push_job.send(self.source.next())
        {
            panic!("no worker available for job {}", meta.name);
        }
        Some(out)
    }
}

impl<Extra> TestRunner<Extra> for DefaultRunner {
    fn run<'t, 's, I, F>(
        &self,
        tests: I,
        scope: &'s Scope<'s, 't>,
    ) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: ExactSizeIterator<Item = (F, &'t TestMeta<Extra>)>,
        F: (Fn() -> TestStatus) + Send + 's,
        Extra: Sync + 't,
    {
        let worker_count = <DefaultRunner as TestRunner<Extra>>::worker_count(self, tests.len());
        DefaultRunnerIterator::new(worker_count, tests, scope)
    }

    fn worker_count(&self, tests_count: usize) -> NonZeroUsize {
        NonZeroUsize::new(cmp::min(self.threads.get(), tests_count)).unwrap_or(NonZeroUsize::MIN)
    }
}
