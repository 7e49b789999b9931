use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::config::Settings;
use crate::discovery::{PathFilter, Walker};
use crate::error::{Error, IoError, Result};
use crate::output::{LabelSet, PercentageReport};
use crate::tally::Tally;

/// Cooperative cancellation flag shared between a run and its worker.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(PercentageReport),
    /// The deadline elapsed first. The partial tally is discarded.
    TimedOut,
}

impl RunOutcome {
    pub fn report(&self) -> Option<&PercentageReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::TimedOut => None,
        }
    }
}

/// Runs one walk-then-report pass under a wall-clock deadline.
pub struct Runner {
    classifier: Arc<dyn Classifier>,
    ignore: Vec<String>,
    unwanted: LabelSet,
    deadline: Duration,
}

impl Runner {
    pub fn new(classifier: Arc<dyn Classifier>, settings: &Settings) -> Self {
        Self {
            classifier,
            ignore: settings.ignore.clone(),
            unwanted: LabelSet::new(&settings.unwanted),
            deadline: settings.deadline(),
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Walk `input` and report its language shares.
    ///
    /// The work runs on a background thread raced against the deadline. When
    /// the deadline wins the run yields [`RunOutcome::TimedOut`] and the
    /// worker is told to stop at its next step; it is never joined.
    pub fn run(&self, input: &Path) -> Result<RunOutcome> {
        let started = Instant::now();
        let metadata = fs::metadata(input).map_err(|e| IoError::stat(input, e))?;

        let cancel = CancelToken::new();
        let (tx, rx) = mpsc::channel();

        let walker = Walker::new(
            self.classifier.clone(),
            PathFilter::new(self.classifier.clone(), self.ignore.iter().cloned()),
        )
        .with_cancel(cancel.clone());
        let unwanted = self.unwanted.clone();
        let root: PathBuf = input.to_path_buf();

        thread::Builder::new()
            .name("langshare-walker".to_string())
            .spawn(move || {
                let result = walk_and_report(&walker, &root, &metadata, &unwanted);
                // The receiver is gone once the run has timed out.
                let _ = tx.send(result);
            })
            .map_err(|_| Error::WorkerLost)?;

        let remaining = self.deadline.saturating_sub(started.elapsed());
        match rx.recv_timeout(remaining) {
            Ok(Ok(report)) => {
                debug!(elapsed = ?started.elapsed(), labels = report.len(), "run completed");
                Ok(RunOutcome::Completed(report))
            }
            Ok(Err(err)) => Err(err),
            Err(RecvTimeoutError::Timeout) => {
                cancel.cancel();
                info!(
                    deadline = ?self.deadline,
                    path = %input.display(),
                    "deadline elapsed, discarding run"
                );
                Ok(RunOutcome::TimedOut)
            }
            Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerLost),
        }
    }
}

fn walk_and_report(
    walker: &Walker,
    root: &Path,
    metadata: &fs::Metadata,
    unwanted: &LabelSet,
) -> Result<PercentageReport> {
    let mut tally = Tally::new();
    walker.walk_with_metadata(root, metadata, &mut tally)?;
    Ok(tally.report(unwanted))
}
