use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{ConcatError, Result};
use crate::input::InputFileList;
use crate::worker::{self, IoWorker};

/// Concatenates `inputs` onto the end of `output`, validating every input
/// first. Nothing is opened or created when validation fails.
pub fn aggregate<I, P>(inputs: I, output: &Path) -> Result<AggregateReport>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let inputs = InputFileList::validate(inputs)?;
    FileAggregator::new(&inputs, output).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Succeeded,
    Failed,
}

/// Progress of a single run: the next input to process and where the run
/// ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationState {
    next: usize,
    status: Status,
}

impl AggregationState {
    fn new() -> Self {
        AggregationState {
            next: 0,
            status: Status::Pending,
        }
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateReport {
    pub files: usize,
    pub bytes: u64,
}

pub struct FileAggregator<'a> {
    inputs: &'a InputFileList,
    output: PathBuf,
    state: AggregationState,
}

impl<'a> FileAggregator<'a> {
    pub fn new(inputs: &'a InputFileList, output: &Path) -> Self {
        FileAggregator {
            inputs,
            output: output.to_path_buf(),
            state: AggregationState::new(),
        }
    }

    pub fn state(&self) -> &AggregationState {
        &self.state
    }

    /// Reads each input and appends it, one request in flight at a time.
    /// On failure, bytes already appended stay in the output.
    pub fn run(&mut self) -> Result<AggregateReport> {
        match self.state.status {
            Status::Pending => {}
            Status::Succeeded => {
                debug!("aggregation for {:?} already finished", self.output);
                return Ok(AggregateReport::default());
            }
            Status::Failed => {
                return Err(ConcatError::AlreadyFailed {
                    path: self.output.clone(),
                })
            }
        }

        match self.drive() {
            Ok(report) => {
                self.state.status = Status::Succeeded;
                info!(
                    "appended {} files ({} bytes) to {:?}",
                    report.files, report.bytes, self.output
                );
                Ok(report)
            }
            Err(err) => {
                self.state.status = Status::Failed;
                Err(err)
            }
        }
    }

    fn drive(&mut self) -> Result<AggregateReport> {
        let worker = IoWorker::spawn(&self.output)?;
        let inputs = self.inputs;
        let mut report = AggregateReport::default();
        if inputs.is_empty() {
            debug!("no inputs, {:?} only created", self.output);
        }

        while let Some(path) = inputs.get(self.state.next) {
            debug!("file {}: {:?}", self.state.next, path);
            report.bytes += step(&worker, path)? as u64;
            report.files += 1;
            self.state.next += 1;
        }
        Ok(report)
    }
}

// read fully, then append; returns once the append is acknowledged
fn step(worker: &IoWorker, path: &Path) -> Result<usize> {
    let data = worker::wait(worker.submit_read(path)?)?.map_err(|source| ConcatError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    worker::wait(worker.submit_append(data)?)?.map_err(|source| ConcatError::Append {
        path: worker.output().to_path_buf(),
        source,
    })
}
