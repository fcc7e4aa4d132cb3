use std::io::Write;

use log::{debug, info};

use crate::aggregator::{AggregateReport, FileAggregator};
use crate::cli::Config;
use crate::emitter;
use crate::error::Result;
use crate::input::InputFileList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub aggregate: AggregateReport,
    /// `None` when emission was turned off.
    pub emitted: Option<u64>,
}

/// Validate, aggregate, then emit the result into `stdout`. Any error ends
/// the run.
pub fn run(config: &Config, stdout: &mut dyn Write) -> Result<RunSummary> {
    let inputs = InputFileList::validate(config.inputs.iter())?;
    for (index, path) in inputs.iter().enumerate() {
        debug!("input {}: {:?}", index, path);
    }
    let aggregate = FileAggregator::new(&inputs, &config.output).run()?;

    let emitted = if config.emit {
        Some(emitter::emit(&config.output, stdout)?)
    } else {
        None
    };

    info!(
        "run complete: {} files, {} bytes appended, {:?} bytes emitted",
        aggregate.files, aggregate.bytes, emitted
    );
    Ok(RunSummary { aggregate, emitted })
}
