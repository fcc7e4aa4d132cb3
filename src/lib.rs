//! Concatenates input files onto an output file, in order, then streams the
//! result out.

pub mod aggregator;
pub mod cli;
pub mod emitter;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod worker;

pub use aggregator::{aggregate, AggregateReport, AggregationState, FileAggregator, Status};
pub use cli::{Cli, Config};
pub use emitter::emit;
pub use error::{ConcatError, Result, ValidationReason};
pub use input::InputFileList;
pub use pipeline::{run, RunSummary};
