use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::error::{ConcatError, Result};

/// Streams the finished output file into `writer` byte for byte and returns
/// the number of bytes copied.
pub fn emit(output: &Path, writer: &mut dyn Write) -> Result<u64> {
    let emit_err = |source| ConcatError::Emit {
        path: output.to_path_buf(),
        source,
    };

    let file = File::open(output).map_err(emit_err)?;
    let mut reader = BufReader::new(file);
    let copied = io::copy(&mut reader, writer).map_err(emit_err)?;
    writer.flush().map_err(emit_err)?;

    debug!("emitted {} bytes from {:?}", copied, output);
    Ok(copied)
}
