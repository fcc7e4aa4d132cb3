use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, trace};

use crossbeam::channel::{self, Receiver, Sender};

use crate::error::{ConcatError, Result};

enum Task {
    Read {
        path: PathBuf,
        response: Sender<io::Result<Vec<u8>>>,
    },
    Append {
        data: Vec<u8>,
        response: Sender<io::Result<usize>>,
    },
}

/// Background thread that owns the output file and performs one I/O request
/// at a time. Every request is acknowledged on its own reply channel.
pub struct IoWorker {
    output: PathBuf,
    task_tx: Sender<Option<Task>>,
    worker_handle: Option<thread::JoinHandle<()>>,
}

impl Drop for IoWorker {
    fn drop(&mut self) {
        // A closed channel means the thread is already gone.
        let _ = self.task_tx.send(None);
        if let Some(handle) = self.worker_handle.take() {
            if handle.join().is_err() {
                debug!("i/o worker for {:?} panicked", self.output);
            }
        }
    }
}

impl IoWorker {
    /// Opens `output` for appending (creating it if needed) and hands the
    /// handle to a fresh worker thread.
    pub fn spawn(output: &Path) -> Result<Self> {
        let append_err = |source| ConcatError::Append {
            path: output.to_path_buf(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output)
            .map_err(append_err)?;

        let (tx, rx) = channel::bounded(1);
        let handle = thread::Builder::new()
            .name("filecat-io".to_string())
            .spawn(move || serve(file, rx))
            .map_err(append_err)?;

        debug!("i/o worker started for {:?}", output);
        Ok(IoWorker {
            output: output.to_path_buf(),
            task_tx: tx,
            worker_handle: Some(handle),
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Queues a whole-file read. The contents arrive on the returned channel.
    pub fn submit_read(&self, path: &Path) -> Result<Receiver<io::Result<Vec<u8>>>> {
        let (tx, rx) = channel::bounded(1);
        self.send(Task::Read {
            path: path.to_path_buf(),
            response: tx,
        })?;
        Ok(rx)
    }

    /// Queues an append to the output. The reply carries the byte count once
    /// the data has been written and flushed.
    pub fn submit_append(&self, data: Vec<u8>) -> Result<Receiver<io::Result<usize>>> {
        let (tx, rx) = channel::bounded(1);
        self.send(Task::Append { data, response: tx })?;
        Ok(rx)
    }

    fn send(&self, task: Task) -> Result<()> {
        self.task_tx
            .send(Some(task))
            .map_err(|_| ConcatError::WorkerGone)
    }
}

/// Blocks until the reply for a submitted request arrives.
pub fn wait<T>(reply: Receiver<io::Result<T>>) -> Result<io::Result<T>> {
    reply.recv().map_err(|_| ConcatError::WorkerGone)
}

fn serve(mut output: File, rx: Receiver<Option<Task>>) {
    loop {
        match rx.recv() {
            Ok(Some(Task::Read { path, response })) => {
                let result = fs::read(&path);
                trace!("read {:?}: {:?}", path, result.as_ref().map(Vec::len));
                let _ = response.send(result);
            }
            Ok(Some(Task::Append { data, response })) => {
                let result = output
                    .write_all(&data)
                    .and_then(|_| output.flush())
                    .map(|_| data.len());
                trace!("append: {:?}", result);
                let _ = response.send(result);
            }
            Ok(None) => break, // Shutdown the worker thread on None value
            Err(_) => break,   // Sender dropped
        }
    }
}
