//! Dual console/file output for one category.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::errors::{io_error, Result};

/// Writes report lines to the console stream and the category's file.
///
/// The file side is exclusively owned by the running category. Call
/// [`close`](Self::close) at category end; dropping the sink also flushes
/// through `BufWriter`, but only `close` reports a flush failure.
pub struct ReportSink {
    console: Box<dyn Write>,
    file: Box<dyn Write>,
}

impl ReportSink {
    pub fn new(console: Box<dyn Write>, file: Box<dyn Write>) -> Self {
        Self { console, file }
    }

    /// Console on stdout, file truncated at `path`
    pub fn open_file(path: &Path) -> Result<Self> {
        Self::open_file_with_console(path, Box::new(io::stdout()))
    }

    pub fn open_file_with_console(path: &Path, console: Box<dyn Write>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("open_report", e))?;
            }
        }
        let file = File::create(path).map_err(|e| io_error("open_report", e))?;
        Ok(Self::new(console, Box::new(BufWriter::new(file))))
    }

    /// Write a line to both sinks
    pub fn both(&mut self, line: &str) -> Result<()> {
        self.console(line)?;
        self.file(line)
    }

    /// Write a line to the console only
    pub fn console(&mut self, line: &str) -> Result<()> {
        writeln!(self.console, "{}", line).map_err(|e| io_error("write_console", e))
    }

    /// Write a line to the report file only
    pub fn file(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "{}", line).map_err(|e| io_error("write_report", e))
    }

    /// Flush both sides and release the file
    pub fn close(mut self) -> Result<()> {
        self.console
            .flush()
            .map_err(|e| io_error("write_console", e))?;
        self.file.flush().map_err(|e| io_error("close_report", e))
    }
}

/// In-memory writer whose contents stay readable after the sink is gone.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
