//! Output destinations for logger records

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where a logger writes its formatted records
#[derive(Debug, Clone, Default)]
pub enum Sink {
    /// The process standard error stream
    #[default]
    Stderr,
    /// A shared in-memory buffer
    Buffer(CaptureBuffer),
}

impl Sink {
    pub(crate) fn make_writer(&self) -> BoxMakeWriter {
        match self {
            Sink::Stderr => BoxMakeWriter::new(io::stderr),
            Sink::Buffer(buffer) => BoxMakeWriter::new(buffer.clone()),
        }
    }
}

/// In-memory sink shared between clones
///
/// Every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written records, one per line
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl io::Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureBuffer {
    type Writer = CaptureBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
