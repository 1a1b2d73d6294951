//! Output sinks with scoped capture.
//!
//! Views write their rendered text to an [`OutputSink`]. By default a sink
//! forwards to standard output; [`OutputSink::capture`] temporarily redirects
//! everything into an in-memory buffer until the returned [`CaptureGuard`]
//! is finished or dropped.
//!
//! The guard restores the previous destination on every exit path, so an
//! error propagated with `?` while capturing never leaves the sink redirected:
//!
//! ```rust
//! use tableau_render::OutputSink;
//!
//! let mut sink = OutputSink::memory();
//! sink.write_str("before ").unwrap();
//!
//! let mut capture = sink.capture();
//! capture.write_str("captured").unwrap();
//! assert_eq!(capture.finish(), "captured");
//!
//! sink.write_str("after").unwrap();
//! assert!(!sink.is_capturing());
//! assert_eq!(sink.contents(), Some("before after"));
//! ```

use std::fmt;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Where a sink sends text when nothing is capturing it.
enum Destination {
    /// Standard output of the process
    Stdout,
    /// An in-memory string, readable with [`OutputSink::contents`]
    Memory(String),
    /// Any other writer
    Writer(Box<dyn Write>),
}

/// A text sink with a stack of capture buffers.
pub struct OutputSink {
    destination: Destination,
    captures: Vec<String>,
}

impl OutputSink {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self::with_destination(Destination::Stdout)
    }

    /// A sink collecting everything in memory.
    pub fn memory() -> Self {
        Self::with_destination(Destination::Memory(String::new()))
    }

    /// A sink forwarding to an arbitrary writer.
    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self::with_destination(Destination::Writer(Box::new(writer)))
    }

    fn with_destination(destination: Destination) -> Self {
        Self {
            destination,
            captures: Vec::new(),
        }
    }

    /// Writes text to the innermost active capture, or to the destination.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        if let Some(buffer) = self.captures.last_mut() {
            buffer.push_str(text);
            return Ok(());
        }

        match &mut self.destination {
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(text.as_bytes())
            }
            Destination::Memory(buffer) => {
                buffer.push_str(text);
                Ok(())
            }
            Destination::Writer(writer) => writer.write_all(text.as_bytes()),
        }
    }

    /// Flushes the underlying destination.
    pub fn flush(&mut self) -> io::Result<()> {
        match &mut self.destination {
            Destination::Stdout => io::stdout().flush(),
            Destination::Memory(_) => Ok(()),
            Destination::Writer(writer) => writer.flush(),
        }
    }

    /// Starts capturing output into a fresh buffer.
    ///
    /// Captures nest: the innermost guard receives all writes until it is
    /// finished or dropped.
    pub fn capture(&mut self) -> CaptureGuard<'_> {
        let depth = self.captures.len();
        self.captures.push(String::new());
        CaptureGuard {
            sink: self,
            depth,
            released: false,
        }
    }

    /// Whether any capture is currently active.
    pub fn is_capturing(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of nested captures currently active.
    pub fn capture_depth(&self) -> usize {
        self.captures.len()
    }

    /// Text written to a [`memory`](Self::memory) sink outside of captures.
    ///
    /// Returns `None` for stdout and writer-backed sinks.
    pub fn contents(&self) -> Option<&str> {
        match &self.destination {
            Destination::Memory(buffer) => Some(buffer.as_str()),
            _ => None,
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = match &self.destination {
            Destination::Stdout => "stdout",
            Destination::Memory(_) => "memory",
            Destination::Writer(_) => "writer",
        };
        f.debug_struct("OutputSink")
            .field("destination", &destination)
            .field("capture_depth", &self.captures.len())
            .finish()
    }
}

/// An active capture on an [`OutputSink`].
///
/// Dereferences to the sink, so rendering code can write through the guard.
/// Dropping the guard without calling [`finish`](Self::finish) discards the
/// captured text and restores the sink.
pub struct CaptureGuard<'a> {
    sink: &'a mut OutputSink,
    depth: usize,
    released: bool,
}

impl CaptureGuard<'_> {
    /// Ends the capture and returns everything written during it.
    pub fn finish(mut self) -> String {
        self.released = true;
        let captured = self.sink.captures.drain(self.depth..).next();
        captured.unwrap_or_default()
    }
}

impl Deref for CaptureGuard<'_> {
    type Target = OutputSink;

    fn deref(&self) -> &OutputSink {
        self.sink
    }
}

impl DerefMut for CaptureGuard<'_> {
    fn deref_mut(&mut self) -> &mut OutputSink {
        self.sink
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.sink.captures.truncate(self.depth);
        }
    }
}
