//! Destinations for generated entries.

mod file;
mod memory;
pub mod report;

pub use file::FileSink;
pub use memory::MemorySink;

use std::io;

/// Line-oriented destination owned by the engine for one run.
pub trait OutputSink {
    /// Write one entry followed by a newline.
    fn write_line(&mut self, entry: &str) -> io::Result<()>;

    /// Flush pending output and return the total bytes written.
    fn finish(&mut self) -> io::Result<u64>;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, entry: &str) -> io::Result<()> {
        (**self).write_line(entry)
    }

    fn finish(&mut self) -> io::Result<u64> {
        (**self).finish()
    }
}
