use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use wordgen_core::{OutputTarget, WriteMode};

use super::OutputSink;

/// Buffered file destination that counts the bytes it writes.
///
/// Dropping the sink flushes the buffer on a best-effort basis; call
/// [`OutputSink::finish`] to observe flush errors.
pub struct FileSink {
    writer: CountingWriter<BufWriter<File>>,
}

impl FileSink {
    /// Open the target, truncating in overwrite mode and appending otherwise.
    pub fn open(target: &OutputTarget) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        match target.mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(&target.path)?;

        Ok(Self {
            writer: CountingWriter::new(BufWriter::new(file)),
        })
    }
}

impl OutputSink for FileSink {
    fn write_line(&mut self, entry: &str) -> io::Result<()> {
        self.writer.write_all(entry.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn finish(&mut self) -> io::Result<u64> {
        self.writer.flush()?;
        Ok(self.writer.bytes_written())
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
