use std::io;

use super::OutputSink;

/// In-memory destination, for tests and small demos only.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
    bytes: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, entry: &str) -> io::Result<()> {
        self.bytes = self.bytes.saturating_add(entry.len() as u64 + 1);
        self.lines.push(entry.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<u64> {
        Ok(self.bytes)
    }
}
