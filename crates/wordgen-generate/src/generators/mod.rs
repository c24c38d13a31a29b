//! Enumerators for each run mode.
//!
//! Every enumerator streams entries through an [`Emitter`]; none of them
//! collects output in memory.

pub mod date_range;
pub mod national_id;
pub mod permutation;
pub mod product;

use std::io;

use wordgen_core::PredicateKind;

use crate::output::OutputSink;
use crate::predicate::AcceptancePredicate;

/// Applies the active filter and forwards accepted entries to the sink.
pub struct Emitter<'a, S: OutputSink + ?Sized> {
    sink: &'a mut S,
    predicate: PredicateKind,
    written: u64,
    rejected: u64,
}

impl<'a, S: OutputSink + ?Sized> Emitter<'a, S> {
    pub fn new(sink: &'a mut S, predicate: PredicateKind) -> Self {
        Self {
            sink,
            predicate,
            written: 0,
            rejected: 0,
        }
    }

    /// Write the entry if the filter accepts it.
    pub fn emit(&mut self, entry: &str) -> io::Result<()> {
        if self.predicate.accept(entry) {
            self.emit_unfiltered(entry)
        } else {
            self.rejected += 1;
            Ok(())
        }
    }

    /// Write the entry without consulting the filter.
    pub fn emit_unfiltered(&mut self, entry: &str) -> io::Result<()> {
        self.sink.write_line(entry)?;
        self.written += 1;
        Ok(())
    }

    /// Count a candidate dropped by a mode's own exclusion rules.
    pub fn skip(&mut self) {
        self.rejected += 1;
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}
