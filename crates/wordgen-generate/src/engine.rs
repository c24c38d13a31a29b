use std::io;
use std::time::Instant;

use tracing::{info, warn};

use wordgen_core::{GenerationRequest, MAX_ENTRY_LENGTH, OutputTarget, RunMode};

use crate::errors::GenerationError;
use crate::estimate::{Estimate, estimate_with_throughput};
use crate::generators::{Emitter, date_range, national_id, permutation, product};
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::OutputSink;

/// Decision callback consulted before a large alphabet enumeration.
pub trait ConfirmationGate {
    /// Return `true` to proceed, `false` to cancel without writing anything.
    fn confirm(&mut self, estimate: &Estimate) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&Estimate) -> bool,
{
    fn confirm(&mut self, estimate: &Estimate) -> bool {
        self(estimate)
    }
}

/// Gate that always proceeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysProceed;

impl ConfirmationGate for AlwaysProceed {
    fn confirm(&mut self, _estimate: &Estimate) -> bool {
        true
    }
}

/// Result of a generation run that did not fail.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Completed(GenerationReport),
    /// The confirmation gate declined; no output was opened.
    Cancelled { estimate: Estimate },
}

/// Entry point for streaming a request's entries to a sink.
#[derive(Debug, Clone, Default)]
pub struct EnumerationEngine {
    options: GenerateOptions,
}

impl EnumerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Pre-flight estimate; only alphabet product runs have one.
    pub fn estimate(&self, request: &GenerationRequest) -> Option<Estimate> {
        match request.mode {
            RunMode::AlphabetProduct => Some(estimate_with_throughput(
                request.entry_length,
                request.alphabet.len(),
                request.predicate,
                self.options.assumed_throughput_bytes_per_sec,
            )),
            _ => None,
        }
    }

    /// Run the request, opening the sink only once the run is committed.
    ///
    /// Configuration problems and a declined confirmation both return before
    /// `open_sink` is called, so no destination is created or truncated.
    pub fn run<S, F, G>(
        &self,
        request: &GenerationRequest,
        open_sink: F,
        gate: &mut G,
    ) -> Result<GenerationOutcome, GenerationError>
    where
        S: OutputSink,
        F: FnOnce(&OutputTarget) -> io::Result<S>,
        G: ConfirmationGate + ?Sized,
    {
        check_request(request)?;

        let estimate = self.estimate(request);
        if let Some(estimate) = &estimate {
            info!(
                event = "estimate_computed",
                estimated_bytes = estimate.byte_count,
                estimated_seconds = estimate.expected_seconds,
                "pre-flight estimate"
            );
            if estimate.byte_count > self.options.confirm_threshold_bytes
                && !gate.confirm(estimate)
            {
                info!(event = "generation_cancelled", mode = %request.mode);
                return Ok(GenerationOutcome::Cancelled {
                    estimate: *estimate,
                });
            }
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut report =
            GenerationReport::new(run_id.clone(), started_at, request.mode, request.predicate);
        report.estimate = estimate;

        info!(
            run_id = %run_id,
            mode = %request.mode,
            predicate = %request.predicate,
            entry_length = request.entry_length,
            path = %request.output.path.display(),
            "generation started"
        );

        let mut sink = open_sink(&request.output)?;
        let mut emitter = Emitter::new(&mut sink, request.predicate);

        let result = match request.mode {
            RunMode::WordPermutation => permutation::enumerate(&request.seed_words, &mut emitter),
            RunMode::AlphabetProduct => product::enumerate(
                request.alphabet.chars(),
                request.entry_length,
                &mut emitter,
            ),
            RunMode::DateRange => {
                date_range::enumerate(request.start_year.unwrap_or_default(), &mut emitter)
            }
            RunMode::NationalIdNumber => national_id::enumerate(&mut emitter),
        };

        report.entries_written = emitter.written();
        report.entries_rejected = emitter.rejected();

        if let Err(err) = result {
            warn!(
                run_id = %run_id,
                entries_written = report.entries_written,
                error = %err,
                "generation failed"
            );
            return Err(err.into());
        }

        report.bytes_written = sink.finish()?;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            entries_written = report.entries_written,
            entries_rejected = report.entries_rejected,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            estimated_seconds = estimate.map(|estimate| estimate.expected_seconds),
            "generation completed"
        );

        Ok(GenerationOutcome::Completed(report))
    }
}

fn check_request(request: &GenerationRequest) -> Result<(), GenerationError> {
    let problem = match request.mode {
        RunMode::AlphabetProduct if request.alphabet.is_empty() => {
            Some("no alphabet characters selected")
        }
        RunMode::AlphabetProduct if request.entry_length == 0 => {
            Some("entry length must be positive")
        }
        RunMode::AlphabetProduct if request.entry_length > MAX_ENTRY_LENGTH => {
            Some("entry length exceeds the maximum")
        }
        RunMode::WordPermutation if request.seed_words.is_empty() => Some("no seed words supplied"),
        RunMode::DateRange if request.start_year.is_none() => Some("no start year supplied"),
        _ => None,
    };

    match problem {
        Some(message) => Err(GenerationError::Configuration(message.to_string())),
        None => Ok(()),
    }
}
