//! Streaming wordlist generation engine for wordgen.
//!
//! This crate consumes a resolved [`wordgen_core::GenerationRequest`] and
//! writes every accepted entry to an [`output::OutputSink`] as soon as it is
//! produced. Nothing is buffered in aggregate.

pub mod engine;
pub mod errors;
pub mod estimate;
pub mod generators;
pub mod model;
pub mod output;
pub mod predicate;

pub use engine::{AlwaysProceed, ConfirmationGate, EnumerationEngine, GenerationOutcome};
pub use errors::GenerationError;
pub use estimate::{Estimate, estimate};
pub use model::{GenerateOptions, GenerationReport};
pub use output::{FileSink, MemorySink, OutputSink};
pub use predicate::AcceptancePredicate;
