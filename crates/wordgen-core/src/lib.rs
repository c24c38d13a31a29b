//! Core contracts for wordgen.
//!
//! This crate defines the generation request, the alphabet builder, and the
//! resolution step that turns raw flags into exactly one run mode. It performs
//! no I/O.

pub mod alphabet;
pub mod error;
pub mod request;

pub use alphabet::{Alphabet, AlphabetFlags, build_alphabet};
pub use error::{Error, RequestIssue, Result};
pub use request::{
    GenerationRequest, MAX_ENTRY_LENGTH, OutputTarget, PredicateKind, RequestDraft,
    ResolvedRequest, RunMode, WriteMode, resolve_request,
};
