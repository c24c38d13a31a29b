use serde::{Deserialize, Serialize};

use wordgen_core::PredicateKind;

/// Average bytes per character, including the share of the line terminator.
pub const BYTES_PER_CHARACTER: f64 = 1.4;

/// Assumed write throughput used to project wall-clock time.
pub const DEFAULT_THROUGHPUT_BYTES_PER_SEC: f64 = 1_000_000.0;

/// Pre-flight projection of output size and duration.
///
/// Values are `f64`: exact while `alphabet_size ^ entry_length` stays below
/// 2^53, rounded to ~16 significant digits beyond that. An alphabet of 100
/// characters at length 20 (1e40) is far inside the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub byte_count: f64,
    pub expected_seconds: f64,
}

/// Divisor applied to the raw combination count for each filter.
///
/// These are empirical constants approximating the share of entries the
/// filter rejects, not exact counts.
pub fn correction_divisor(predicate: PredicateKind) -> f64 {
    match predicate {
        PredicateKind::None => 1.0,
        PredicateKind::Smart => 1.3,
        PredicateKind::SmartPlus => 1.35,
    }
}

/// Estimate the output of an alphabet product run at the default throughput.
pub fn estimate(entry_length: usize, alphabet_size: usize, predicate: PredicateKind) -> Estimate {
    estimate_with_throughput(
        entry_length,
        alphabet_size,
        predicate,
        DEFAULT_THROUGHPUT_BYTES_PER_SEC,
    )
}

/// Estimate the output of an alphabet product run. Constant time.
pub fn estimate_with_throughput(
    entry_length: usize,
    alphabet_size: usize,
    predicate: PredicateKind,
    throughput_bytes_per_sec: f64,
) -> Estimate {
    let combinations = (alphabet_size as f64).powf(entry_length as f64);
    let accepted = combinations / correction_divisor(predicate);
    let byte_count = accepted * entry_length as f64 * BYTES_PER_CHARACTER;
    let expected_seconds = if throughput_bytes_per_sec > 0.0 {
        byte_count / throughput_bytes_per_sec
    } else {
        f64::INFINITY
    };

    Estimate {
        byte_count,
        expected_seconds,
    }
}
