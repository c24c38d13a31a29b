use std::env;

use tracing_subscriber::EnvFilter;
use wordgen_core::{AlphabetFlags, PredicateKind, build_alphabet};
use wordgen_generate::estimate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut max_length = 10_usize;
    let mut chars: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-length" => {
                max_length = args.next().ok_or("missing --max-length value")?.parse()?;
            }
            "--chars" => chars = args.next(),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let flags = match chars {
        Some(chars) => AlphabetFlags {
            incremental: Some(chars),
            ..AlphabetFlags::default()
        },
        None => AlphabetFlags {
            lowercase: true,
            digits: true,
            ..AlphabetFlags::default()
        },
    };
    let alphabet = build_alphabet(&flags);
    tracing::info!(alphabet_size = alphabet.len(), max_length, "estimating");

    println!("length,predicate,bytes,seconds");
    for length in 1..=max_length {
        for predicate in [PredicateKind::None, PredicateKind::Smart, PredicateKind::SmartPlus] {
            let estimate = estimate(length, alphabet.len(), predicate);
            println!(
                "{length},{predicate},{:.0},{:.3}",
                estimate.byte_count, estimate.expected_seconds
            );
        }
    }

    Ok(())
}
