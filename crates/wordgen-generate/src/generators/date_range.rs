use std::io;

use super::Emitter;
use crate::output::OutputSink;

/// Last year covered by a run starting at `start_year`.
///
/// Years below 100 span 100 years; later years span 1000.
pub fn end_year(start_year: u32) -> u32 {
    if start_year < 100 {
        start_year.saturating_add(99)
    } else {
        start_year.saturating_add(999)
    }
}

/// Write `MM/DD/YYYY` for every year in range, every month, and days 1 to 31.
///
/// There is no calendar validation: `02/30` and `04/31` are written too.
pub fn enumerate<S: OutputSink + ?Sized>(
    start_year: u32,
    emitter: &mut Emitter<'_, S>,
) -> io::Result<()> {
    for year in start_year..=end_year(start_year) {
        for month in 1..=12_u32 {
            for day in 1..=31_u32 {
                emitter.emit_unfiltered(&format!("{month:02}/{day:02}/{year}"))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use wordgen_core::PredicateKind;

    use super::*;
    use crate::output::MemorySink;

    #[test]
    fn end_year_span_depends_on_start() {
        assert_eq!(end_year(0), 99);
        assert_eq!(end_year(99), 198);
        assert_eq!(end_year(100), 1099);
        assert_eq!(end_year(2000), 2999);
    }

    #[test]
    fn two_digit_start_covers_one_hundred_years() {
        let mut sink = MemorySink::new();
        let mut emitter = Emitter::new(&mut sink, PredicateKind::None);
        enumerate(5, &mut emitter).expect("enumerate");

        let lines = sink.lines();
        assert_eq!(lines.len(), 100 * 12 * 31);
        assert_eq!(lines[0], "01/01/5");
        assert_eq!(lines[lines.len() - 1], "12/31/104");
    }
}
