use std::io;

use super::Emitter;
use crate::output::OutputSink;

/// Enumerate every string of `length` characters over `alphabet`, in
/// lexicographic order of the alphabet's sequence.
pub fn enumerate<S: OutputSink + ?Sized>(
    alphabet: &[char],
    length: usize,
    emitter: &mut Emitter<'_, S>,
) -> io::Result<()> {
    if alphabet.is_empty() || length == 0 {
        return Ok(());
    }

    let mut indices = vec![0_usize; length];
    let mut entry = String::with_capacity(length.saturating_mul(4));

    loop {
        entry.clear();
        entry.extend(indices.iter().map(|index| alphabet[*index]));
        emitter.emit(&entry)?;

        // odometer step from the rightmost position
        let mut position = length;
        loop {
            if position == 0 {
                return Ok(());
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < alphabet.len() {
                break;
            }
            indices[position] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use wordgen_core::PredicateKind;

    use super::*;
    use crate::output::MemorySink;

    fn run(alphabet: &str, length: usize, predicate: PredicateKind) -> (Vec<String>, u64) {
        let chars: Vec<char> = alphabet.chars().collect();
        let mut sink = MemorySink::new();
        let mut emitter = Emitter::new(&mut sink, predicate);
        enumerate(&chars, length, &mut emitter).expect("enumerate");
        let rejected = emitter.rejected();
        (sink.into_lines(), rejected)
    }

    #[test]
    fn enumerates_in_lexicographic_order() {
        let (lines, _) = run("ba", 2, PredicateKind::None);
        assert_eq!(lines, vec!["bb", "ba", "ab", "aa"]);
    }

    #[test]
    fn single_position_lists_alphabet() {
        let (lines, _) = run("xyz", 1, PredicateKind::None);
        assert_eq!(lines, vec!["x", "y", "z"]);
    }

    #[test]
    fn filter_drops_rejected_candidates() {
        let (lines, rejected) = run("ab", 4, PredicateKind::Smart);
        assert!(!lines.contains(&"aabb".to_string()));
        assert!(!lines.contains(&"aaaa".to_string()));
        assert_eq!(lines.len() as u64 + rejected, 16);
    }
}
