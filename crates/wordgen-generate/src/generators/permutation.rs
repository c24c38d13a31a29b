use std::io;

use super::Emitter;
use crate::output::OutputSink;

/// Write each seed word verbatim, then every ordering of the full list
/// concatenated without a separator.
///
/// Seed words bypass the filter; concatenations go through it. Orderings are
/// produced by Heap's algorithm, so each of the `n!` positional orderings
/// appears exactly once, in no particular order.
pub fn enumerate<S: OutputSink + ?Sized>(
    words: &[String],
    emitter: &mut Emitter<'_, S>,
) -> io::Result<()> {
    for word in words {
        emitter.emit_unfiltered(word)?;
    }

    let count = words.len();
    if count < 2 {
        return Ok(());
    }

    let capacity = words.iter().map(String::len).sum();
    let mut entry = String::with_capacity(capacity);
    let mut order: Vec<usize> = (0..count).collect();
    let mut counters = vec![0_usize; count];

    write_ordering(words, &order, &mut entry, emitter)?;

    let mut level = 1;
    while level < count {
        if counters[level] < level {
            if level % 2 == 0 {
                order.swap(0, level);
            } else {
                order.swap(counters[level], level);
            }
            write_ordering(words, &order, &mut entry, emitter)?;
            counters[level] += 1;
            level = 1;
        } else {
            counters[level] = 0;
            level += 1;
        }
    }

    Ok(())
}

fn write_ordering<S: OutputSink + ?Sized>(
    words: &[String],
    order: &[usize],
    entry: &mut String,
    emitter: &mut Emitter<'_, S>,
) -> io::Result<()> {
    entry.clear();
    for index in order {
        entry.push_str(&words[*index]);
    }
    emitter.emit(entry)
}
