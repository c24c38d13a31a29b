use std::io;
use std::ops::Range;

use super::Emitter;
use crate::output::OutputSink;

/// Number of 9-digit candidates, `000000000` through `999999999`.
pub const ID_SPACE: u32 = 1_000_000_000;

/// Split a candidate into its nine decimal digits, most significant first.
pub fn digits_of(value: u32) -> [u8; 9] {
    let mut digits = [0_u8; 9];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Fixed exclusion rules for ID-number candidates.
///
/// The second rule compares a two-digit group with a three-digit group, so it
/// never matches; it is kept as stated.
pub fn is_excluded(digits: &[u8; 9]) -> bool {
    digits[0..3] == digits[3..6]
        || digits[3..5] == digits[5..8]
        || digits.iter().all(|digit| *digit == digits[0])
}

/// Format digits as `DDD-DD-DDDD`.
pub fn format_id(digits: &[u8; 9], out: &mut String) {
    out.clear();
    for (index, digit) in digits.iter().enumerate() {
        if index == 3 || index == 5 {
            out.push('-');
        }
        out.push(char::from(b'0' + digit));
    }
}

/// Enumerate the full 9-digit space in ascending order.
pub fn enumerate<S: OutputSink + ?Sized>(emitter: &mut Emitter<'_, S>) -> io::Result<()> {
    enumerate_range(0..ID_SPACE, emitter)
}

/// Enumerate a sub-range of the 9-digit space in ascending order.
pub fn enumerate_range<S: OutputSink + ?Sized>(
    range: Range<u32>,
    emitter: &mut Emitter<'_, S>,
) -> io::Result<()> {
    let mut entry = String::with_capacity(11);
    for value in range.start..range.end.min(ID_SPACE) {
        let digits = digits_of(value);
        if is_excluded(&digits) {
            emitter.skip();
            continue;
        }
        format_id(&digits, &mut entry);
        emitter.emit_unfiltered(&entry)?;
    }
    Ok(())
}
