use std::collections::HashMap;

use wordgen_core::PredicateKind;

/// Two-character sequences rarely seen in real passwords.
const BANNED_PAIRS: &[&str] = &["fx", "xf", "zk", "kz"];

/// A character appearing this many times anywhere rejects the entry.
const MAX_CHAR_OCCURRENCES: usize = 4;

/// Acceptance rule applied to each free-form candidate.
pub trait AcceptancePredicate {
    fn accept(&self, entry: &str) -> bool;
}

impl AcceptancePredicate for PredicateKind {
    fn accept(&self, entry: &str) -> bool {
        match self {
            PredicateKind::None => true,
            PredicateKind::Smart => passes_smart(entry),
            PredicateKind::SmartPlus => passes_smart(entry) && !contains_banned_pair(entry),
        }
    }
}

fn passes_smart(entry: &str) -> bool {
    let chars: Vec<char> = entry.chars().collect();
    if chars.len() < MAX_CHAR_OCCURRENCES {
        return true;
    }
    !has_frequent_char(&chars) && !has_paired_repeats(&chars)
}

fn has_frequent_char(chars: &[char]) -> bool {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in chars {
        let count = counts.entry(*ch).or_insert(0);
        *count += 1;
        if *count >= MAX_CHAR_OCCURRENCES {
            return true;
        }
    }
    false
}

/// Matches windows shaped like `aabb`.
fn has_paired_repeats(chars: &[char]) -> bool {
    chars
        .windows(4)
        .any(|window| window[0] == window[1] && window[2] == window[3])
}

fn contains_banned_pair(entry: &str) -> bool {
    BANNED_PAIRS.iter().any(|pair| entry.contains(pair))
}
