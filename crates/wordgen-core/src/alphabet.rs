use std::collections::BTreeSet;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Feature flags that select which characters make up the alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetFlags {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    /// Literal extra characters, deduplicated and sorted before merging.
    pub incremental: Option<String>,
}

impl AlphabetFlags {
    /// Returns true when at least one flag contributes characters.
    pub fn any(&self) -> bool {
        self.lowercase
            || self.uppercase
            || self.digits
            || self.punctuation
            || self.incremental.as_deref().is_some_and(|chars| !chars.is_empty())
    }
}

/// Ordered, duplicate-free character set used for product enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    fn push_unique(&mut self, ch: char) {
        if !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
    }
}

/// Assemble the alphabet from the active flags.
///
/// Flag groups come first in the order lowercase, uppercase, digits,
/// punctuation; the incremental characters follow sorted, skipping any that
/// are already present. An empty result is valid and must be rejected by the
/// caller before product enumeration.
pub fn build_alphabet(flags: &AlphabetFlags) -> Alphabet {
    let mut alphabet = Alphabet::default();

    let groups = [
        (flags.lowercase, LOWERCASE),
        (flags.uppercase, UPPERCASE),
        (flags.digits, DIGITS),
        (flags.punctuation, PUNCTUATION),
    ];
    for (enabled, group) in groups {
        if enabled {
            group.chars().for_each(|ch| alphabet.push_unique(ch));
        }
    }

    if let Some(extra) = flags.incremental.as_deref() {
        let sorted: BTreeSet<char> = extra.chars().collect();
        sorted.into_iter().for_each(|ch| alphabet.push_unique(ch));
    }

    alphabet
}
