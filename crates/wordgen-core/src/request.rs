use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, AlphabetFlags, build_alphabet};
use crate::error::{Error, RequestIssue, Result};

/// Longest entry accepted for alphabet enumeration.
pub const MAX_ENTRY_LENGTH: usize = 1024;

/// The single traversal a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    AlphabetProduct,
    WordPermutation,
    DateRange,
    NationalIdNumber,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::AlphabetProduct => "alphabet_product",
            RunMode::WordPermutation => "word_permutation",
            RunMode::DateRange => "date_range",
            RunMode::NationalIdNumber => "national_id_number",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acceptance filter applied to free-form candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateKind {
    #[default]
    None,
    Smart,
    SmartPlus,
}

impl PredicateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PredicateKind::None => "none",
            PredicateKind::Smart => "smart",
            PredicateKind::SmartPlus => "smart_plus",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the destination file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Overwrite,
    Append,
}

/// Destination of the generated entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub mode: WriteMode,
}

/// Raw, possibly conflicting inputs collected by a front end.
#[derive(Debug, Clone, Default)]
pub struct RequestDraft {
    pub length: Option<usize>,
    pub words: Vec<String>,
    pub output: Option<PathBuf>,
    pub alphabet: AlphabetFlags,
    pub append: bool,
    /// Starting year for date-range mode.
    pub date: Option<u32>,
    pub social: bool,
    pub predicate: PredicateKind,
}

/// Immutable description of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: RunMode,
    /// Length of the entries produced. In word mode this is the length of the
    /// first seed word; in date and ID modes, the length of the first entry.
    pub entry_length: usize,
    pub seed_words: Vec<String>,
    pub alphabet: Alphabet,
    pub start_year: Option<u32>,
    pub predicate: PredicateKind,
    pub output: OutputTarget,
}

/// Request plus the warnings raised while resolving it.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub request: GenerationRequest,
    pub warnings: Vec<RequestIssue>,
}

/// Resolve raw flags into exactly one run mode.
///
/// Seed words win over a date, a date wins over the social flag, and the
/// social flag wins over alphabet enumeration. Inputs dropped by that
/// priority are reported as warnings rather than errors.
pub fn resolve_request(draft: RequestDraft) -> Result<ResolvedRequest> {
    let RequestDraft {
        length,
        words,
        output,
        alphabet: alphabet_flags,
        append,
        date,
        social,
        predicate,
    } = draft;

    let path =
        output.ok_or_else(|| Error::Configuration("output file not specified".to_string()))?;
    let output = OutputTarget {
        path,
        mode: if append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        },
    };

    let mut warnings = Vec::new();

    let mode = if !words.is_empty() {
        RunMode::WordPermutation
    } else if date.is_some() {
        RunMode::DateRange
    } else if social {
        RunMode::NationalIdNumber
    } else if alphabet_flags.any() || length.is_some() {
        RunMode::AlphabetProduct
    } else {
        return Err(Error::Configuration(
            "no run mode: supply seed words, a start year, the social flag, or alphabet flags"
                .to_string(),
        ));
    };

    if mode != RunMode::AlphabetProduct {
        if length.is_some() {
            warnings.push(RequestIssue::warning(
                "length_ignored",
                format!("{mode} mode selected; explicit length will be ignored"),
            ));
        }
        if alphabet_flags.any() {
            warnings.push(RequestIssue::warning(
                "alphabet_ignored",
                format!("{mode} mode does not use an alphabet; character flags will be ignored"),
            ));
        }
    }
    if mode == RunMode::WordPermutation && date.is_some() {
        warnings.push(RequestIssue::warning(
            "date_ignored",
            "seed words supplied; start year will be ignored",
        ));
    }
    if social && matches!(mode, RunMode::WordPermutation | RunMode::DateRange) {
        warnings.push(RequestIssue::warning(
            "social_ignored",
            format!("{mode} mode selected; social flag will be ignored"),
        ));
    }
    if predicate != PredicateKind::None
        && matches!(mode, RunMode::DateRange | RunMode::NationalIdNumber)
    {
        warnings.push(RequestIssue::warning(
            "predicate_ignored",
            format!("{mode} mode uses fixed exclusion rules; {predicate} filter will be ignored"),
        ));
    }

    let (entry_length, alphabet, start_year) = match mode {
        RunMode::WordPermutation => (words[0].chars().count(), Alphabet::default(), None),
        RunMode::DateRange => {
            let year = date.unwrap_or_default();
            (6 + year.to_string().len(), Alphabet::default(), Some(year))
        }
        RunMode::NationalIdNumber => (11, Alphabet::default(), None),
        RunMode::AlphabetProduct => {
            let length = length.ok_or_else(|| {
                Error::Configuration("no length specified for alphabet enumeration".to_string())
            })?;
            if length == 0 {
                return Err(Error::Configuration("entry length must be positive".to_string()));
            }
            if length > MAX_ENTRY_LENGTH {
                return Err(Error::Configuration(format!(
                    "entry length {length} exceeds the maximum of {MAX_ENTRY_LENGTH}"
                )));
            }
            let alphabet = build_alphabet(&alphabet_flags);
            if alphabet.is_empty() {
                return Err(Error::Configuration("no alphabet characters selected".to_string()));
            }
            (length, alphabet, None)
        }
    };

    let request = GenerationRequest {
        mode,
        entry_length,
        seed_words: words,
        alphabet,
        start_year,
        predicate,
        output,
    };

    Ok(ResolvedRequest { request, warnings })
}
