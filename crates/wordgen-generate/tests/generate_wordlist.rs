use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use wordgen_core::{
    AlphabetFlags, GenerationRequest, PredicateKind, RequestDraft, RunMode, resolve_request,
};
use wordgen_generate::output::report::write_report;
use wordgen_generate::{
    AlwaysProceed, EnumerationEngine, Estimate, FileSink, GenerationOutcome, GenerationReport,
};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("wordgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn request(draft: RequestDraft, path: &Path) -> GenerationRequest {
    resolve_request(RequestDraft {
        output: Some(path.to_path_buf()),
        ..draft
    })
    .expect("resolve request")
    .request
}

fn run_to_file(request: &GenerationRequest) -> GenerationReport {
    let outcome = EnumerationEngine::default()
        .run(request, FileSink::open, &mut AlwaysProceed)
        .expect("run generation");
    match outcome {
        GenerationOutcome::Completed(report) => report,
        GenerationOutcome::Cancelled { .. } => panic!("run should not be cancelled"),
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read wordlist")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn product_mode_writes_full_cartesian_power() {
    let dir = temp_out_dir("product");
    let path = dir.join("wordlist.txt");
    let request = request(
        RequestDraft {
            length: Some(3),
            alphabet: AlphabetFlags {
                digits: true,
                incremental: Some("xy".to_string()),
                ..AlphabetFlags::default()
            },
            ..RequestDraft::default()
        },
        &path,
    );

    let report = run_to_file(&request);
    let lines = read_lines(&path);
    let alphabet: HashSet<char> = request.alphabet.chars().iter().copied().collect();
    let unique: HashSet<&String> = lines.iter().collect();

    assert_eq!(lines.len(), 12 * 12 * 12);
    assert_eq!(unique.len(), lines.len());
    assert!(lines.iter().all(|line| line.chars().count() == 3));
    assert!(lines.iter().all(|line| line.chars().all(|ch| alphabet.contains(&ch))));
    assert_eq!(lines.first().map(String::as_str), Some("000"));
    assert_eq!(lines.last().map(String::as_str), Some("yyy"));
    assert_eq!(report.entries_written, 1728);
    assert_eq!(report.bytes_written, 1728 * 4);
    assert!(report.estimate.is_some());
}

#[test]
fn overwrite_runs_are_byte_identical() {
    let dir = temp_out_dir("idempotent");
    let path = dir.join("wordlist.txt");
    let request = request(
        RequestDraft {
            length: Some(4),
            predicate: PredicateKind::Smart,
            alphabet: AlphabetFlags {
                incremental: Some("abc".to_string()),
                ..AlphabetFlags::default()
            },
            ..RequestDraft::default()
        },
        &path,
    );

    run_to_file(&request);
    let first = fs::read(&path).expect("read first run");
    run_to_file(&request);
    let second = fs::read(&path).expect("read second run");

    assert_eq!(first, second);
}

#[test]
fn append_mode_keeps_existing_content() {
    let dir = temp_out_dir("append");
    let path = dir.join("wordlist.txt");
    fs::write(&path, "existing\n").expect("seed file");

    let request = request(
        RequestDraft {
            words: vec!["one".to_string()],
            append: true,
            ..RequestDraft::default()
        },
        &path,
    );
    run_to_file(&request);

    assert_eq!(fs::read_to_string(&path).expect("read"), "existing\none\n");
}

#[test]
fn word_mode_writes_seeds_and_every_ordering() {
    let dir = temp_out_dir("words");
    let path = dir.join("wordlist.txt");
    let words = ["red", "green", "blue", "gold"];
    let request = request(
        RequestDraft {
            words: words.iter().map(|word| word.to_string()).collect(),
            ..RequestDraft::default()
        },
        &path,
    );

    let report = run_to_file(&request);
    let lines = read_lines(&path);

    assert_eq!(&lines[..4], &words);
    let orderings: HashSet<&String> = lines[4..].iter().collect();
    assert_eq!(lines.len(), 4 + 24);
    assert_eq!(orderings.len(), 24);
    assert!(orderings.contains(&"goldbluegreenred".to_string()));
    assert_eq!(report.mode, RunMode::WordPermutation);
}

#[test]
fn date_mode_spans_a_thousand_years_with_invalid_days() {
    let dir = temp_out_dir("dates");
    let path = dir.join("dates.txt");
    let request = request(
        RequestDraft {
            date: Some(2000),
            ..RequestDraft::default()
        },
        &path,
    );

    let report = run_to_file(&request);
    let lines = read_lines(&path);

    assert_eq!(lines.len(), 1000 * 12 * 31);
    assert_eq!(lines.first().map(String::as_str), Some("01/01/2000"));
    assert_eq!(lines.last().map(String::as_str), Some("12/31/2999"));
    assert!(lines.contains(&"02/30/2000".to_string()));
    assert!(report.estimate.is_none());
}

#[test]
fn declined_confirmation_writes_nothing() {
    let dir = temp_out_dir("declined");
    let path = dir.join("wordlist.txt");
    let request = request(
        RequestDraft {
            length: Some(8),
            alphabet: AlphabetFlags {
                lowercase: true,
                uppercase: true,
                digits: true,
                ..AlphabetFlags::default()
            },
            ..RequestDraft::default()
        },
        &path,
    );

    let mut seen: Option<Estimate> = None;
    let mut gate = |estimate: &Estimate| {
        seen = Some(*estimate);
        false
    };
    let outcome = EnumerationEngine::default()
        .run(&request, FileSink::open, &mut gate)
        .expect("run generation");

    assert!(matches!(outcome, GenerationOutcome::Cancelled { .. }));
    assert!(seen.is_some_and(|estimate| estimate.byte_count > 1_000_000.0));
    assert!(!path.exists());
}

#[test]
fn report_is_written_as_json() {
    let dir = temp_out_dir("report");
    let path = dir.join("wordlist.txt");
    let request = request(
        RequestDraft {
            words: vec!["aa".to_string(), "bb".to_string()],
            predicate: PredicateKind::Smart,
            ..RequestDraft::default()
        },
        &path,
    );

    let report = run_to_file(&request);
    let report_path = dir.join("reports").join("run.json");
    write_report(&report_path, &report).expect("write report");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(value["mode"], "word_permutation");
    assert_eq!(value["predicate"], "smart");
    assert_eq!(value["entries_written"], 2);
    assert_eq!(value["entries_rejected"], 2);
    assert!(value.get("estimate").is_none());
}
