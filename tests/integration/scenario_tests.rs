use super::common::{report_lines, run, Fixture};
use duplicate_guard::cli::OutputFormat;
use duplicate_guard::error::ExitCode;
use duplicate_guard::ignore::DEFAULT_IGNORE_FILE;
use std::fs;
use std::path::Path;

#[test]
fn test_empty_repository_with_default_ignore_file() {
    let fx = Fixture::new();
    let config = fx.config(Path::new(DEFAULT_IGNORE_FILE), &[]);

    let (code, stdout) = run(&config);

    assert_eq!(code, ExitCode::Clean);
    assert_eq!(
        stdout,
        "Calculating checksums for all repository files...\nDone, 0 checksums\n"
    );
}

#[test]
fn test_candidate_that_is_the_indexed_original() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    fx.write("dup.txt", b"hello");
    let list = fx.candidate_list("staged.json", &["dup.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    // dup.txt sorts before keep.txt, so it is the indexed original.
    // As a candidate it therefore matches itself and is not reported.
    assert_eq!(code, ExitCode::Clean);
    assert!(report_lines(&stdout).is_empty());
}

#[test]
fn test_new_candidate_duplicating_tracked_file() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    fx.write("new/dup.txt", b"hello");
    let list = fx.candidate_list("staged.json", &["new/dup.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::DuplicatesFound);
    assert_eq!(
        report_lines(&stdout),
        vec!["Error: 'new/dup.txt' is a duplicate of 'keep.txt'"]
    );
    assert!(stdout.contains("Done, 1 checksums\n"));
}

#[test]
fn test_missing_candidate_is_silently_skipped() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    let list = fx.candidate_list("staged.json", &["missing.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::Clean);
    assert!(report_lines(&stdout).is_empty());
}

#[test]
fn test_missing_candidate_list_is_skipped() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    let ignore = fx.ignore_file("");
    let absent = fx.inputs.path().join("nothing_staged.json");

    let (code, _) = run(&fx.config(&ignore, &[absent]));
    assert_eq!(code, ExitCode::Clean);
}

#[test]
fn test_duplicate_within_the_same_batch() {
    let fx = Fixture::new();
    fx.write("a.txt", b"same bytes");
    fx.write("b.txt", b"same bytes");
    let list = fx.candidate_list("staged.json", &["a.txt", "b.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::DuplicatesFound);
    assert_eq!(
        report_lines(&stdout),
        vec!["Error: 'b.txt' is a duplicate of 'a.txt'"]
    );
}

#[test]
fn test_all_duplicates_are_reported() {
    let fx = Fixture::new();
    fx.write("orig/one.txt", b"one");
    fx.write("orig/two.txt", b"two");
    fx.write("x/copy_one.txt", b"one");
    fx.write("x/copy_two.txt", b"two");
    fx.write("x/unique.txt", b"three");
    let list = fx.candidate_list(
        "staged.json",
        &["x/copy_one.txt", "x/unique.txt", "x/copy_two.txt"],
    );
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::DuplicatesFound);
    assert_eq!(
        report_lines(&stdout),
        vec![
            "Error: 'x/copy_one.txt' is a duplicate of 'orig/one.txt'",
            "Error: 'x/copy_two.txt' is a duplicate of 'orig/two.txt'",
        ]
    );
}

#[test]
fn test_candidate_lists_are_concatenated() {
    let fx = Fixture::new();
    fx.write("a/base.txt", b"base");
    fx.write("b/first.txt", b"base");
    fx.write("b/second.txt", b"base");
    let first = fx.candidate_list("added.json", &["b/first.txt"]);
    let second = fx.candidate_list("modified.json", &["b/second.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[first, second]));

    assert_eq!(code, ExitCode::DuplicatesFound);
    assert_eq!(report_lines(&stdout).len(), 2);
}

#[test]
fn test_directory_candidate_is_skipped() {
    let fx = Fixture::new();
    fx.write("dir/file.txt", b"content");
    fs::create_dir(fx.repo.path().join("empty")).unwrap();
    let list = fx.candidate_list("staged.json", &["dir", "empty", ""]);
    let ignore = fx.ignore_file("");

    let (code, _) = run(&fx.config(&ignore, &[list]));
    assert_eq!(code, ExitCode::Clean);
}

#[test]
fn test_repeated_runs_are_identical() {
    let fx = Fixture::new();
    fx.write("src/a.rs", b"fn a() {}");
    fx.write("src/b.rs", b"fn b() {}");
    fx.write("src/b_copy.rs", b"fn b() {}");
    let ignore = fx.ignore_file("");
    let list = fx.candidate_list("staged.json", &["missing.rs"]);
    let config = fx.config(&ignore, &[list]);

    let first = run(&config);
    let second = run(&config);

    assert_eq!(first, second);
    assert!(first.1.contains("Done, 2 checksums\n"));
}

#[test]
fn test_json_output() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    fx.write("z/dup.txt", b"hello");
    let list = fx.candidate_list("staged.json", &["z/dup.txt"]);
    let ignore = fx.ignore_file("");
    let mut config = fx.config(&ignore, &[list]);
    config.output = OutputFormat::Json;

    let (code, stdout) = run(&config);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(code, ExitCode::DuplicatesFound);
    assert_eq!(value["checksums"], 1);
    assert_eq!(value["exit_code"], 1);
    assert_eq!(value["duplicates"][0]["path"], "z/dup.txt");
    assert_eq!(value["duplicates"][0]["original"], "keep.txt");
    assert_eq!(
        value["duplicates"][0]["checksum"],
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}
