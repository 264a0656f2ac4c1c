use super::common::{report_lines, run, Fixture};
use duplicate_guard::error::{ExitCode, GuardError};
use std::path::Path;

#[test]
fn test_ignored_files_are_not_indexed() {
    let fx = Fixture::new();
    fx.write("assets/logo.png", b"png bytes");
    fx.write("src/main.rs", b"fn main() {}");
    let ignore = fx.ignore_file("# binary assets\n*.png\n");

    let (code, stdout) = run(&fx.config(&ignore, &[]));

    assert_eq!(code, ExitCode::Clean);
    assert!(stdout.contains("Done, 1 checksums\n"));
}

#[test]
fn test_ignored_original_is_never_reported() {
    let fx = Fixture::new();
    fx.write("fixtures/sample.txt", b"shared");
    fx.write("src/sample.txt", b"shared");
    let list = fx.candidate_list("staged.json", &["src/sample.txt"]);
    let ignore = fx.ignore_file("fixtures/*\n");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::Clean);
    assert!(report_lines(&stdout).is_empty());
}

#[test]
fn test_ignored_candidate_is_skipped() {
    let fx = Fixture::new();
    fx.write("a/LICENSE", b"MIT");
    fx.write("b/LICENSE", b"MIT");
    let list = fx.candidate_list("staged.json", &["b/LICENSE"]);
    let ignore = fx.ignore_file("b/*\n");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::Clean);
    assert!(report_lines(&stdout).is_empty());
}

#[test]
fn test_git_metadata_is_always_ignored() {
    let fx = Fixture::new();
    fx.write(".git/objects/aa/blob", b"content");
    fx.write("z.txt", b"content");
    let list = fx.candidate_list("staged.json", &["z.txt"]);
    let ignore = fx.ignore_file("");

    let (code, stdout) = run(&fx.config(&ignore, &[list]));

    assert_eq!(code, ExitCode::Clean);
    assert!(stdout.contains("Done, 1 checksums\n"));
}

#[test]
fn test_comment_and_blank_lines() {
    let fx = Fixture::new();
    fx.write("keep.md", b"doc");
    fx.write("tmp/keep.md", b"doc");
    let list = fx.candidate_list("staged.json", &["tmp/keep.md"]);
    let ignore = fx.ignore_file("# tmp/*\n\n   \n");

    let (code, _) = run(&fx.config(&ignore, &[list]));

    // The commented-out pattern has no effect.
    assert_eq!(code, ExitCode::DuplicatesFound);
}

#[test]
fn test_explicit_missing_ignore_file_is_fatal() {
    let fx = Fixture::new();
    fx.write("keep.txt", b"hello");
    let config = fx.config(Path::new("/no/such/file"), &[]);

    let mut out = Vec::new();
    let err = duplicate_guard::run(&config, &mut out).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GuardError>(),
        Some(GuardError::IgnoreFileNotFound(_))
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ConfigError);
    assert!(out.is_empty(), "no checksum output before the failure");
}
