use clap::Parser;
use crig::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("crig")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.template, PathBuf::from("template.txt"));
    assert!(!parsed.init);
    assert!(!parsed.force);
    assert!(!parsed.dry_run);
    assert!(!parsed.explain);
    assert!(!parsed.tabs_only);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--init",
        "--force",
        "--dry-run",
        "--explain",
        "--tabs-only",
        "--verbose",
        "--template",
        "layout.txt",
        "./output",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.init);
    assert!(parsed.force);
    assert!(parsed.dry_run);
    assert!(parsed.explain);
    assert!(parsed.tabs_only);
    assert!(parsed.verbose);
    assert_eq!(parsed.template, PathBuf::from("layout.txt"));
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-i", "-f", "-x", "-v", "-t", "tree.txt"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.init);
    assert!(parsed.force);
    assert!(parsed.explain);
    assert!(parsed.verbose);
    assert_eq!(parsed.template, PathBuf::from("tree.txt"));
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_unknown_flag() {
    let args = make_args(&["--glob", "*.rs"]);
    assert!(Args::try_parse_from(args).is_err());
}
