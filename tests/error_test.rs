use std::io;
use std::path::PathBuf;

use crig::error::Error;
use crig::validate::{ErrorKind, ErrorList, ValidationError};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let crig_err: Error = io_err.into();

    match crig_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateNotFound {
        path: PathBuf::from("template.txt"),
    };
    assert!(err.to_string().contains("crig --init"));
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::new(ErrorKind::ChildUnderFile, 3, "'x.txt' is a file");
    assert_eq!(
        err.to_string(),
        "Line 3: file cannot have children: 'x.txt' is a file"
    );

    let err = ValidationError::no_root();
    assert_eq!(
        err.to_string(),
        "no root entry: template must contain at least one entry"
    );
}

#[test]
fn test_error_list_is_sorted_and_printed_per_line() {
    let list = ErrorList::new(vec![
        ValidationError::new(ErrorKind::InvalidName, 7, "'b@d' may only contain letters"),
        ValidationError::new(ErrorKind::DepthSkip, 2, "entry is at depth 3"),
    ]);
    let lines: Vec<_> = list.errors().iter().map(|e| e.source_line).collect();
    assert_eq!(lines, vec![2, 7]);

    let err: Error = list.into();
    let printed = err.to_string();
    assert!(printed.starts_with("Template errors:\n"));
    assert_eq!(printed.lines().count(), 3);
    assert!(printed.contains("  Line 2: indentation jump"));
}

#[test]
fn test_fatal_kinds() {
    assert!(ErrorKind::BadIndent.is_fatal());
    assert!(ErrorKind::DepthSkip.is_fatal());
    assert!(ErrorKind::InvalidName.is_fatal());
    assert!(ErrorKind::ChildUnderFile.is_fatal());
    assert!(ErrorKind::NoRoot.is_fatal());
    assert!(!ErrorKind::DuplicateSibling.is_fatal());
}
