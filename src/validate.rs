//! Structural validation of a parsed template tree.
//! Every defect found in a template is collected into a flat list so one run
//! reports all of them at once.

use std::collections::HashMap;
use std::fmt;

use crate::tree::{Node, Tree};

/// Category of a template defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Indentation that cannot be mapped to a depth, or that breaks the file's scheme
    BadIndent,
    /// Two siblings share a name; the later one wins
    DuplicateSibling,
    /// A file entry has entries nested under it
    ChildUnderFile,
    /// A name contains characters outside the allowed set
    InvalidName,
    /// Depth grows by more than one level from the previous entry
    DepthSkip,
    /// The template declares no entries at all
    NoRoot,
}

impl ErrorKind {
    /// Fatal kinds block generation; the rest are only reported in explain mode.
    pub fn is_fatal(self) -> bool {
        !matches!(self, ErrorKind::DuplicateSibling)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadIndent => write!(f, "bad indentation"),
            Self::DuplicateSibling => write!(f, "duplicate entry"),
            Self::ChildUnderFile => write!(f, "file cannot have children"),
            Self::InvalidName => write!(f, "invalid name"),
            Self::DepthSkip => write!(f, "indentation jump"),
            Self::NoRoot => write!(f, "no root entry"),
        }
    }
}

/// A single positioned template defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ErrorKind,
    /// 1-based line in the template; 0 when the defect has no single line
    pub source_line: usize,
    pub detail: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, source_line: usize, detail: impl Into<String>) -> Self {
        Self {
            kind,
            source_line,
            detail: detail.into(),
        }
    }

    pub fn no_root() -> Self {
        Self::new(
            ErrorKind::NoRoot,
            0,
            "template must contain at least one entry",
        )
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source_line == 0 {
            write!(f, "{}: {}", self.kind, self.detail)
        } else {
            write!(f, "Line {}: {}: {}", self.source_line, self.kind, self.detail)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collected fatal template defects, ordered by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList(Vec<ValidationError>);

impl ErrorList {
    pub fn new(mut errors: Vec<ValidationError>) -> Self {
        errors.sort_by_key(|e| e.source_line);
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Checks whether a name only uses letters, digits, `_`, `-` and `.`.
///
/// `.` and `..` are rejected as they would resolve outside the entry's parent.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Walks the whole tree and returns every defect found, fatal or advisory.
///
/// # Arguments
/// * `tree` - Tree assembled by the tree builder
///
/// # Returns
/// * `Vec<ValidationError>` - All defects in tree order; empty when the tree is valid
pub fn validate(tree: &Tree) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let root = tree.root();
    if tree.is_synthetic() {
        check_children(root, &mut errors);
    } else {
        visit(root, &mut errors);
    }
    errors
}

fn visit(node: &Node, errors: &mut Vec<ValidationError>) {
    if !is_valid_name(&node.name) {
        errors.push(ValidationError::new(
            ErrorKind::InvalidName,
            node.source_line,
            format!(
                "'{}' may only contain letters, digits, '_', '-' and '.'",
                node.name
            ),
        ));
    }

    if !node.is_directory {
        for child in &node.children {
            errors.push(ValidationError::new(
                ErrorKind::ChildUnderFile,
                node.source_line,
                format!(
                    "'{}' is a file but '{}' (line {}) is nested under it",
                    node.name, child.name, child.source_line
                ),
            ));
        }
    }

    check_children(node, errors);
}

fn check_children(node: &Node, errors: &mut Vec<ValidationError>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for child in &node.children {
        if let Some(earlier) = seen.insert(child.name.as_str(), child.source_line) {
            errors.push(ValidationError::new(
                ErrorKind::DuplicateSibling,
                child.source_line,
                format!("'{}' shadows the entry on line {}", child.name, earlier),
            ));
        }
    }

    for child in &node.children {
        visit(child, errors);
    }
}
