//! Line classification: turns a raw template line into an entry or an ignored line.
//!
//! Everything around the entry name is decoration and is stripped:
//!
//! ```text
//! │   ├── main.py   (entry point)  // inline comment
//! ^^^^^^^^          ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! indentation       annotation and comment
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::config::ParserConfig;
use crate::indent::{split_indent, DepthResolver};
use crate::validate::ValidationError;

/// First characters marking a line as a free-form note instead of an entry.
const NOTE_PREFIXES: [char; 8] = ['(', '[', '-', '—', '!', '?', '#', '*'];

/// A single line of template text.
#[derive(Debug, Clone, Copy)]
pub struct RawLine<'a> {
    /// 1-based line number
    pub number: usize,
    pub text: &'a str,
}

/// An entry line reduced to its depth and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub depth: usize,
    /// Name without its trailing `/`
    pub name: String,
    pub is_directory: bool,
    pub source_line: usize,
}

/// Why a line produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Blank,
    Comment,
    /// Only tree glyphs, like a `│` spacer line
    Decoration,
    /// Text starting with a note prefix such as `#`, `-` or `(`
    Note,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "empty line"),
            Self::Comment => write!(f, "comment"),
            Self::Decoration => write!(f, "no name, only tree decoration"),
            Self::Note => write!(f, "note, not an entry"),
        }
    }
}

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Entry(ClassifiedLine),
    Ignore(IgnoreReason),
    /// The line names an entry but its indentation is unusable; the error was recorded
    Malformed,
}

/// Classifies template lines in order, resolving depths as it goes.
#[derive(Debug)]
pub struct LineClassifier {
    resolver: DepthResolver,
    comment_marker: String,
}

impl LineClassifier {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            resolver: DepthResolver::new(config),
            comment_marker: config.comment_marker.clone(),
        }
    }

    /// Classifies the next line of the template.
    ///
    /// Lines must be fed in template order: depth resolution depends on the lines before.
    ///
    /// # Arguments
    /// * `line` - The raw line
    /// * `errors` - Accumulator for indentation errors
    pub fn classify(
        &mut self,
        line: RawLine<'_>,
        errors: &mut Vec<ValidationError>,
    ) -> Classification {
        let text = line.text.trim_end_matches(['\r', '\n']);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Classification::Ignore(IgnoreReason::Blank);
        }
        if trimmed.starts_with(self.comment_marker.as_str()) {
            return Classification::Ignore(IgnoreReason::Comment);
        }

        let (indent, rest) = split_indent(text);
        let stripped = strip_inline_comment(rest, &self.comment_marker);
        let content = stripped.trim();
        if content.is_empty() {
            return Classification::Ignore(if rest.trim_start().is_empty() {
                IgnoreReason::Decoration
            } else {
                IgnoreReason::Comment
            });
        }
        if content.starts_with(NOTE_PREFIXES) {
            return Classification::Ignore(IgnoreReason::Note);
        }

        let (name, is_directory) = entry_name(content);
        match self.resolver.resolve(&indent, line.number, errors) {
            Some(depth) => Classification::Entry(ClassifiedLine {
                depth,
                name: name.to_string(),
                is_directory,
                source_line: line.number,
            }),
            None => Classification::Malformed,
        }
    }
}

/// Cuts the content at the first comment marker not preceded by a backslash.
///
/// Escaped markers before the cut are kept, without their backslash.
fn strip_inline_comment<'a>(content: &'a str, marker: &str) -> Cow<'a, str> {
    let mut from = 0;
    let mut end = content.len();
    while let Some(pos) = content[from..].find(marker) {
        let at = from + pos;
        if !content[..at].ends_with('\\') {
            end = at;
            break;
        }
        from = at + marker.len();
    }

    let kept = &content[..end];
    let escaped = format!("\\{marker}");
    if kept.contains(&escaped) {
        Cow::Owned(kept.replace(&escaped, marker))
    } else {
        Cow::Borrowed(kept)
    }
}

/// Extracts the entry name from content: the first word, cut before any `(`.
fn entry_name(content: &str) -> (&str, bool) {
    let word = content.split_whitespace().next().unwrap_or_default();
    let word = word.split('(').next().unwrap_or_default();
    let name = word.trim_end_matches('/');
    (name, name.len() != word.len())
}
