//! Template parsing pipeline.
//! Runs line classification, depth resolution, tree building and validation
//! over a whole template and gates the result: either a valid tree or every
//! fatal defect found.

use log::debug;

use crate::classifier::{Classification, IgnoreReason, LineClassifier, RawLine};
use crate::config::ParserConfig;
use crate::tree::{Tree, TreeBuilder};
use crate::validate::{validate, ErrorList, ValidationError};

/// A template line that produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub source_line: usize,
    pub reason: IgnoreReason,
    pub text: String,
}

/// A template that passed validation, with shadowed duplicates already dropped.
#[derive(Debug, Clone)]
pub struct ParsedTemplate {
    pub tree: Tree,
    /// Advisory findings, such as shadowed duplicate siblings
    pub notices: Vec<ValidationError>,
    /// Lines ignored while parsing, blank lines excluded
    pub skipped: Vec<SkippedLine>,
}

impl ParsedTemplate {
    /// Human-readable report of ignored lines and advisory findings.
    pub fn explain(&self) -> String {
        let mut report = String::new();
        if self.skipped.is_empty() && self.notices.is_empty() {
            report.push_str("Nothing to explain: every line was used as written.\n");
            return report;
        }
        for line in &self.skipped {
            report.push_str(&format!(
                "[skip] line {}: {}\n       raw: {}\n",
                line.source_line, line.reason, line.text
            ));
        }
        for notice in &self.notices {
            report.push_str(&format!("[note] {notice}\n"));
        }
        report
    }
}

/// Parses template text into a validated [`Tree`].
#[derive(Debug, Clone, Default)]
pub struct TemplateParser {
    config: ParserConfig,
}

impl TemplateParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses and validates a template.
    ///
    /// # Arguments
    /// * `text` - Full template contents
    ///
    /// # Returns
    /// * `Ok(ParsedTemplate)` - The tree, with advisory notices and skipped lines
    /// * `Err(ErrorList)` - Every fatal defect of the template, ordered by line
    pub fn parse(&self, text: &str) -> Result<ParsedTemplate, ErrorList> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut errors = Vec::new();
        let mut skipped = Vec::new();
        let mut classifier = LineClassifier::new(&self.config);
        let mut builder = TreeBuilder::new(self.config.synthetic_root.as_str());

        for (index, line) in text.lines().enumerate() {
            let raw = RawLine {
                number: index + 1,
                text: line,
            };
            match classifier.classify(raw, &mut errors) {
                Classification::Entry(entry) => builder.push(entry),
                Classification::Ignore(IgnoreReason::Blank) | Classification::Malformed => {}
                Classification::Ignore(reason) => skipped.push(SkippedLine {
                    source_line: raw.number,
                    reason,
                    text: line.trim_end().to_string(),
                }),
            }
        }

        let mut tree = match builder.finish() {
            Ok(tree) => tree,
            Err(no_root) => {
                errors.push(no_root);
                return Err(ErrorList::new(errors));
            }
        };

        errors.extend(validate(&tree));
        let (fatal, notices): (Vec<_>, Vec<_>) = errors.into_iter().partition(|e| e.is_fatal());
        if !fatal.is_empty() {
            debug!("Template rejected with {} error(s)", fatal.len());
            return Err(ErrorList::new(fatal));
        }
        tree.collapse_duplicates();

        debug!(
            "Parsed template: {} entries, {} notice(s), {} skipped line(s)",
            tree.root().count(),
            notices.len(),
            skipped.len()
        );
        Ok(ParsedTemplate {
            tree,
            notices,
            skipped,
        })
    }
}

/// Parses a template with the default configuration.
pub fn parse_template(text: &str) -> Result<ParsedTemplate, ErrorList> {
    TemplateParser::default().parse(text)
}
