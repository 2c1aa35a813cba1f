//! Indentation handling: splits the indentation off a template line and maps it
//! to a nesting depth.
//!
//! A template is indented with one of three schemes:
//!
//! ```text
//! tabs        spaces          glyphs
//! src/        src/            src/
//! \tmain.rs       main.rs     ├── main.rs
//! \tbin/          bin/        └── bin/
//! \t\tcli.rs          cli.rs      └── cli.rs
//! ```
//!
//! The first indented line fixes the scheme for the whole file.

use std::fmt;

use log::debug;

use crate::config::{IndentPolicy, ParserConfig};
use crate::validate::{ErrorKind, ValidationError};

/// One unit of a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Tab,
    Space,
    /// Vertical continuation glyph (`│` or `|`)
    Pipe,
    /// Branch glyph with its dashes (`├──`, `└──`, `|--`, `` `-- ``, `+--`)
    Branch,
}

/// Indentation of a single line, as a sequence of tokens.
///
/// A [`Token::Branch`] can only be the last token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent {
    tokens: Vec<Token>,
}

impl Indent {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\u{a0}'
}

fn is_dash(c: char) -> bool {
    c == '─' || c == '-'
}

/// Splits a line into its indentation and the remaining content.
///
/// Whitespace following a branch glyph belongs to the indentation.
pub fn split_indent(line: &str) -> (Indent, &str) {
    let mut tokens = Vec::new();
    let mut rest = line;

    loop {
        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        let after = chars.as_str();
        let starts_dash = after.starts_with(is_dash);

        match c {
            '\t' => tokens.push(Token::Tab),
            c if is_blank(c) => tokens.push(Token::Space),
            '├' | '└' => {
                tokens.push(Token::Branch);
                rest = after.trim_start_matches(is_dash).trim_start_matches(is_blank);
                break;
            }
            '|' | '`' | '+' if starts_dash => {
                tokens.push(Token::Branch);
                rest = after.trim_start_matches(is_dash).trim_start_matches(is_blank);
                break;
            }
            '│' | '|' => tokens.push(Token::Pipe),
            _ => break,
        }
        rest = after;
    }

    (Indent { tokens }, rest)
}

/// Indentation style of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentScheme {
    Tabs,
    Spaces,
    Glyphs,
}

impl fmt::Display for IndentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tabs => write!(f, "tab"),
            Self::Spaces => write!(f, "space"),
            Self::Glyphs => write!(f, "tree glyph"),
        }
    }
}

/// Resolves line indentation to depths, keeping the file's scheme consistent.
#[derive(Debug)]
pub struct DepthResolver {
    policy: IndentPolicy,
    space_width: usize,
    scheme: Option<IndentScheme>,
    /// Extra depth for glyph lines drawn under a bare root line, as `tree` prints them
    glyph_offset: usize,
    previous: Option<usize>,
}

impl DepthResolver {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            policy: config.indent,
            space_width: config.space_width.max(1),
            scheme: None,
            glyph_offset: 0,
            previous: None,
        }
    }

    /// Resolves the depth of an entry line.
    ///
    /// # Arguments
    /// * `indent` - Indentation split off the line
    /// * `source_line` - Line number, for error reporting
    /// * `errors` - Accumulator receiving `BadIndent` and `DepthSkip` errors
    ///
    /// # Returns
    /// * `Some(depth)` - Depth of the entry, clamped to one level below the previous entry
    /// * `None` - The indentation is unusable; a `BadIndent` error was recorded
    pub fn resolve(
        &mut self,
        indent: &Indent,
        source_line: usize,
        errors: &mut Vec<ValidationError>,
    ) -> Option<usize> {
        let depth = match self.measure(indent) {
            Ok(None) => 0,
            Ok(Some((scheme, depth))) => match self.check_scheme(scheme) {
                Ok(()) if scheme == IndentScheme::Glyphs => depth + self.glyph_offset,
                Ok(()) => depth,
                Err(detail) => {
                    errors.push(ValidationError::new(ErrorKind::BadIndent, source_line, detail));
                    return None;
                }
            },
            Err(detail) => {
                errors.push(ValidationError::new(ErrorKind::BadIndent, source_line, detail));
                return None;
            }
        };

        let max = self.previous.map_or(0, |p| p + 1);
        let depth = if depth > max {
            errors.push(ValidationError::new(
                ErrorKind::DepthSkip,
                source_line,
                format!("entry is at depth {depth} but may be at most at depth {max}"),
            ));
            max
        } else {
            depth
        };

        self.previous = Some(depth);
        Some(depth)
    }

    /// Records the scheme of the first indented line, and rejects lines breaking it.
    fn check_scheme(&mut self, scheme: IndentScheme) -> Result<(), String> {
        if self.policy == IndentPolicy::Tabs && scheme != IndentScheme::Tabs {
            return Err(format!(
                "{scheme} indentation is not allowed, only tabs may be used"
            ));
        }

        match self.scheme {
            None => {
                if scheme == IndentScheme::Glyphs {
                    self.glyph_offset = usize::from(self.previous.is_some());
                }
                debug!(
                    "Detected {} indentation (glyph offset {})",
                    scheme, self.glyph_offset
                );
                self.scheme = Some(scheme);
                Ok(())
            }
            Some(expected) if expected != scheme => Err(format!(
                "{scheme} indentation in a template indented with {expected}s"
            )),
            Some(_) => Ok(()),
        }
    }

    /// Computes the scheme and raw depth of an indentation, `None` when the line is not indented.
    fn measure(&self, indent: &Indent) -> Result<Option<(IndentScheme, usize)>, String> {
        let tokens = indent.tokens();
        if tokens.is_empty() {
            return Ok(None);
        }

        let is_glyph = tokens
            .iter()
            .any(|t| matches!(t, Token::Pipe | Token::Branch));
        if is_glyph {
            return measure_glyphs(tokens).map(|depth| Some((IndentScheme::Glyphs, depth)));
        }

        let tabs = tokens.iter().filter(|t| **t == Token::Tab).count();
        let spaces = tokens.len() - tabs;
        match (tabs, spaces) {
            (tabs, 0) => Ok(Some((IndentScheme::Tabs, tabs))),
            (0, spaces) => Ok(Some((IndentScheme::Spaces, spaces / self.space_width))),
            _ => Err("indentation mixes tabs and spaces".to_string()),
        }
    }
}

/// Counts continuation groups in front of a branch glyph.
///
/// A group is a pipe followed by up to three spaces, or four spaces.
fn measure_glyphs(tokens: &[Token]) -> Result<usize, String> {
    let Some((Token::Branch, groups)) = tokens.split_last() else {
        return Err("continuation glyphs without a branch glyph".to_string());
    };

    let mut depth = 0;
    let mut iter = groups.iter().peekable();
    while let Some(token) = iter.next() {
        match token {
            Token::Pipe => {
                let mut pad = 0;
                while pad < 3 && iter.next_if_eq(&&Token::Space).is_some() {
                    pad += 1;
                }
            }
            Token::Space => {
                let mut run = 1;
                while run < 4 && iter.next_if_eq(&&Token::Space).is_some() {
                    run += 1;
                }
                if run < 4 {
                    return Err(format!("{run} stray space(s) in tree glyph indentation"));
                }
            }
            Token::Tab => return Err("tab inside tree glyph indentation".to_string()),
            Token::Branch => return Err("more than one branch glyph".to_string()),
        }
        depth += 1;
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_all(
        lines: &[&str],
        config: &ParserConfig,
    ) -> (Vec<Option<usize>>, Vec<ValidationError>) {
        let mut resolver = DepthResolver::new(config);
        let mut errors = Vec::new();
        let depths = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let (indent, _) = split_indent(line);
                resolver.resolve(&indent, i + 1, &mut errors)
            })
            .collect();
        (depths, errors)
    }

    #[test]
    fn test_split_unicode_branch() {
        let (indent, rest) = split_indent("│   ├── main.rs");
        assert_eq!(
            indent.tokens(),
            &[Token::Pipe, Token::Space, Token::Space, Token::Space, Token::Branch]
        );
        assert_eq!(rest, "main.rs");
    }

    #[test]
    fn test_split_ascii_branch() {
        let (indent, rest) = split_indent("|   `-- lib.rs");
        assert_eq!(
            indent.tokens(),
            &[Token::Pipe, Token::Space, Token::Space, Token::Space, Token::Branch]
        );
        assert_eq!(rest, "lib.rs");

        let (indent, rest) = split_indent("|-- src/");
        assert_eq!(indent.tokens(), &[Token::Branch]);
        assert_eq!(rest, "src/");
    }

    #[test]
    fn test_split_stops_at_name() {
        let (indent, rest) = split_indent("\t\tdocs/");
        assert_eq!(indent.tokens(), &[Token::Tab, Token::Tab]);
        assert_eq!(rest, "docs/");

        let (indent, rest) = split_indent("+notes");
        assert!(indent.is_empty());
        assert_eq!(rest, "+notes");
    }

    #[test]
    fn test_tab_depths() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "\tb/", "\t\tc", "\td"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), Some(2), Some(1)]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_space_depths_floor() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "    b/", "      c", "        d"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), Some(1), Some(2)]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_glyphs_under_bare_root() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(
            &["app/", "├── src/", "│   └── main.rs", "└── docs/", "    └── guide.md"],
            &config,
        );
        assert_eq!(depths, vec![Some(0), Some(1), Some(2), Some(1), Some(2)]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_glyphs_without_bare_root() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["└── app/", "    ├── a", "    └── b"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), Some(1)]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_mixed_schemes_rejected() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "\tb/", "    c", "├── d"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), None, None]);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::BadIndent));
        assert_eq!(errors[0].source_line, 3);
        assert_eq!(errors[1].source_line, 4);
    }

    #[test]
    fn test_tabs_and_spaces_in_one_line() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "\t  b"], &config);
        assert_eq!(depths, vec![Some(0), None]);
        assert_eq!(errors[0].kind, ErrorKind::BadIndent);
    }

    #[test]
    fn test_stray_glyph_spaces() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "  ├── b"], &config);
        assert_eq!(depths, vec![Some(0), None]);
        assert_eq!(errors[0].kind, ErrorKind::BadIndent);
    }

    #[test]
    fn test_pipe_without_branch() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "│   b"], &config);
        assert_eq!(depths, vec![Some(0), None]);
        assert_eq!(errors[0].kind, ErrorKind::BadIndent);
    }

    #[test]
    fn test_depth_skip_is_clamped() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["a/", "\t\t\tb", "\t\t\tc"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::DepthSkip));
        assert!(errors[0].detail.contains("at most at depth 1"));
    }

    #[test]
    fn test_first_entry_must_be_top_level() {
        let config = ParserConfig::default();
        let (depths, errors) = resolve_all(&["\ta"], &config);
        assert_eq!(depths, vec![Some(0)]);
        assert_eq!(errors[0].kind, ErrorKind::DepthSkip);
    }

    #[test]
    fn test_tabs_only_policy() {
        let config = ParserConfig {
            indent: IndentPolicy::Tabs,
            ..ParserConfig::default()
        };
        let (depths, errors) = resolve_all(&["a/", "    b", "\tc"], &config);
        assert_eq!(depths, vec![Some(0), None, Some(1)]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::BadIndent);
        assert!(errors[0].detail.contains("only tabs"));
    }

    #[test]
    fn test_custom_space_width() {
        let config = ParserConfig {
            space_width: 2,
            ..ParserConfig::default()
        };
        let (depths, errors) = resolve_all(&["a/", "  b/", "    c"], &config);
        assert_eq!(depths, vec![Some(0), Some(1), Some(2)]);
        assert!(errors.is_empty());
    }
}
