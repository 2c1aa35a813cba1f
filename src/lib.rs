//! crig turns a plain-text tree of a project layout into directories and files.
//! It parses the template, validates its structure, plans the filesystem
//! operations and applies them, or previews them for a dry run.

/// Line classification: comments, annotations and decoration stripping
pub mod classifier;

/// Command-line interface module for the crig application
pub mod cli;

/// Configuration handling for template parsing
/// Supports JSON and YAML formats (crig.json, crig.yml, crig.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Canned contents for recognized files such as README.md
pub mod content;

/// Error types and handling for the crig application
pub mod error;

/// Indentation schemes and depth resolution
pub mod indent;

/// Logging setup
pub mod logger;

/// Template parsing pipeline, from text to a validated tree
pub mod parser;

/// Filesystem operations derived from a validated tree
pub mod plan;

/// Plan execution and dry-run previews
pub mod processor;

/// Canonical tree-glyph rendering
pub mod render;

/// Template engine used for canned contents
pub mod renderer;

/// Template file reading and the starter template
pub mod template;

/// Template tree model and builder
pub mod tree;

/// Structural validation of template trees
pub mod validate;
