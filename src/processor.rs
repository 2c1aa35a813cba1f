//! Plan execution: creates the planned directories and files under an output
//! directory, or describes what a run would do.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::content::ContentProvider;
use crate::error::{Error, Result};
use crate::plan::{Operation, Plan};

/// What happened, or would happen, to a planned path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Overwritten,
    /// The path already exists and is left untouched
    Skipped,
    /// The path is taken by an entry of the other kind
    Blocked,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Created => write!(f, "Created"),
            Action::Overwritten => write!(f, "Overwritten"),
            Action::Skipped => write!(f, "Skipped (already exists)"),
            Action::Blocked => write!(f, "Blocked (taken by the other kind)"),
        }
    }
}

/// Outcome of a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Absolute or output-relative target path
    pub target: PathBuf,
    pub action: Action,
    pub is_directory: bool,
}

/// Counts of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub dirs_created: usize,
    pub files_created: usize,
    pub files_overwritten: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, result: &ProcessResult) {
        match (result.action, result.is_directory) {
            (Action::Created, true) => self.dirs_created += 1,
            (Action::Created, false) => self.files_created += 1,
            (Action::Overwritten, _) => self.files_overwritten += 1,
            (Action::Skipped, _) => self.skipped += 1,
            (Action::Blocked, _) => self.failed += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created folders: {}", self.dirs_created)?;
        write!(f, "Created files: {}", self.files_created)?;
        if self.files_overwritten > 0 {
            write!(f, "\nOverwritten files: {}", self.files_overwritten)?;
        }
        if self.skipped > 0 {
            write!(f, "\nSkipped (already exist): {}", self.skipped)?;
        }
        if self.failed > 0 {
            write!(f, "\nFailed: {}", self.failed)?;
        }
        Ok(())
    }
}

/// Applies plans under an output directory.
pub struct Processor<'a> {
    content: &'a dyn ContentProvider,
    output_root: &'a Path,
    force: bool,
}

impl<'a> Processor<'a> {
    /// # Arguments
    /// * `content` - Provider of canned file contents
    /// * `output_root` - Directory the plan's relative paths are joined to
    /// * `force` - Overwrite files that already exist
    pub fn new(content: &'a dyn ContentProvider, output_root: &'a Path, force: bool) -> Self {
        Self {
            content,
            output_root,
            force,
        }
    }

    /// Decides what running `operation` would do, without touching the disk.
    pub fn action_for(&self, operation: &Operation) -> Action {
        let target = self.output_root.join(operation.path());
        match operation {
            Operation::CreateDir { .. } if target.is_dir() => Action::Skipped,
            Operation::CreateDir { .. } if target.exists() => Action::Blocked,
            Operation::CreateDir { .. } => Action::Created,
            Operation::CreateFile { .. } if target.is_dir() => Action::Blocked,
            Operation::CreateFile { .. } if !target.is_file() => Action::Created,
            Operation::CreateFile { .. } if self.force => Action::Overwritten,
            Operation::CreateFile { .. } => Action::Skipped,
        }
    }

    /// Runs a single operation.
    ///
    /// # Errors
    /// * `Error::ProcessError` if the path is taken by an entry of the other kind
    ///   or the filesystem refuses the operation
    /// * `Error::MinijinjaError` if canned content fails to render
    pub fn process(
        &self,
        operation: &Operation,
        context: &serde_json::Value,
    ) -> Result<ProcessResult> {
        let target = self.output_root.join(operation.path());
        let action = self.action_for(operation);
        let result = ProcessResult {
            target: target.clone(),
            action,
            is_directory: operation.is_directory(),
        };

        match (action, operation) {
            (Action::Skipped, _) => {
                debug!("Skipping existing '{}'", target.display());
                return Ok(result);
            }
            (Action::Blocked, Operation::CreateDir { .. }) => {
                return Err(process_error(&target, "a file is in the way"));
            }
            (Action::Blocked, Operation::CreateFile { .. }) => {
                return Err(process_error(&target, "a directory is in the way"));
            }
            _ => {}
        }

        match operation {
            Operation::CreateDir { .. } => {
                debug!("Creating directory '{}'", target.display());
                fs::create_dir_all(&target).map_err(|e| process_error(&target, e))?;
            }
            Operation::CreateFile { template, .. } => {
                let content = match template {
                    Some(name) => self.content.content(name, context)?,
                    None => None,
                };
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|e| process_error(&target, e))?;
                }
                debug!("Writing file '{}'", target.display());
                fs::write(&target, content.unwrap_or_default())
                    .map_err(|e| process_error(&target, e))?;
            }
        }

        Ok(result)
    }

    /// Runs every operation of a plan in order.
    ///
    /// A failed operation is logged and the run continues with the next one.
    ///
    /// # Returns
    /// * `Result<Summary>` - Counts of the run
    ///
    /// # Errors
    /// * `Error::GenerationIncomplete` if any operation failed
    pub fn apply(&self, plan: &Plan) -> Result<Summary> {
        self.apply_with(plan, |_| {})
    }

    /// Like [`Processor::apply`], handing each successful result to `on_result`.
    pub fn apply_with<F>(&self, plan: &Plan, mut on_result: F) -> Result<Summary>
    where
        F: FnMut(&ProcessResult),
    {
        let context = plan.context();
        let mut summary = Summary::default();

        for operation in plan.operations() {
            match self.process(operation, &context) {
                Ok(result) => {
                    on_result(&result);
                    summary.record(&result);
                }
                Err(e) => {
                    error!("{e}");
                    summary.failed += 1;
                }
            }
        }

        if summary.failed > 0 {
            return Err(Error::GenerationIncomplete {
                failed: summary.failed,
            });
        }
        Ok(summary)
    }

    /// Describes what applying `plan` would do.
    pub fn preview(&self, plan: &Plan) -> String {
        let mut lines = vec![plan.structure().to_string(), String::new()];
        for operation in plan.operations() {
            let kind = if operation.is_directory() { "dir " } else { "file" };
            lines.push(format!(
                "  {kind}  {}  [{}]",
                operation.path().display(),
                self.action_for(operation)
            ));
        }

        let templated: Vec<_> = plan.templated_files().collect();
        if !templated.is_empty() {
            lines.push(String::new());
            lines.push("Files that will receive content:".to_string());
            lines.extend(templated.iter().map(|p| format!("  - {}", p.display())));
        }
        lines.join("\n")
    }
}

fn process_error(target: &Path, e: impl ToString) -> Error {
    Error::ProcessError {
        target: target.to_path_buf(),
        e: e.to_string(),
    }
}
