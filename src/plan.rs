//! Operation plan: the validated tree flattened into filesystem operations.

use std::path::{Path, PathBuf};

use log::debug;

use crate::content::ContentProvider;
use crate::render::render_tree;
use crate::tree::{Node, Tree};

/// A single filesystem operation, with a path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateDir {
        path: PathBuf,
    },
    CreateFile {
        path: PathBuf,
        /// Recognized file name whose canned content fills the file
        template: Option<String>,
    },
}

impl Operation {
    pub fn path(&self) -> &Path {
        match self {
            Operation::CreateDir { path } | Operation::CreateFile { path, .. } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Operation::CreateDir { .. })
    }
}

/// Ordered operations creating a template's structure.
///
/// Parents always come before their contents, siblings in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    operations: Vec<Operation>,
    project_name: String,
    structure: String,
}

impl Plan {
    /// Flattens a validated tree.
    ///
    /// # Arguments
    /// * `tree` - A tree that passed validation
    /// * `content` - Decides which files get canned content
    pub fn new(tree: &Tree, content: &dyn ContentProvider) -> Self {
        let mut operations = Vec::with_capacity(tree.root().count());
        emit(tree.root(), Path::new(""), content, &mut operations);
        debug!("Planned {} operation(s)", operations.len());

        Self {
            operations,
            project_name: tree.project_name().to_string(),
            structure: render_tree(tree),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Canonical tree-glyph rendering of the planned structure.
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Values available to canned file contents.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "project_name": self.project_name,
            "structure": self.structure,
        })
    }

    /// Files that will receive canned content.
    pub fn templated_files(&self) -> impl Iterator<Item = &Path> {
        self.operations.iter().filter_map(|op| match op {
            Operation::CreateFile {
                path,
                template: Some(_),
            } => Some(path.as_path()),
            _ => None,
        })
    }
}

fn emit(node: &Node, parent: &Path, content: &dyn ContentProvider, ops: &mut Vec<Operation>) {
    let path = parent.join(&node.name);
    if node.is_directory {
        ops.push(Operation::CreateDir { path: path.clone() });
        for child in &node.children {
            emit(child, &path, content, ops);
        }
    } else {
        let template = content
            .recognizes(&node.name)
            .then(|| node.name.clone());
        ops.push(Operation::CreateFile { path, template });
    }
}
