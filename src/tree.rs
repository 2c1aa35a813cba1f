//! In-memory model of a template and the stack-based builder assembling it.

use indexmap::IndexMap;
use log::debug;

use crate::classifier::ClassifiedLine;
use crate::validate::ValidationError;

/// One file or directory entry of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub is_directory: bool,
    /// Nested entries in template order
    pub children: Vec<Node>,
    pub source_line: usize,
}

impl Node {
    pub fn directory(name: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            children: Vec::new(),
            source_line,
        }
    }

    pub fn file(name: impl Into<String>, source_line: usize) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            children: Vec::new(),
            source_line,
        }
    }

    /// Adds a child and returns the node, for building trees by hand.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Drops shadowed duplicate siblings in this subtree, the later sibling winning.
    ///
    /// A winning duplicate takes the position it was declared at.
    pub fn collapse_duplicates(&mut self) {
        let mut by_name: IndexMap<String, Node> = IndexMap::new();
        for child in self.children.drain(..) {
            by_name.shift_remove(&child.name);
            by_name.insert(child.name.clone(), child);
        }
        self.children = by_name.into_values().collect();
        for child in &mut self.children {
            child.collapse_duplicates();
        }
    }

    /// Compares names, kinds and nesting, ignoring source lines.
    pub fn same_shape(&self, other: &Node) -> bool {
        self.name == other.name
            && self.is_directory == other.is_directory
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.same_shape(b))
    }

    /// Number of nodes in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

impl From<ClassifiedLine> for Node {
    fn from(line: ClassifiedLine) -> Self {
        Self {
            name: line.name,
            is_directory: line.is_directory,
            children: Vec::new(),
            source_line: line.source_line,
        }
    }
}

/// A parsed template: a declared root, or a synthetic wrapper around several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
    synthetic: bool,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            synthetic: false,
        }
    }

    /// Wraps several top-level entries into a synthetic directory.
    pub fn synthetic(name: impl Into<String>, entries: Vec<Node>) -> Self {
        let mut root = Node::directory(name, 0);
        root.children = entries;
        Self {
            root,
            synthetic: true,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the root was not declared but created to hold several top-level entries.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Entries declared at depth 0.
    pub fn top_level(&self) -> Vec<&Node> {
        if self.synthetic {
            self.root.children.iter().collect()
        } else {
            vec![&self.root]
        }
    }

    /// Applies last-one-wins to duplicate siblings across the whole tree.
    pub fn collapse_duplicates(&mut self) {
        self.root.collapse_duplicates();
    }

    /// Structural equality: same names, kinds and nesting, source lines aside.
    pub fn same_shape(&self, other: &Tree) -> bool {
        self.synthetic == other.synthetic && self.root.same_shape(&other.root)
    }

    /// Name used for the generated project: the declared root, or the first top-level entry.
    pub fn project_name(&self) -> &str {
        if self.synthetic {
            self.root
                .children
                .first()
                .map_or(self.root.name.as_str(), |n| n.name.as_str())
        } else {
            &self.root.name
        }
    }
}

/// Assembles classified lines into a [`Tree`] using a stack of open ancestors.
///
/// `stack[d]` holds the most recent node at depth `d` whose subtree is still open.
/// Closing a node attaches it to the node below it on the stack, so siblings
/// are attached in template order.
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<Node>,
    top_level: Vec<Node>,
    synthetic_root: String,
}

impl TreeBuilder {
    pub fn new(synthetic_root: impl Into<String>) -> Self {
        Self {
            stack: Vec::new(),
            top_level: Vec::new(),
            synthetic_root: synthetic_root.into(),
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        // Never deeper than one below the deepest open node.
        let depth = line.depth.min(self.stack.len());
        self.close_to(depth);
        self.stack.push(Node::from(line));
    }

    /// Closes every open node and returns the finished tree.
    ///
    /// # Errors
    /// * `NoRoot` if no line was ever pushed
    pub fn finish(mut self) -> Result<Tree, ValidationError> {
        self.close_to(0);
        let mut top_level = self.top_level;
        match top_level.len() {
            0 => Err(ValidationError::no_root()),
            1 => Ok(Tree::new(top_level.remove(0))),
            n => {
                debug!(
                    "{} top-level entries, wrapping them in '{}'",
                    n, self.synthetic_root
                );
                Ok(Tree::synthetic(self.synthetic_root, top_level))
            }
        }
    }

    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let Some(node) = self.stack.pop() else { break };
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.top_level.push(node),
            }
        }
    }
}
