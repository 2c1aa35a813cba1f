//! Canonical tree-glyph rendering of a template tree.
//!
//! Top-level entries are printed bare and their contents drawn below them,
//! the way `tree` prints a directory:
//!
//! ```text
//! app/
//! ├── src/
//! │   └── main.rs
//! └── README.md
//! ```
//!
//! The output parses back into the same tree.

use crate::tree::{Node, Tree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// Renders a tree to canonical tree-glyph text, without a trailing newline.
pub fn render_tree(tree: &Tree) -> String {
    let mut lines = Vec::new();
    for node in tree.top_level() {
        lines.push(label(node));
        render_children(node, "", &mut lines);
    }
    lines.join("\n")
}

fn render_children(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let children = &node.children;
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{branch}{}", label(child)));

        let nested = format!("{prefix}{}", if last { BLANK } else { CONTINUATION });
        render_children(child, &nested, lines);
    }
}

fn label(node: &Node) -> String {
    if node.is_directory {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}
