//! Canned contents for well-known files of a generated project.
//! Files are recognized by exact name; their contents are rendered with the
//! project name and structure.

use indexmap::IndexMap;

use crate::error::Result;
use crate::renderer::TemplateRenderer;

const MAIN_PY: &str = r#"def main():
    print("Hello from main")


if __name__ == "__main__":
    main()
"#;

const INIT_PY: &str = r#""""Package initialization."""
"#;

const README_MD: &str = "# {{ project_name }}

## Description
Project generated automatically.

## Structure
```
{{ structure }}
```
";

const GITIGNORE: &str = "__pycache__/
*.pyc
.env
.venv
venv/
dist/
build/
*.egg-info
";

/// Supplies default contents for recognized file names.
pub trait ContentProvider {
    /// Whether `name` has canned content.
    fn recognizes(&self, name: &str) -> bool;

    /// Renders the content for `name`, `None` when it is not recognized.
    ///
    /// # Arguments
    /// * `name` - File name, without any directory
    /// * `context` - Values available to the content, `project_name` and `structure`
    fn content(&self, name: &str, context: &serde_json::Value) -> Result<Option<String>>;
}

/// Built-in contents for `README.md`, `__init__.py`, `main.py` and `.gitignore`.
pub struct BuiltinContent {
    renderer: Box<dyn TemplateRenderer>,
    templates: IndexMap<&'static str, &'static str>,
}

impl BuiltinContent {
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        let templates = IndexMap::from([
            ("main.py", MAIN_PY),
            ("__init__.py", INIT_PY),
            ("README.md", README_MD),
            (".gitignore", GITIGNORE),
        ]);
        Self {
            renderer,
            templates,
        }
    }
}

impl ContentProvider for BuiltinContent {
    fn recognizes(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn content(&self, name: &str, context: &serde_json::Value) -> Result<Option<String>> {
        match self.templates.get(name) {
            Some(template) => Ok(Some(self.renderer.render(template, context)?)),
            None => Ok(None),
        }
    }
}
