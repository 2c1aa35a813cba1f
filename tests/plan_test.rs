use std::path::{Path, PathBuf};

use crig::content::BuiltinContent;
use crig::parser::parse_template;
use crig::plan::{Operation, Plan};
use crig::renderer::MiniJinjaRenderer;

fn plan_for(text: &str) -> Plan {
    let parsed = parse_template(text).unwrap();
    let content = BuiltinContent::new(Box::new(MiniJinjaRenderer::new()));
    Plan::new(&parsed.tree, &content)
}

fn dir(path: &str) -> Operation {
    Operation::CreateDir {
        path: PathBuf::from(path),
    }
}

fn file(path: &str, template: Option<&str>) -> Operation {
    Operation::CreateFile {
        path: PathBuf::from(path),
        template: template.map(str::to_string),
    }
}

#[test]
fn test_plan_order() {
    let plan = plan_for("a/\n\tb.txt\n\tc/\n\t\td.txt\n");
    assert_eq!(
        plan.operations(),
        &[
            dir("a"),
            file("a/b.txt", None),
            dir("a/c"),
            file("a/c/d.txt", None),
        ]
    );
    assert_eq!(plan.project_name(), "a");
}

#[test]
fn test_duplicate_sibling_last_one_wins() {
    let plan = plan_for("app/\n\tsrc/\n\t\told.rs\n\tREADME.md\n\tsrc/\n\t\tnew.rs\n");
    assert_eq!(
        plan.operations(),
        &[
            dir("app"),
            file("app/README.md", Some("README.md")),
            dir("app/src"),
            file("app/src/new.rs", None),
        ]
    );
}

#[test]
fn test_synthetic_root_is_planned() {
    let plan = plan_for("a/\nb.txt\n");
    assert_eq!(
        plan.operations(),
        &[dir("crig_root"), dir("crig_root/a"), file("crig_root/b.txt", None)]
    );
    assert_eq!(plan.project_name(), "a");
}

#[test]
fn test_single_file_root() {
    let plan = plan_for("main.py\n");
    assert_eq!(plan.operations(), &[file("main.py", Some("main.py"))]);
}

#[test]
fn test_templated_files() {
    let plan = plan_for(crig::constants::DEFAULT_TEMPLATE);
    let templated: Vec<_> = plan.templated_files().collect();
    assert_eq!(
        templated,
        vec![
            Path::new("myproject/src/__init__.py"),
            Path::new("myproject/src/main.py"),
            Path::new("myproject/README.md"),
            Path::new("myproject/.gitignore"),
        ]
    );
    assert!(plan.operations().iter().any(|op| op.path() == Path::new("myproject/tests")
        && op.is_directory()));
}

#[test]
fn test_plan_context() {
    let plan = plan_for("app/\n\tmain.rs\n");
    let context = plan.context();
    assert_eq!(context["project_name"], "app");
    assert_eq!(context["structure"], "app/\n└── main.rs");
}
