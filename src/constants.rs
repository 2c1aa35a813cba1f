//! Common constants used throughout the crig application.

/// Template file used when `--template` is not given
pub const DEFAULT_TEMPLATE_FILE: &str = "template.txt";

/// Supported configuration file names, looked up next to the template
pub const CONFIG_FILES: [&str; 3] = ["crig.json", "crig.yml", "crig.yaml"];

/// Name of the wrapper directory used when a template declares several top-level entries
pub const SYNTHETIC_ROOT: &str = "crig_root";

/// Marker starting a comment, either on its own line or after an entry
pub const COMMENT_MARKER: &str = "//";

/// Number of spaces forming one indentation level
pub const SPACE_INDENT_WIDTH: usize = 4;

/// Starter template written by `crig --init`
pub const DEFAULT_TEMPLATE: &str = "myproject/
├── src/
│   ├── __init__.py
│   └── main.py
├── tests/
├── README.md
├── requirements.txt
└── .gitignore
";
