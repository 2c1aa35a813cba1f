//! crig's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template parsing, and either the
//! dry-run preview or the generation of the project structure.

use std::path::Path;

use crig::{
    cli::{get_args, Args},
    config::{get_config, IndentPolicy},
    content::BuiltinContent,
    error::{default_error_handler, Result},
    logger::init_logger,
    parser::TemplateParser,
    plan::Plan,
    processor::{Action, Processor},
    renderer::MiniJinjaRenderer,
    template::{read_template, write_default_template},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. With `--init`, writes the starter template and stops
/// 2. Reads the template and its optional configuration
/// 3. Parses and validates the template, aborting on any fatal defect
/// 4. Plans the filesystem operations
/// 5. Previews them (`--dry-run`) or applies them
fn run(args: Args) -> Result<()> {
    if args.init {
        write_default_template(&args.template, args.force)?;
        println!("Starter template written to {}.", args.template.display());
        println!("Edit it, then run `crig` to generate the structure.");
        return Ok(());
    }

    let text = read_template(&args.template)?;
    let template_dir = args.template.parent().unwrap_or(Path::new(""));
    let mut config = get_config(template_dir)?;
    if args.tabs_only {
        config.indent = IndentPolicy::Tabs;
    }

    let parsed = TemplateParser::new(config).parse(&text)?;
    if args.explain {
        print!("{}", parsed.explain());
    }

    let content = BuiltinContent::new(Box::new(MiniJinjaRenderer::new()));
    let plan = Plan::new(&parsed.tree, &content);
    let processor = Processor::new(&content, &args.output_dir, args.force);

    if args.dry_run {
        println!("Dry run, nothing will be written.\n");
        println!("{}", processor.preview(&plan));
        return Ok(());
    }

    let summary = processor.apply_with(&plan, |result| {
        if result.action != Action::Skipped {
            println!("{}: '{}'", result.action, result.target.display());
        }
    })?;
    println!("{summary}");
    println!(
        "Project structure created successfully in {}.",
        args.output_dir.display()
    );
    Ok(())
}
