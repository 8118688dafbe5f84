use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/views.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["summary-json", "toc-json", "tree-json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("treemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for processing markdown documents into annotated trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markdown file")
                .required_unless_present("list-views")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("view")
                .help("View to emit (e.g., 'summary-json', 'tree-json')")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                .index(2)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available views")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "treemark", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "treemark", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "treemark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
