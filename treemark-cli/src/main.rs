// Command-line interface for treemark
//
// This binary processes markdown files with the treemark library and prints
// the result as JSON.
//
// Processing runs the full pipeline: parse the markdown, walk the tree once
// applying every rewrite pass (URL normalization, wiki resolution, image
// proxying, TOC and title extraction, figure detection, CSS classes), then
// emit the requested view of the outcome.
//
// Usage:
//  treemark <input.md> [view] [--config <file>] [--output <file>]
//  treemark <input.md> tree-json            - Annotated tree as JSON
//  treemark <input.md> --wiki-locale en --url-root /wiki/en
//  treemark --list-views                    - List available views
//
// Configuration resolves in layers: embedded defaults, then an optional
// --config file, then targeted flags (--wiki-locale, --url-root) on top.

mod views;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::process::exit;
use treemark_config::Loader;

fn build_cli() -> Command {
    Command::new("treemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for processing markdown documents into annotated trees")
        .long_about(
            "treemark processes a markdown document: it rewrites URLs against a wiki, \
            proxies images, extracts the title and table of contents, detects figures \
            and injects CSS classes, then prints the requested view as JSON.\n\n\
            Views:\n  \
            - summary-json: extracted metadata (title, TOC, first image; default)\n  \
            - toc-json:     the table of contents alone\n  \
            - tree-json:    the annotated document tree\n\n\
            Examples:\n  \
            treemark page.md                         # Title, TOC and first image\n  \
            treemark page.md tree-json               # Full annotated tree\n  \
            treemark page.md --config site.toml      # Layer site configuration\n  \
            treemark page.md --wiki-locale en --url-root /wiki/en",
        )
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
                .help("View to emit")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    views::AVAILABLE_VIEWS,
                ))
                .index(2)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a treemark.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("wiki-locale")
                .long("wiki-locale")
                .value_name("LOCALE")
                .help("Process the document as part of the wiki tree for LOCALE"),
        )
        .arg(
            Arg::new("url-root")
                .long("url-root")
                .value_name("PATH")
                .help("URL root prepended to relative links and images"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Write output to FILE instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available views")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-views") {
        for view in views::AVAILABLE_VIEWS {
            println!("{view}");
        }
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("clap enforces the path argument");

    let mut loader = Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(locale) = matches.get_one::<String>("wiki-locale") {
        loader = match loader.set_override("processor.wiki_locale", locale.as_str()) {
            Ok(loader) => loader,
            Err(err) => {
                eprintln!("Invalid --wiki-locale override: {err}");
                exit(1);
            }
        };
    }
    if let Some(root) = matches.get_one::<String>("url-root") {
        loader = match loader.set_override("processor.relative_url_root", root.as_str()) {
            Ok(loader) => loader,
            Err(err) => {
                eprintln!("Invalid --url-root override: {err}");
                exit(1);
            }
        };
    }

    let config = match loader.build() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            exit(1);
        }
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            exit(1);
        }
    };

    let view = matches
        .get_one::<String>("view")
        .map(String::as_str)
        .unwrap_or(views::DEFAULT_VIEW);

    match views::execute_view(&source, view, &config) {
        Ok(output) => {
            if let Some(file) = matches.get_one::<String>("output") {
                if let Err(err) = fs::write(file, format!("{output}\n")) {
                    eprintln!("Failed to write {file}: {err}");
                    exit(1);
                }
            } else {
                println!("{output}");
            }
        }
        Err(message) => {
            eprintln!("{message}");
            exit(1);
        }
    }
}
