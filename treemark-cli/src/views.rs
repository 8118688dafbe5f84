//! CLI-specific views over a processed document.
//!
//! Each view runs the full pipeline (parse → process) and serializes one
//! angle of the result:
//!
//! - `summary-json`: extracted metadata (title, TOC, first image)
//! - `toc-json`:     the table of contents alone
//! - `tree-json`:    the annotated document tree

use treemark::{parse_markdown, process, ConfiguredRoutes, ProcessOptions};
use treemark_config::TreemarkConfig;

/// All available CLI views
pub const AVAILABLE_VIEWS: &[&str] = &["summary-json", "toc-json", "tree-json"];

/// The view used when none is named on the command line
pub const DEFAULT_VIEW: &str = "summary-json";

/// Execute a named view over a markdown source
///
/// # Arguments
///
/// * `source` - The markdown text to process
/// * `view_name` - The view to emit (e.g., "summary-json", "tree-json")
/// * `config` - Resolved configuration for the processor and routes
///
/// # Returns
///
/// The serialized output as a string, or an error message
pub fn execute_view(
    source: &str,
    view_name: &str,
    config: &TreemarkConfig,
) -> Result<String, String> {
    let options: ProcessOptions = (&config.processor).into();
    let routes: ConfiguredRoutes = (&config.routes).into();

    let mut root = parse_markdown(source);
    let output =
        process(&mut root, &options, &routes).map_err(|e| format!("Processing failed: {e}"))?;

    match view_name {
        "summary-json" => serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "toc-json" => serde_json::to_string_pretty(&output.toc)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "tree-json" => serde_json::to_string_pretty(&root)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        _ => Err(format!("Unknown view: {view_name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treemark_config::load_defaults;

    const SOURCE: &str = "# Guide\n\n## Install\n\nSome [docs](/wiki/en/Install).\n";

    #[test]
    fn summary_view_emits_title_and_toc() {
        let config = load_defaults().expect("defaults to load");
        let output = execute_view(SOURCE, "summary-json", &config).expect("view to run");

        assert!(output.contains("\"title\": \"Guide\""));
        assert!(output.contains("\"slug\": \"install\""));
    }

    #[test]
    fn toc_view_emits_entries_only() {
        let config = load_defaults().expect("defaults to load");
        let output = execute_view(SOURCE, "toc-json", &config).expect("view to run");

        assert!(output.contains("\"slug\": \"install\""));
        assert!(!output.contains("\"first_image\""));
    }

    #[test]
    fn tree_view_emits_annotated_nodes() {
        let config = load_defaults().expect("defaults to load");
        let output = execute_view(SOURCE, "tree-json", &config).expect("view to run");

        assert!(output.contains("md__paragraph"));
        assert!(output.contains("md__link"));
    }

    #[test]
    fn unknown_views_error() {
        let config = load_defaults().expect("defaults to load");
        let result = execute_view(SOURCE, "nope", &config);

        assert_eq!(result, Err("Unknown view: nope".to_string()));
    }
}
