//! Markdown tree annotation for site rendering pipelines
//!
//!     This crate takes an already-parsed markdown document tree and rewrites it in
//!     a single traversal: URLs are normalized and resolved against a wiki, images
//!     are routed through a media proxy, headings grow stable anchor ids, figures
//!     and table cells pick up CSS classes, and the document's title, table of
//!     contents and leading image are extracted as a side product.
//!
//!     This is a pure lib: it powers the treemark-cli but is shell agnostic, that
//!     is no code here prints, reads env vars or touches the filesystem.
//!
//! Architecture
//!
//!     The work is split into a small set of layers so that the rewrite logic can
//!     be tested in isolation from any concrete markdown parser or site:
//!
//!     .
//!     ├── error.rs          # ProcessError
//!     ├── tree              # Node model and the enter/leave traversal driver
//!     │   ├── node.rs
//!     │   └── walk.rs
//!     ├── processor         # Per-document session and the rewrite passes
//!     │   ├── classes.rs
//!     │   ├── figures.rs
//!     │   ├── headings.rs
//!     │   ├── images.rs
//!     │   ├── links.rs
//!     │   └── wiki.rs
//!     ├── routes.rs         # SiteRoutes seam + ConfiguredRoutes implementation
//!     └── markdown.rs       # Comrak ingestion adapter (CommonMark → Node)
//!
//! The Tree
//!
//!     The tree is an owned structure: each node carries a closed kind enum, an
//!     attribute bag for injected metadata (class, id) and its children. Nothing
//!     in the processor depends on comrak; the adapter in markdown.rs is the only
//!     place that knows how the tree was produced, and callers are free to build
//!     trees from any other parser.
//!
//! The Processor
//!
//!     One document gets one session. The session owns the cross-node state
//!     (title and first-image latches, slug counters, list nesting depth, wiki
//!     path geometry) and runs every pass for every (node, phase) emission in a
//!     fixed order. Collaborator lookups that build URLs go through the
//!     [`SiteRoutes`] trait; a failing collaborator aborts the whole document and
//!     the error surfaces to the caller. Nothing is retried.
//!
//! Library Choices
//!
//!     Parsing markdown is offloaded to comrak, relative path geometry to
//!     pathdiff, and percent-encoding to the url crate. The engine itself stays
//!     dependency-light so it can sit inside larger rendering pipelines.

pub mod error;
pub mod markdown;
pub mod processor;
pub mod routes;
pub mod tree;

pub use error::ProcessError;
pub use markdown::parse_markdown;
pub use processor::{process, ProcessOptions, ProcessOutput, TocEntry};
pub use routes::{ConfiguredRoutes, SiteRoutes};
pub use tree::{walk, CellAlignment, Node, NodeKind, Phase};
