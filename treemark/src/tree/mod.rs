//! The document tree the processor operates on.

mod node;
mod walk;

pub use node::{CellAlignment, Node, NodeKind};
pub use walk::{walk, Phase};
