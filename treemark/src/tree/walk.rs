//! Depth-first enter/leave traversal over a mutable tree.
//!
//! The walk emits every node twice: `Enter` before its descendants, `Leave`
//! after all of them. Leaf nodes get `Enter` immediately followed by `Leave`.
//! The callback receives mutable access to the current node, so passes rewrite
//! the tree in place while the walk is running.
//!
//! Structural mutation rules:
//!
//! - The visible child count is snapshotted before `Enter` fires, so children
//!   appended to a node during its own visit are never visited by the
//!   in-flight traversal.
//! - Mutations to the contents of not-yet-visited siblings are observed by
//!   their later visits.
//! - Removing children mid-walk shrinks the tree under the snapshot; the walk
//!   skips past the end rather than panicking.

use crate::tree::Node;

/// Which side of a node's visit the callback is seeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Leave,
}

/// Walks `node` depth-first, invoking `visit` on every (node, phase) pair.
///
/// A callback error aborts the walk immediately and propagates to the caller.
pub fn walk<E, F>(node: &mut Node, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Node, Phase) -> Result<(), E>,
{
    let visible = node.children.len();
    visit(node, Phase::Enter)?;
    for index in 0..visible {
        if index >= node.children.len() {
            break;
        }
        walk(&mut node.children[index], visit)?;
    }
    visit(node, Phase::Leave)
}
