//! Depth-first root-to-target path finding
//!
//! The frontier is an explicit stack, so pop order does not follow the
//! current path. Before appending a popped node the path is unwound until
//! its last element is the node's parent.

use std::collections::HashSet;

use tracing::trace;

use super::traversal::GraphProvider;
use super::types::{NodeId, PathResult};

/// Unwind `path` until its tail has an edge to `node`, then append `node`
fn attach(provider: &dyn GraphProvider, path: &mut Vec<NodeId>, node: NodeId) {
    while let Some(&tail) = path.last() {
        if provider.is_child(node, tail) {
            break;
        }
        path.pop();
    }
    path.push(node);
}

/// Pop the next frontier node that has not been visited yet
fn next_unvisited(stack: &mut Vec<NodeId>, visited: &HashSet<NodeId>) -> Option<NodeId> {
    while let Some(node) = stack.pop() {
        if !visited.contains(&node) {
            return Some(node);
        }
    }
    None
}

/// Search depth-first from `root` for `target`.
///
/// Each node is visited at most once, so cyclic input terminates. When the
/// target is unreachable the result has `found == false` and a distance of 0.
pub fn find_path(provider: &dyn GraphProvider, root: NodeId, target: NodeId) -> PathResult {
    let mut stack: Vec<NodeId> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut path: Vec<NodeId> = Vec::new();
    let mut current = root;

    loop {
        attach(provider, &mut path, current);
        visited.insert(current);

        if current == target {
            trace!(root, target, ?path, "found path");
            return PathResult {
                root,
                target,
                found: true,
                path,
            };
        }

        for edge in provider.neighbors(current) {
            if !visited.contains(&edge.to) {
                stack.push(edge.to);
            }
        }

        match next_unvisited(&mut stack, &visited) {
            Some(node) => current = node,
            None => break,
        }
    }

    trace!(root, target, "no path");
    PathResult {
        root,
        target,
        found: false,
        path,
    }
}
