use tracing::trace;

use super::Directory;
use crate::{
    Container,
    Named,
    Node,
};

// =============================================================================
// Get
// =============================================================================

// Paths are resolved one segment per level. Each directory strips its own
// name from the front of the path (when the path applies to it) and hands the
// remainder to its children, so no absolute path is ever stored.

impl Directory {
    pub(super) fn resolve(&self, path: &str) -> Option<&Node> {
        let child_path = self.child_path(path);
        let found = self.children.iter().find_map(|child| match child {
            _ if child.name() == child_path => Some(child),
            Node::Directory(dir) if dir.applies_to(child_path) => dir.resolve(child_path),
            _ => None,
        });

        if found.is_none() {
            trace!(dir = %self.name, %path, "no child found");
        }

        found
    }

    pub(super) fn resolve_mut(&mut self, path: &str) -> Option<&mut Node> {
        let child_path = self.child_path(path);
        let index = self.children.iter().position(|child| match child {
            _ if child.name() == child_path => true,
            Node::Directory(dir) => dir.applies_to(child_path) && dir.has_child(child_path),
            Node::File(_) => false,
        })?;

        let child = &mut self.children[index];

        if child.name() == child_path {
            return Some(child);
        }

        child
            .as_directory_mut()
            .and_then(|dir| dir.resolve_mut(child_path))
    }

    /// The part of `path` addressed to the children of this directory.
    fn child_path<'p>(&self, path: &'p str) -> &'p str {
        if self.applies_to(path) {
            path.get(self.name.len() + 1..).unwrap_or_default()
        } else {
            path
        }
    }
}
