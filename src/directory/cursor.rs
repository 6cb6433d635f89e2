use std::slice::Iter;

use super::Directory;
use crate::{
    Cursor,
    Node,
};

// =============================================================================
// Cursor
// =============================================================================

// The cursor is an index into the children. `remove_child` shifts it back
// when an earlier child is removed, so a traversal in progress still visits
// every remaining child exactly once.

impl Cursor for Directory {
    fn rewind(&mut self) {
        self.position = 0;
    }

    fn current(&self) -> Option<&Node> {
        self.children.get(self.position)
    }

    fn next(&mut self) {
        if self.position < self.children.len() {
            self.position += 1;
        }
    }
}

// =============================================================================
// Iter
// =============================================================================

impl Directory {
    pub fn iter(&self) -> Iter<'_, Node> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type IntoIter = Iter<'a, Node>;
    type Item = &'a Node;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
