use crate::{
    name::SEPARATOR,
    Kind,
    NameError,
    Node,
};

// =============================================================================

// Named

/// Identity of a node within its parent, shared by directories and files.
pub trait Named {
    fn name(&self) -> &str;

    fn kind(&self) -> Kind;

    fn rename(&mut self, name: impl Into<String>) -> Result<(), NameError>;

    /// Whether `path` denotes this node (`name`) or something beneath it
    /// (`name/...`). The test is against the bare name, so a path is matched
    /// relative to the node's parent.
    fn applies_to(&self, path: &str) -> bool {
        path.strip_prefix(self.name())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
    }
}

// =============================================================================

// Size

pub trait Size {
    /// Bytes held by the node itself.
    fn size(&self) -> u64;

    /// Bytes held by the node and everything beneath it.
    fn size_summarized(&self) -> u64 {
        self.size()
    }
}

// =============================================================================

// Container

pub trait Container {
    fn add_child(&mut self, child: impl Into<Node>);

    fn remove_child(&mut self, name: &str) -> Option<Node>;

    fn has_child(&self, name: &str) -> bool {
        self.get_child(name).is_some()
    }

    fn get_child(&self, name: &str) -> Option<&Node>;

    fn get_child_mut(&mut self, name: &str) -> Option<&mut Node>;

    fn children(&self) -> &[Node];
}

// =============================================================================

// Cursor

/// Single, stateful cursor over the children of a container.
pub trait Cursor {
    fn rewind(&mut self);

    fn current(&self) -> Option<&Node>;

    fn key(&self) -> Option<&str> {
        self.current().map(Named::name)
    }

    fn next(&mut self);

    fn valid(&self) -> bool {
        self.current().is_some()
    }
}

// =============================================================================

// Count

pub trait Count {
    fn count(&self) -> usize;

    fn count_dir(&self) -> usize;

    fn count_file(&self) -> usize;
}
