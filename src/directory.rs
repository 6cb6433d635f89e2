mod cursor;
mod get;

use tracing::debug;

use crate::{
    name::{
        validate,
        SEPARATOR,
    },
    Container,
    Count,
    Kind,
    NameError,
    Named,
    Node,
    Size,
};

// =============================================================================

// Directory

/// A named node owning an ordered list of children. Children are kept in
/// insertion order and names are not required to be unique; lookups return
/// the first match.
#[derive(Clone, Debug)]
pub struct Directory {
    name: String,
    children: Vec<Node>,
    position: usize,
}

// -----------------------------------------------------------------------------

// Directory - Trait Implementations

impl Named for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::Directory
    }

    fn rename(&mut self, name: impl Into<String>) -> Result<(), NameError> {
        let name = validate(name)?;

        debug!(from = %self.name, to = %name, "renaming directory");

        self.name = name;

        Ok(())
    }
}

// -----------------------------------------------------------------------------

// Directory - Create

impl Directory {
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        validate(name).map(Self::create)
    }

    /// Builds a chain of directories from `path` (`a/b/c`), returning the
    /// outermost. Leading and trailing separators are ignored.
    pub fn new_nested(path: &str) -> Result<Self, NameError> {
        let mut segments = path.trim_matches(SEPARATOR).rsplit(SEPARATOR);
        let innermost = segments.next().unwrap_or_default();

        segments.try_fold(Self::new(innermost)?, |child, segment| {
            let mut parent = Self::new(segment)?;

            parent.add_child(child);

            Ok(parent)
        })
    }

    pub(crate) fn create(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
            position: 0,
        }
    }
}


// -----------------------------------------------------------------------------

// Directory - Size

impl Size for Directory {
    fn size(&self) -> u64 {
        0
    }

    fn size_summarized(&self) -> u64 {
        self.children
            .iter()
            .map(|child| match child {
                Node::Directory(dir) => dir.size_summarized(),
                Node::File(file) => file.size(),
            })
            .sum()
    }
}

#[cfg(test)]
mod size_tests {
    use super::Directory;
    use crate::{
        Container,
        File,
        Size,
    };

    #[test]
    fn size_empty() -> anyhow::Result<()> {
        let dir = Directory::new("empty")?;

        assert_eq!(dir.size(), 0);
        assert_eq!(dir.size_summarized(), 0);

        Ok(())
    }

    #[test]
    fn size_summarized() -> anyhow::Result<()> {
        let mut dir_b = Directory::new("dirB")?;
        dir_b.add_child(File::new("fileC")?.with_content(vec![0_u8; 5]));

        let mut dir = Directory::new("dir")?;
        dir.add_child(File::new("fileA")?.with_content(vec![0_u8; 10]));
        dir.add_child(dir_b);

        assert_eq!(dir.size(), 0);
        assert_eq!(dir.size_summarized(), 15);

        Ok(())
    }

    #[test]
    fn size_summarized_after_remove() -> anyhow::Result<()> {
        let mut dir = Directory::new("dir")?;
        dir.add_child(File::new("a")?.with_content("aaaa"));
        dir.add_child(File::new("b")?.with_content("bb"));

        assert!(dir.remove_child("a").is_some());
        assert_eq!(dir.size_summarized(), 2);

        Ok(())
    }
}

// -----------------------------------------------------------------------------

// Directory - Container

impl Container for Directory {
    fn add_child(&mut self, child: impl Into<Node>) {
        let child = child.into();

        debug!(dir = %self.name, child = %child.name(), "adding child");

        self.children.push(child);
    }

    fn remove_child(&mut self, name: &str) -> Option<Node> {
        let index = self
            .children
            .iter()
            .position(|child| child.applies_to(name))?;

        if index < self.position {
            self.position -= 1;
        }

        debug!(dir = %self.name, %name, "removing child");

        Some(self.children.remove(index))
    }

    fn get_child(&self, name: &str) -> Option<&Node> {
        self.resolve(name)
    }

    fn get_child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.resolve_mut(name)
    }

    fn children(&self) -> &[Node] {
        &self.children
    }
}


// -----------------------------------------------------------------------------

// Directory - Count

impl Count for Directory {
    fn count(&self) -> usize {
        self.children.len()
    }

    fn count_dir(&self) -> usize {
        self.count_predicate(Node::is_directory)
    }

    fn count_file(&self) -> usize {
        self.count_predicate(Node::is_file)
    }
}

impl Directory {
    fn count_predicate(&self, predicate: impl Fn(&Node) -> bool) -> usize {
        self.children.iter().filter(|&child| predicate(child)).count()
    }
}
