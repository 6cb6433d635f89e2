use crate::{
    Directory,
    File,
    NameError,
    Named,
    Size,
};

// =============================================================================
// Kind
// =============================================================================

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Directory,
    File,
}

// =============================================================================
// Node
// =============================================================================

#[derive(Clone, Debug)]
pub enum Node {
    Directory(Directory),
    File(File),
}

// -----------------------------------------------------------------------------
// Node - Traits
// -----------------------------------------------------------------------------

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Self::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl Named for Node {
    fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => dir.name(),
            Self::File(file) => file.name(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Self::Directory(_) => Kind::Directory,
            Self::File(_) => Kind::File,
        }
    }

    fn rename(&mut self, name: impl Into<String>) -> Result<(), NameError> {
        match self {
            Self::Directory(dir) => dir.rename(name),
            Self::File(file) => file.rename(name),
        }
    }
}

impl Size for Node {
    fn size(&self) -> u64 {
        match self {
            Self::Directory(dir) => dir.size(),
            Self::File(file) => file.size(),
        }
    }

    fn size_summarized(&self) -> u64 {
        match self {
            Self::Directory(dir) => dir.size_summarized(),
            Self::File(file) => file.size_summarized(),
        }
    }
}

// -----------------------------------------------------------------------------
// Node - Methods
// -----------------------------------------------------------------------------

impl Node {
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    #[must_use]
    pub const fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    #[must_use]
    pub const fn as_file(&self) -> Option<&File> {
        match self {
            Self::Directory(_) => None,
            Self::File(file) => Some(file),
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut File> {
        match self {
            Self::Directory(_) => None,
            Self::File(file) => Some(file),
        }
    }
}

#[cfg(test)]
mod node_tests {
    use super::{
        Kind,
        Node,
    };
    use crate::{
        Directory,
        File,
        Named,
        Size,
    };

    #[test]
    fn kind_and_accessors() -> anyhow::Result<()> {
        let mut dir = Node::from(Directory::new("dir")?);
        let mut file = Node::from(File::new("file")?.with_content("abc"));

        assert_eq!(dir.kind(), Kind::Directory);
        assert_eq!(file.kind(), Kind::File);
        assert!(dir.is_directory() && !dir.is_file());
        assert!(file.is_file() && !file.is_directory());
        assert!(dir.as_directory().is_some());
        assert!(dir.as_file_mut().is_none());
        assert!(file.as_file().is_some());
        assert!(file.as_directory_mut().is_none());

        Ok(())
    }

    #[test]
    fn rename_delegates() -> anyhow::Result<()> {
        let mut node = Node::from(File::new("before")?);

        node.rename("after")?;

        assert_eq!(node.name(), "after");
        assert!(node.rename("a/b").is_err());
        assert_eq!(node.name(), "after");

        Ok(())
    }

    #[test]
    fn applies_to() -> anyhow::Result<()> {
        let node = Node::from(Directory::new("sub")?);

        assert!(node.applies_to("sub"));
        assert!(node.applies_to("sub/file"));
        assert!(node.applies_to("sub/"));
        assert!(!node.applies_to("subway"));
        assert!(!node.applies_to("root/sub"));
        assert!(!node.applies_to(""));

        Ok(())
    }

    #[test]
    fn size_delegates() -> anyhow::Result<()> {
        let file = Node::from(File::new("file")?.with_content(vec![0_u8; 7]));

        assert_eq!(file.size(), 7);
        assert_eq!(file.size_summarized(), 7);

        Ok(())
    }
}
