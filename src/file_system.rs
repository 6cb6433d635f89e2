use std::ops::{
    Deref,
    DerefMut,
};

use tracing::debug;

use crate::{
    name::validate,
    Directory,
    NameError,
};

/// Name given to the root directory when none is supplied.
pub const DEFAULT_ROOT: &str = "root";

// =============================================================================
// FileSystem
// =============================================================================

#[derive(Clone, Debug)]
pub struct FileSystem {
    root: Directory,
}

// -----------------------------------------------------------------------------
// FileSystem - Traits
// -----------------------------------------------------------------------------

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for FileSystem {
    type Target = Directory;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for FileSystem {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

// -----------------------------------------------------------------------------
// FileSystem - Methods
// -----------------------------------------------------------------------------

// FileSystem - Methods - New

impl FileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Directory::create(String::from(DEFAULT_ROOT)),
        }
    }

    pub fn setup(root: impl Into<String>) -> Result<Self, NameError> {
        let root = validate(root)?;

        debug!(%root, "setting up file system");

        Ok(Self {
            root: Directory::create(root),
        })
    }
}

// FileSystem - Methods - Root

impl FileSystem {
    #[must_use]
    pub const fn root(&self) -> &Directory {
        &self.root
    }

    #[must_use]
    pub fn into_root(self) -> Directory {
        self.root
    }
}
