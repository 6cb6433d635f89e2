use tracing::debug;

use crate::{
    name::validate,
    Kind,
    NameError,
    Named,
    Size,
};

// =============================================================================

// File

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct File {
    name: String,
    content: Vec<u8>,
}

// -----------------------------------------------------------------------------

// File - Trait Implementations

impl Named for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Kind {
        Kind::File
    }

    fn rename(&mut self, name: impl Into<String>) -> Result<(), NameError> {
        let name = validate(name)?;

        debug!(from = %self.name, to = %name, "renaming file");

        self.name = name;

        Ok(())
    }
}

impl Size for File {
    fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

// -----------------------------------------------------------------------------

// File - Create

impl File {
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Ok(Self {
            name: validate(name)?,
            content: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }
}

// -----------------------------------------------------------------------------

// File - Content

impl File {
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) {
        self.content = content.into();
    }
}
