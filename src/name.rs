use tracing::debug;

use crate::NameError;

/// Separates the segments of a path within the tree.
pub const SEPARATOR: char = '/';

// Validate

pub(crate) fn validate(name: impl Into<String>) -> Result<String, NameError> {
    let name = name.into();

    if name.contains(SEPARATOR) {
        debug!(%name, "rejected name containing separator");

        return Err(NameError::InvalidName { name });
    }

    Ok(name)
}
