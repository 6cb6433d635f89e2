#![deny(
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    unsafe_code,
    unused
)]
#![deny(
    rust_2018_compatibility,
    rust_2018_idioms
)]
#![deny(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic
)]
#![allow( // TODO: document the public surface and drop these
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    missing_docs,
    rustdoc::all
)]

mod directory;
mod error;
mod file;
mod file_system;
mod name;
mod node;
mod traits;

pub use directory::Directory;
pub use error::NameError;
pub use file::File;
pub use file_system::{
    FileSystem,
    DEFAULT_ROOT,
};
pub use name::SEPARATOR;
pub use node::{
    Kind,
    Node,
};
pub use traits::{
    Container,
    Count,
    Cursor,
    Named,
    Size,
};
