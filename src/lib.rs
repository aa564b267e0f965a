//! Generator of empty Java class stubs.
//!
//! The package of a generated class is inferred from the position of the
//! target directory inside a `src/main/java` source tree.

pub mod namespace;
pub mod template;
pub mod layout;
pub mod generator;
pub mod error_report;

pub use namespace::{Namespace, SourceRoot};
pub use layout::{EmptyNamespace, Extension, Layout, LoadTomlError, load_toml};
pub use generator::{GenerateError, Generator, Outcome};

use std::path::Path;

/// Generates classes for `names` in `dir` using the default layout.
pub fn generate<I>(dir: &Path, names: I) -> Result<Outcome, GenerateError> where I: IntoIterator, I::Item: AsRef<str> {
    Generator::default().generate(dir, names)
}
