//! Layout of the source tree and how generated files look.

use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use serde_derive::Deserialize;
use crate::namespace::SourceRoot;

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub source_root: SourceRoot,
    pub extension: Extension,
    pub empty_namespace: EmptyNamespace,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            source_root: SourceRoot::default(),
            extension: Extension::default(),
            empty_namespace: EmptyNamespace::default(),
        }
    }
}

impl Layout {
    pub fn load<P: AsRef<Path> + Into<PathBuf>>(file: P) -> Result<Self, LoadTomlError> {
        load_toml(file)
    }
}

/// What to write when generating directly inside the source root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyNamespace {
    /// Emit `package ;` like files generated so far.
    Keep,
    /// Leave out the package declaration.
    Omit,
}

impl Default for EmptyNamespace {
    fn default() -> Self {
        EmptyNamespace::Keep
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Extension(String);

impl Extension {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Extension {
    fn default() -> Self {
        Extension("java".to_owned())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid file extension {0:?}")]
pub struct ExtensionError(String);

impl TryFrom<String> for Extension {
    type Error = ExtensionError;

    fn try_from(extension: String) -> Result<Self, Self::Error> {
        if extension.is_empty() || extension.starts_with('.') || extension.contains(std::path::is_separator) {
            Err(ExtensionError(extension))
        } else {
            Ok(Extension(extension))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadTomlErrorSource {
    #[error("failed to read")]
    Read(#[from] std::io::Error),
    #[error("failed to parse")]
    Parse {
        #[source]
        error: toml::de::Error,
        contents: String,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("failed to load Toml file {}", path.display())]
pub struct LoadTomlError {
    path: PathBuf,
    #[source]
    pub(crate) inner: LoadTomlErrorSource,
}

impl LoadTomlError {
    fn with_path<E: Into<LoadTomlErrorSource>, P: Into<PathBuf>>(path: P) -> impl FnOnce(E) -> Self {
        |error| LoadTomlError {
            path: path.into(),
            inner: error.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Contents of the file if it was read successfully.
    pub fn contents(&self) -> Option<&str> {
        match &self.inner {
            LoadTomlErrorSource::Read(_) => None,
            LoadTomlErrorSource::Parse { contents, .. } => Some(contents),
        }
    }
}

pub fn load_toml<T: for<'a> serde::Deserialize<'a>, P: AsRef<Path> + Into<PathBuf>>(file: P) -> Result<T, LoadTomlError> {
    let file = file.as_ref();
    let contents = std::fs::read_to_string(file).map_err(LoadTomlError::with_path(file))?;
    let parsed = toml::from_str(&contents);
    parsed
        .map_err(|error| LoadTomlErrorSource::Parse { error, contents })
        .map_err(LoadTomlError::with_path(file))
}
