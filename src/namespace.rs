//! Mapping of directories inside a source tree to package names.

use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::path::{Component, Path};

/// Consecutive path segments marking the directory where packages begin.
#[derive(Debug, Clone, Eq, PartialEq, serde_derive::Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct SourceRoot(Vec<String>);

impl SourceRoot {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the namespace of `dir` or `None` if `dir` is not inside the source root.
    ///
    /// The segments must match whole path components. If the marker occurs more
    /// than once, the last occurrence wins.
    pub fn namespace_of(&self, dir: &Path) -> Option<Namespace> {
        let components = dir
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                Component::ParentDir => Some(Cow::Borrowed("..")),
                Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
            })
            .collect::<Vec<_>>();

        let marker_len = self.0.len();
        let last_start = components.len().checked_sub(marker_len)?;
        let start = (0..=last_start)
            .rev()
            .find(|&start| components[start..(start + marker_len)].iter().zip(&self.0).all(|(component, segment)| component == segment))?;

        let segments = components
            .into_iter()
            .skip(start + marker_len)
            .map(Cow::into_owned)
            .collect();

        Some(Namespace(segments))
    }
}

impl Default for SourceRoot {
    fn default() -> Self {
        SourceRoot(vec!["src".to_owned(), "main".to_owned(), "java".to_owned()])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceRootError {
    #[error("source root must contain at least one segment")]
    Empty,
    #[error("source root segment {0:?} must be a single non-empty path component")]
    InvalidSegment(String),
}

impl TryFrom<Vec<String>> for SourceRoot {
    type Error = SourceRootError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err(SourceRootError::Empty);
        }

        for segment in &segments {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) if !segment.contains('/') => (),
                _ => return Err(SourceRootError::InvalidSegment(segment.clone())),
            }
        }

        Ok(SourceRoot(segments))
    }
}

/// Package name derived from the directories below the source root.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Namespace(Vec<String>);

impl Namespace {
    /// True for the source root itself (the default package).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut segments = self.0.iter();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
            for segment in segments {
                write!(f, ".{}", segment)?;
            }
        }
        Ok(())
    }
}
