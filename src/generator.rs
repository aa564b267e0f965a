use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use crate::layout::{EmptyNamespace, Layout};
use crate::namespace::Namespace;
use crate::template::{self, CLASS_TEMPLATE, DEFAULT_PACKAGE_CLASS_TEMPLATE};

/// Writes class stubs into directories of a source tree.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    layout: Layout,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The directory is not inside the source root so nothing was written.
    OutsideSourceRoot,
    Generated {
        namespace: Namespace,
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn path(&self) -> &Path {
        match self {
            GenerateError::Write { path, .. } => path,
        }
    }
}

impl Generator {
    pub fn new(layout: Layout) -> Self {
        Generator {
            layout,
        }
    }

    pub fn namespace_of(&self, dir: &Path) -> Option<Namespace> {
        self.layout.source_root.namespace_of(dir)
    }

    /// Path of the file generated for `name` in `dir`.
    ///
    /// The name is appended to `dir` as is, so even a name starting with `/`
    /// stays below `dir`.
    pub fn target_path(&self, dir: &Path, name: &str) -> PathBuf {
        let mut path = OsString::with_capacity(dir.as_os_str().len() + name.len() + 2 + self.layout.extension.as_str().len());
        path.push(dir.as_os_str());
        path.push("/");
        path.push(name);
        path.push(".");
        path.push(self.layout.extension.as_str());
        PathBuf::from(path)
    }

    /// Generates one class per name in `dir`, in order.
    ///
    /// Existing files are overwritten. The first failure aborts generation;
    /// files written before it are left in place.
    pub fn generate<I>(&self, dir: &Path, names: I) -> Result<Outcome, GenerateError> where I: IntoIterator, I::Item: AsRef<str> {
        let namespace = match self.namespace_of(dir) {
            Some(namespace) => namespace,
            None => {
                debug!(dir = %dir.display(), source_root = ?self.layout.source_root.segments(), "directory is outside of source root, nothing to do");
                return Ok(Outcome::OutsideSourceRoot);
            },
        };
        let package = namespace.to_string();
        let template = match (namespace.is_empty(), self.layout.empty_namespace) {
            (true, EmptyNamespace::Omit) => DEFAULT_PACKAGE_CLASS_TEMPLATE,
            _ => CLASS_TEMPLATE,
        };

        let mut files = Vec::new();
        for name in names {
            let name = name.as_ref();
            let path = self.target_path(dir, name);
            let vars = [("package", package.as_str()), ("name", name)];
            write_class(&path, template, &vars).map_err(|source| GenerateError::Write { path: path.clone(), source })?;
            debug!(path = %path.display(), class = name, "generated class");
            files.push(path);
        }

        info!(package = %package, count = files.len(), "generation finished");
        Ok(Outcome::Generated {
            namespace,
            files,
        })
    }
}

fn write_class(path: &Path, template: &str, vars: &[(&str, &str)]) -> io::Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut out = io::BufWriter::new(file);
    fmt2io::write(&mut out, |out| {
        use std::fmt::Write;

        write!(out, "{}", template::expand(template, vars))
    })?;
    out.flush()
}
