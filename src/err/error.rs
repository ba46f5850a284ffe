use crate::err::args::ArgVal;
use crate::err::cause::Cause;
use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct ToolError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, ArgVal>,
    pub causes: Vec<Cause>,
}

impl ToolError {
    /// Wrap this error into a new one with `key`, keeping it as the cause.
    #[inline]
    pub fn ctx(self, key: &'static str) -> ToolError {
        ToolError::new(key).push_tool(self)
    }

    #[inline]
    pub fn ctx_with(self, key: &'static str, f: impl FnOnce(ToolError) -> ToolError) -> ToolError {
        f(ToolError::new(key).push_tool(self))
    }

    #[inline]
    pub fn new(key: &'static str) -> Self {
        Self { key, args: BTreeMap::new(), causes: Vec::new() }
    }

    #[inline]
    pub fn with_arg(mut self, name: &'static str, val: impl Into<ArgVal>) -> Self {
        self.args.insert(name, val.into());
        self
    }

    #[inline]
    pub fn push_tool(mut self, cause: ToolError) -> Self {
        self.causes.push(Cause::Tool(cause));
        self
    }

    #[inline]
    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes
            .push(Cause::Std(Arc::new(cause)));
        self
    }

    /// Walks the cause tree looking for an `io::Error` and returns its kind.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        self.causes
            .iter()
            .find_map(|c| match c {
                Cause::Tool(e) => e.io_kind(),
                Cause::Std(e) => e
                    .downcast_ref::<io::Error>()
                    .map(io::Error::kind),
            })
    }

    /// Multi-line rendering of the whole cause tree, two spaces per level.
    pub fn tree(&self) -> TreeFmt<'_> {
        TreeFmt { root: self }
    }
}

pub struct TreeFmt<'a> {
    root: &'a ToolError,
}

impl fmt::Display for TreeFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_line(f: &mut fmt::Formatter<'_>, err: &ToolError, indent: usize) -> fmt::Result {
            for _ in 0..indent {
                f.write_str("  ")?;
            }
            writeln!(f, "{err}")?;
            for c in &err.causes {
                match c {
                    Cause::Tool(e) => write_line(f, e, indent + 1)?,
                    Cause::Std(e) => {
                        for _ in 0..(indent + 1) {
                            f.write_str("  ")?;
                        }
                        writeln!(f, "{e}")?;
                    }
                }
            }
            Ok(())
        }

        write_line(f, self.root, 0)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes
            .iter()
            .find_map(|c| match c {
                Cause::Tool(e) => Some(e as &dyn std::error::Error),
                Cause::Std(e) => Some(e.as_ref()),
            })
    }
}

impl From<io::Error> for ToolError {
    fn from(e: io::Error) -> Self {
        ToolError::new("io-error").push_std(e)
    }
}

impl From<image::ImageError> for ToolError {
    fn from(e: image::ImageError) -> Self {
        ToolError::new("image-error").push_std(e)
    }
}

impl From<walkdir::Error> for ToolError {
    fn from(e: walkdir::Error) -> Self {
        let mut err = ToolError::new("walk-error");
        if let Some(path) = e.path() {
            err = err.with_arg("path", path);
        }
        err.push_std(e)
    }
}

impl From<tempfile::PersistError> for ToolError {
    fn from(e: tempfile::PersistError) -> Self {
        // dropping the returned NamedTempFile removes it
        ToolError::new("persist-error").push_std(e.error)
    }
}
