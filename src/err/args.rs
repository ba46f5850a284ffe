use std::path::Path;
use std::{fmt, sync::Arc};

#[derive(Debug, Clone)]
pub enum ArgVal {
    Str(Arc<str>),
    Int(i64),
}

impl From<String> for ArgVal {
    #[inline]
    fn from(s: String) -> Self {
        ArgVal::Str(Arc::<str>::from(s))
    }
}

impl From<&str> for ArgVal {
    #[inline]
    fn from(s: &str) -> Self {
        ArgVal::Str(Arc::<str>::from(s))
    }
}

impl From<&Path> for ArgVal {
    #[inline]
    fn from(p: &Path) -> Self {
        ArgVal::Str(Arc::<str>::from(p.display().to_string()))
    }
}

impl From<usize> for ArgVal {
    fn from(v: usize) -> Self {
        ArgVal::Int(v as i64)
    }
}

impl fmt::Display for ArgVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgVal::Str(s) => write!(f, "{s:?}"),
            ArgVal::Int(i) => write!(f, "{i}"),
        }
    }
}

impl ArgVal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgVal::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}
