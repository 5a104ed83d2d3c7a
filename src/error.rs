use alloc::string::{String, ToString};
use core::fmt::Display;

/// Errors that can occur while opening, closing or resolving against the platform loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native loader reported a failure. `msg` is the loader's own message, read from `dlerror`.
    LoaderError { msg: String },
    /// The provided path contains an interior nul byte.
    InvalidPath,
    /// The provided symbol name contains an interior nul byte.
    InvalidSymbolName { name: String },
}

impl Error {
    /// The loader message carried by this error.
    ///
    /// [`InvalidPath`](Error::InvalidPath) and [`InvalidSymbolName`](Error::InvalidSymbolName) never
    /// reach the loader; for them this returns the fixed texts `"Invalid path"` and
    /// `"Invalid symbol name"`, which did not come from `dlerror`.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::LoaderError { msg } => msg,
            Error::InvalidPath => "Invalid path",
            Error::InvalidSymbolName { .. } => "Invalid symbol name",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::LoaderError { msg } => write!(f, "{msg}"),
            Error::InvalidPath => write!(f, "Invalid path"),
            Error::InvalidSymbolName { name } => write!(f, "Invalid symbol name: {name:?}"),
        }
    }
}

impl core::error::Error for Error {}

#[cold]
#[inline(never)]
pub(crate) fn loader_error(msg: impl ToString) -> Error {
    Error::LoaderError {
        msg: msg.to_string(),
    }
}

#[cold]
#[inline(never)]
pub(crate) fn invalid_symbol_name(name: &str) -> Error {
    Error::InvalidSymbolName {
        name: name.to_string(),
    }
}
