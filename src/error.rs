use crate::ast::LineNumber;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

/// Every way a run can fail. The `Display` of each variant is the diagnostic
/// line handed to a `Reporter`.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Ошибка: Не удалось открыть входной файл: {}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Ошибка: Не удалось открыть выходной файл: {}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No candidate path existed for an include target.
    #[error("unknown include file {target} at file {} at line {line}", .file.display())]
    UnresolvedInclude { target: String, file: PathBuf, line: LineNumber },

    /// A resolved path existed but could not be opened. `name` is its file name,
    /// `file` and `line` locate the include that pointed at it.
    #[error("unknown include file {name} at file {} at line {line}", .file.display())]
    UnreadableInclude {
        name: String,
        file: PathBuf,
        line: LineNumber,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

/// Result type of the includer library
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// True for failures caused by an include that could not be followed,
    /// as opposed to the top-level streams or I/O.
    pub fn is_include_failure(&self) -> bool {
        matches!(self, Error::UnresolvedInclude { .. } | Error::UnreadableInclude { .. })
    }
}
