/// Data model: source lines, include directives, search paths and resolved files.
pub mod ast;

/// Parsers recognising whole-line `#include "..."` and `#include <...>` directives.
pub mod parse;

/// Maps include directives to existing files, beside the includer or along the search paths.
pub mod resolve;

/// The recursive inliner, writing a file with all its includes expanded in place.
pub mod inline;

/// Driver opening the top-level input and output files around an `Inliner`.
pub mod preprocess;

pub mod config;
pub mod error;
pub mod report;


pub use ast::SearchPaths;
pub use config::{Config, LineEndings};
pub use error::{Error, Result};
pub use preprocess::{preprocess, Preprocessor};
pub use report::Reporter;
