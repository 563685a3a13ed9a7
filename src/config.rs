use crate::ast::SearchPaths;

/// What happens to a `\r` left at the end of a copied line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndings {
    /// Keep it as line content. Every copied line still ends in a single `\n`.
    #[default]
    Retain,
    StripCarriageReturn,
}

/// Settings for one preprocessing run. Nothing here changes while the run is in progress.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub search_paths: SearchPaths,
    pub line_endings: LineEndings,
}

impl Config {
    pub fn new(search_paths: SearchPaths) -> Self {
        for dir in search_paths.iter().filter(|dir| !dir.is_dir()) {
            log::warn!("search path {} is not a directory and will never match", dir.display());
        }
        Self { search_paths, line_endings: LineEndings::default() }
    }
    pub fn with_line_endings(self, line_endings: LineEndings) -> Self {
        Self { line_endings, ..self }
    }
}

impl LineEndings {
    /// `line` is the content without its `\n`.
    pub fn apply<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        match self {
            LineEndings::Retain => line,
            LineEndings::StripCarriageReturn => line.strip_suffix(b"\r").unwrap_or(line),
        }
    }
}
