use std::path::{Path, PathBuf};

/// 1-based line number within a single file. Each file restarts its own count.
pub type LineNumber = usize;

/// One line of a file, without its `\n` terminator.
/// A trailing `\r` is still part of `text`.
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    pub file: &'a Path,
    pub number: LineNumber,
    pub text: &'a [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// `#include "target"`
    Local,
    /// `#include <target>`
    Global,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub kind: IncludeKind,
    pub target: String,
}

/// Where an include was requested from. Only used in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Origin<'a> {
    pub file: &'a Path,
    pub line: LineNumber,
}

/// Ordered directories consulted when a target is not found next to its includer.
/// Fixed at construction: order and duplicates are kept as given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

/// An include target reduced to a path that existed when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile(pub PathBuf);

////////////////////////

impl<'a> SourceLine<'a> {
    pub fn origin(&self) -> Origin<'a> {
        Origin { file: self.file, line: self.number }
    }
}

impl SearchPaths {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { dirs: dirs.into_iter().map(Into::into).collect() }
    }
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }
    pub fn len(&self) -> usize {
        self.dirs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl ResolvedFile {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
