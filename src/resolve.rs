use crate::ast::{IncludeDirective, IncludeKind, ResolvedFile, SearchPaths};
use std::path::{Path, PathBuf};

/// Finds the file an include directive refers to.
/// Local targets are looked up next to `includer` first, then in `search_paths`.
/// Global targets only ever consult `search_paths`. The first existing candidate wins.
pub fn resolve(
    directive: &IncludeDirective,
    includer: &Path,
    search_paths: &SearchPaths,
) -> Option<ResolvedFile> {
    let target = Path::new(&directive.target);
    match directive.kind {
        IncludeKind::Local => {
            let beside = includer.parent().unwrap_or(Path::new("")).join(target);
            first_existing(std::iter::once(beside).chain(in_search_paths(target, search_paths)))
        }
        IncludeKind::Global => first_existing(in_search_paths(target, search_paths)),
    }
}

fn in_search_paths<'a>(
    target: &'a Path,
    search_paths: &'a SearchPaths,
) -> impl Iterator<Item = PathBuf> + 'a {
    search_paths.iter().map(move |dir| dir.join(target))
}

fn first_existing(candidates: impl Iterator<Item = PathBuf>) -> Option<ResolvedFile> {
    for candidate in candidates {
        let exists = candidate.exists();
        log::trace!("candidate {} exists={}", candidate.display(), exists);
        if exists {
            return Some(ResolvedFile(candidate));
        }
    }
    None
}
