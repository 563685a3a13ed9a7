use crate::{
    ast::{Origin, SourceLine},
    config::Config,
    error::{Error, Result},
    parse, resolve,
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

/// Writes files to `output` with every include directive replaced by the
/// recursively inlined contents of its target.
/// The first include that cannot be followed stops every file being read;
/// whatever was written before that point stays in `output`.
pub struct Inliner<'c, W: Write> {
    output: W,
    config: &'c Config,
}

impl<'c, W: Write> Inliner<'c, W> {
    pub fn new(output: W, config: &'c Config) -> Self {
        Self { output, config }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Opens and inlines `path`. `origin` is the include line that led here,
    /// or `None` for a top-level file.
    pub fn inline(&mut self, path: &Path, origin: Option<Origin>) -> Result<()> {
        let file = match (open_source(path), origin) {
            (Ok(file), _) => file,
            (Err(source), None) => return Err(Error::OpenInput { path: path.to_owned(), source }),
            (Err(source), Some(origin)) => {
                return Err(Error::UnreadableInclude {
                    name: file_name(path),
                    file: origin.file.to_owned(),
                    line: origin.line,
                    source,
                })
            }
        };
        self.inline_reader(path, BufReader::new(file))
    }

    /// Inlines the contents of `reader`, which were read from `path`.
    /// `path` locates relative includes and names the file in diagnostics.
    pub fn inline_reader(&mut self, path: &Path, mut reader: impl BufRead) -> Result<()> {
        log::debug!("inlining {}", path.display());
        let mut buf = Vec::new();
        let mut number = 0;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| Error::Read { path: path.to_owned(), source })?;
            if read == 0 {
                return Ok(());
            }
            number += 1;
            let text = buf.strip_suffix(b"\n").unwrap_or(&buf);
            self.line(SourceLine { file: path, number, text })?;
        }
    }

    fn line(&mut self, line: SourceLine) -> Result<()> {
        let Some(directive) = parse::directive_of(&line) else {
            return self.copy(line.text);
        };
        match resolve::resolve(&directive, line.file, &self.config.search_paths) {
            Some(resolved) => self.inline(resolved.path(), Some(line.origin())),
            None => Err(Error::UnresolvedInclude {
                target: directive.target,
                file: line.file.to_owned(),
                line: line.number,
            }),
        }
    }

    fn copy(&mut self, text: &[u8]) -> Result<()> {
        let text = self.config.line_endings.apply(text);
        self.output
            .write_all(text)
            .and_then(|()| self.output.write_all(b"\n"))
            .map_err(Error::Write)
    }
}

/// Directories open fine on some platforms but cannot be read as text.
pub(crate) fn open_source(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::Other, "is a directory"));
    }
    Ok(file)
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::SearchPaths, config::LineEndings};
    use pretty_assertions::assert_eq;
    use std::{fs, path::PathBuf};

    struct Tree {
        dir: tempfile::TempDir,
    }

    impl Tree {
        fn new(files: &[(&str, &str)]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            for (name, contents) in files {
                let path = dir.path().join(name);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, contents).unwrap();
            }
            Self { dir }
        }
        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
        fn inline(&self, name: &str, config: &Config) -> (Result<()>, String) {
            let mut inliner = Inliner::new(Vec::new(), config);
            let result = inliner.inline(&self.path(name), None);
            (result, String::from_utf8(inliner.into_output()).unwrap())
        }
    }

    #[test]
    fn no_includes_is_identity() {
        let text = "int main() {\n    return 0;\n}\n\n// done\n";
        let tree = Tree::new(&[("main.c", text)]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, text);
    }

    #[test]
    fn last_line_gets_a_terminator() {
        let tree = Tree::new(&[("main.c", "a\nb")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn empty_file_emits_nothing() {
        let tree = Tree::new(&[("main.c", "#include \"empty.h\"\nafter\n"), ("empty.h", "")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, "after\n");
    }

    #[test]
    fn include_replaced_in_place() {
        let tree = Tree::new(&[
            ("main.c", "top\n#include \"a.h\"\nbottom\n"),
            ("a.h", "a1\n  #  include \"sub/b.h\"  \na2\n"),
            ("sub/b.h", "b\n"),
        ]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, "top\na1\nb\na2\nbottom\n");
    }

    #[test]
    fn reinclusion_reads_again() {
        let tree = Tree::new(&[("main.c", "#include \"a.h\"\n#include \"a.h\"\n"), ("a.h", "a\n")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, "a\na\n");
    }

    #[test]
    fn search_path_fallback_uses_first_match() {
        let tree = Tree::new(&[
            ("src/main.c", "#include \"x.h\"\n#include <y.h>\n"),
            ("d2/x.h", "x from d2\n"),
            ("d3/x.h", "x from d3\n"),
            ("d3/y.h", "y from d3\n"),
        ]);
        let config =
            Config::new(SearchPaths::new([tree.path("d1"), tree.path("d2"), tree.path("d3")]));
        let (result, out) = tree.inline("src/main.c", &config);
        assert!(result.is_ok());
        assert_eq!(out, "x from d2\ny from d3\n");
    }

    #[test]
    fn global_does_not_look_beside_includer() {
        let tree = Tree::new(&[("main.c", "#include <x.h>\n"), ("x.h", "x\n")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("unknown include file x.h at file {} at line 1", tree.path("main.c").display())
        );
        assert_eq!(out, "");
    }

    #[test]
    fn missing_include_stops_the_file() {
        let tree = Tree::new(&[("main.c", "L1\n#include \"missing.h\"\nL3\n")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        let error = result.unwrap_err();
        assert!(error.is_include_failure());
        assert_eq!(
            error.to_string(),
            format!(
                "unknown include file missing.h at file {} at line 2",
                tree.path("main.c").display()
            )
        );
        assert_eq!(out, "L1\n");
    }

    #[test]
    fn nested_failure_unwinds_every_level() {
        let tree = Tree::new(&[
            ("main.c", "m1\n#include \"a.h\"\nm3\n"),
            ("a.h", "a1\na2\n#include <gone.h>\na4\n"),
        ]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("unknown include file gone.h at file {} at line 3", tree.path("a.h").display())
        );
        assert_eq!(out, "m1\na1\na2\n");
    }

    #[test]
    fn unreadable_target_names_the_includer() {
        let tree = Tree::new(&[("main.c", "first\n#include \"sub\"\n"), ("sub/x.h", "")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("unknown include file sub at file {} at line 2", tree.path("main.c").display())
        );
        assert_eq!(out, "first\n");
    }

    #[test]
    fn missing_top_level_file() {
        let tree = Tree::new(&[]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(matches!(result, Err(Error::OpenInput { .. })));
        assert_eq!(out, "");
    }

    #[test]
    fn carriage_returns() {
        let tree = Tree::new(&[("main.c", "a\r\n#include \"b.h\"\r\nc\r\n"), ("b.h", "b\r\n")]);
        let (result, out) = tree.inline("main.c", &Config::default());
        assert!(result.is_ok());
        assert_eq!(out, "a\r\nb\r\nc\r\n");

        let config = Config::default().with_line_endings(LineEndings::StripCarriageReturn);
        let (result, out) = tree.inline("main.c", &config);
        assert!(result.is_ok());
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn non_utf8_lines_pass_through() {
        let tree = Tree::new(&[]);
        fs::write(tree.path("main.c"), b"caf\xe9\n").unwrap();
        let config = Config::default();
        let mut inliner = Inliner::new(Vec::new(), &config);
        assert!(inliner.inline(&tree.path("main.c"), None).is_ok());
        assert_eq!(inliner.into_output(), b"caf\xe9\n");
    }
}
