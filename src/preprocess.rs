use crate::{
    ast::SearchPaths,
    config::Config,
    error::{Error, Result},
    inline::{open_source, Inliner},
    report::{Console, Reporter},
};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Flattens `input` into `output` (truncated first), reporting any failure to the console.
/// Returns whether every include was inlined.
pub fn preprocess(input: &Path, output: &Path, search_paths: &SearchPaths) -> bool {
    Preprocessor::new(Config::new(search_paths.clone()), Console).run(input, output)
}

/// Runs the inliner over whole files and hands the outcome to a `Reporter`.
pub struct Preprocessor<R: Reporter> {
    config: Config,
    reporter: R,
}

impl<R: Reporter> Preprocessor<R> {
    pub fn new(config: Config, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Like `try_run`, but the error (if any) goes to the reporter as exactly one line.
    pub fn run(&mut self, input: &Path, output: &Path) -> bool {
        match self.try_run(input, output) {
            Ok(()) => true,
            Err(e) => {
                self.reporter.report(&e);
                false
            }
        }
    }

    /// Output written before a failure is left in place.
    pub fn try_run(&self, input: &Path, output: &Path) -> Result<()> {
        let source =
            open_source(input).map_err(|source| Error::OpenInput { path: input.into(), source })?;
        let sink =
            File::create(output).map_err(|source| Error::OpenOutput { path: output.into(), source })?;
        let mut inliner = Inliner::new(BufWriter::new(sink), &self.config);
        let inlined = inliner.inline_reader(input, BufReader::new(source));
        let flushed = inliner.output_mut().flush().map_err(Error::Write);
        inlined.and(flushed)
    }
}
