use super::args::Cli;
use includer::{Error, Preprocessor, Reporter};
use std::io::Write;

/// Writes each diagnostic as a line of `w`.
struct Lines<'w, W: Write>(&'w mut W);

impl<W: Write> Reporter for Lines<'_, W> {
    fn report(&mut self, error: &Error) {
        let _ = writeln!(self.0, "{}", error);
    }
}

/// Flattens the input named by `args`, with diagnostics going to `w`.
pub fn run(args: &Cli, w: &mut impl Write) -> bool {
    let config = args.config();
    log::debug!(
        "flattening {} into {} with {} search path(s)",
        args.input.display(),
        args.output.display(),
        config.search_paths.len()
    );
    Preprocessor::new(config, Lines(w)).run(&args.input, &args.output)
}
