use crate::error::Error;

/// Receives one diagnostic line per failed run.
pub trait Reporter {
    fn report(&mut self, error: &Error);
}

/// Prints each diagnostic on its own line of standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

/// Discards diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Console {
    fn report(&mut self, error: &Error) {
        println!("{}", error);
    }
}

impl Reporter for Silent {
    fn report(&mut self, _: &Error) {}
}

/// Collects the rendered diagnostics.
impl Reporter for Vec<String> {
    fn report(&mut self, error: &Error) {
        self.push(error.to_string());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: &Error) {
        (**self).report(error)
    }
}
