use env_logger::{Builder, Env};
use log::LevelFilter;

/// `-v` selects debug and `-vv` trace; otherwise `RUST_LOG` decides, defaulting to warnings.
pub fn init(verbose: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_target(false);
    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
