//! Logger setup.

use log::LevelFilter;

/// Level of the library's own logging.
fn own_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger: timestamped lines on stdout.
///
/// Third party crates log at `Info`; this crate logs at `Debug` in debug builds.
pub fn init() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .level_for(env!("CARGO_CRATE_NAME"), own_level())
        .chain(std::io::stdout())
        .apply()
}
