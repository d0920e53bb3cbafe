use crate::cli::Verbosity;

pub fn level_filter(verbosity: Verbosity) -> log::LevelFilter {
    match verbosity {
        Verbosity::Quiet => log::LevelFilter::Error,
        Verbosity::Normal => log::LevelFilter::Warn,
        Verbosity::Verbose => log::LevelFilter::Info,
        Verbosity::Debug => log::LevelFilter::Trace,
    }
}

pub fn init_logger(verbosity: Verbosity) {
    env_logger::Builder::new().filter_level(level_filter(verbosity)).init();
}
