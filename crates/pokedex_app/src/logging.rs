//! Logging initialization for the Pokédex app.
//!
//! Installs a file logger writing to `./pokedex.log`; when the file cannot
//! be created the log goes to the terminal instead.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./pokedex.log";

pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let logger: Box<dyn SharedLogger> =
        match create_file_logger(level, config.clone(), Path::new(LOG_PATH)) {
            Some(file_logger) => file_logger,
            None => TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto),
        };

    // Ignore the error if a logger was already installed.
    let _ = CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_created_in_writable_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pokedex.log");

        let logger = create_file_logger(LevelFilter::Info, build_config(), &path);

        assert!(logger.is_some());
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_yields_no_file_logger() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("pokedex.log");

        let logger = create_file_logger(LevelFilter::Info, build_config(), &path);

        assert!(logger.is_none());
    }
}
