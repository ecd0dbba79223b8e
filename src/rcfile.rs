use rpncalc::Config;
use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Config file: $RPNCALC_CONFIG, else ~/.rpncalc.toml
pub(crate) fn config_path() -> Option<PathBuf> {
    env::var_os("RPNCALC_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs_home().map(|h| h.join(".rpncalc.toml")))
}

/// REPL history file (~/.rpncalc_history)
pub(crate) fn history_path() -> Option<PathBuf> {
    dirs_home().map(|h| h.join(".rpncalc_history"))
}

/// Load the config file and environment overrides.
///
/// A missing file means defaults. A broken file or variable is reported
/// and ignored.
pub(crate) fn load_config() -> Config {
    let mut config = match config_path() {
        Some(path) => match Config::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(rpncalc::ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Config::default()
            }
            Err(e) => {
                warn!("{}: {}", path.display(), e);
                Config::default()
            }
        },
        None => Config::default(),
    };

    if let Err(e) = config.apply_env() {
        warn!("environment: {}", e);
    }

    config
}
