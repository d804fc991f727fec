//! Home folder resolution. Everything the tool touches lives under one
//! user-configured root.

use std::path::PathBuf;

use thiserror::Error;

use bericht_model::{ErrorKind, UserFacing};

/// Environment fallback for `--home`.
pub const HOME_ENV_VAR: &str = "BERICHTWERK_HOME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("home folder not configured (--home / {HOME_ENV_VAR})")]
    HomeNotSet,
}

impl UserFacing for ConfigError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::PrerequisiteMissing
    }

    fn user_message(&self) -> String {
        format!(
            "Bitte zuerst den Stammordner festlegen (--home oder Umgebungsvariable {HOME_ENV_VAR})."
        )
    }
}

/// `--home` wins over the environment variable; an unset home halts the
/// run before any I/O.
pub fn resolve_home(cli_home: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(home) = cli_home {
        return Ok(home);
    }
    if let Some(value) = std::env::var_os(HOME_ENV_VAR) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Err(ConfigError::HomeNotSet)
}

#[cfg(test)]
mod tests {
    use super::resolve_home;
    use std::path::PathBuf;

    #[test]
    fn flag_takes_precedence() {
        let home = resolve_home(Some(PathBuf::from("/tmp/kita"))).expect("home");
        assert_eq!(home, PathBuf::from("/tmp/kita"));
    }
}
