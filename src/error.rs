use std::io;

/// Errors raised while building or querying a division.
#[derive(Debug, thiserror::Error)]
pub enum DivisionError {
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("expected {expected} team rows, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("inconsistent schedule for {team}: {reason}")]
    InconsistentSchedule { team: String, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] io::Error),

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
