use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitError {
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid habit record: {0}")]
    InvalidHabit(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HabitError>;
