use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing or invalid file extension for run config: {0}. It must be `toml`")]
    InvalidFileType(String),

    #[error("Bin count must be at least 1, got {0}")]
    InvalidBinCount(u32),

    #[error("Smoothing resolution must be at least 2 points, got {0}")]
    InvalidResolution(usize),

    #[error("Unknown value `{value}` for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
