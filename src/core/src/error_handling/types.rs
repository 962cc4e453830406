use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::InvalidValue(e) => write!(f, "Invalid configuration value: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug)]
pub enum StorageError {
    ReadFailed(String),
    WriteFailed(String),
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(e) => write!(f, "Storage read failed: {}", e),
            StorageError::WriteFailed(e) => write!(f, "Storage write failed: {}", e),
            StorageError::InvalidKey(k) => write!(f, "Invalid storage key: {:?}", k),
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug)]
pub enum RecordError {
    /// Volume passed to `add` was zero or negative.
    InvalidVolume(i64),
    /// The largest stored id leaves no room for a new one.
    IdOverflow(i64),
    Storage(StorageError),
    SerializationFailed(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidVolume(v) => {
                write!(f, "Drink volume must be a positive number of ml, got {}", v)
            }
            RecordError::IdOverflow(max_id) => {
                write!(f, "No record id available after stored id {}", max_id)
            }
            RecordError::Storage(e) => write!(f, "Record storage error: {}", e),
            RecordError::SerializationFailed(e) => write!(f, "Record serialization failed: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<StorageError> for RecordError {
    fn from(err: StorageError) -> Self {
        RecordError::Storage(err)
    }
}
