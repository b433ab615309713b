use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to parse document: {0}")]
    Xml(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Convenience constructor for XML parser errors — use with `.map_err(LoadError::xml)`.
    pub fn xml<E: std::fmt::Display>(e: E) -> Self {
        Self::Xml(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn create_dir(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn write_file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.display().to_string(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
