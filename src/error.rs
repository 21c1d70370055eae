use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("no image files found in directory: {0:?}")]
    NoImages(PathBuf),

    #[error("failed to load image {path:?}: {message}")]
    Image { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn image(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Image { path: path.into(), message: message.to_string() }
    }
}
