use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ErrgenError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ErrgenError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unmarshal YAML data from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("not support file type: {0}")]
    UnsupportedFormat(String),

    #[error("render errors template: {0}")]
    Template(#[from] std::fmt::Error),
}

impl ErrgenError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
