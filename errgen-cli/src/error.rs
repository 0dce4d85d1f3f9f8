use errgen::ErrgenError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("please set config file path")]
    MissingConfig,

    #[error(transparent)]
    Generate(#[from] ErrgenError),
}
