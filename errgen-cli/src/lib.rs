mod cli;
mod commands;
mod error;

pub use cli::*;
pub use commands::*;
pub use error::*;
