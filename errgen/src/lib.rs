mod code;
mod config;
mod error;
mod generator;
mod markdown;

pub use code::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use markdown::*;
