use clap::{Parser, error::ErrorKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eg", version)]
#[command(about = "Here is an application that generates error variables from a YAML configuration file.")]
pub struct Cli {
    #[arg(short, long, help = "A YAML configuration file")]
    pub file: Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "Output file [default: ./errors/errors.go, or ./errors/errors.md for md]"
    )]
    pub output: Option<PathBuf>,
    #[arg(short = 't', long = "type", default_value = "go", help = "Output file type (go or md)")]
    pub kind: String,
    #[arg(short, long, default_value = "errors", help = "The Go package name")]
    pub package: String,
}

/// Exit code for a failed argument parse: help and version output succeed,
/// every other usage error is fatal.
pub fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
