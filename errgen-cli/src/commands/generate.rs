use crate::{AppError, Result};
use errgen::{Model, OutputFormat, write_output};
use std::path::PathBuf;
use tracing::info;

pub fn execute(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    kind: String,
    package: String,
) -> Result<()> {
    let file = file.ok_or(AppError::MissingConfig)?;
    let format: OutputFormat = kind.parse()?;
    let output = output.unwrap_or_else(|| format.default_output());

    info!(config_path = %file.display(), "Loading error definitions");
    let model = Model::load(&file, &package)?;
    write_output(&model, &output, format)?;
    Ok(())
}
