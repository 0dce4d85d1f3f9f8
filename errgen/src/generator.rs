use crate::{ErrgenError, Model, Result, render_go, render_markdown};
use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Go,
    Markdown,
}

impl OutputFormat {
    pub fn default_output(&self) -> PathBuf {
        match self {
            OutputFormat::Go => PathBuf::from("./errors/errors.go"),
            OutputFormat::Markdown => PathBuf::from("./errors/errors.md"),
        }
    }

    pub fn render(&self, model: &Model) -> Result<String> {
        match self {
            OutputFormat::Go => render_go(model),
            OutputFormat::Markdown => Ok(render_markdown(model)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ErrgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "go" => Ok(OutputFormat::Go),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            other => Err(ErrgenError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Go => write!(f, "go"),
            OutputFormat::Markdown => write!(f, "md"),
        }
    }
}

/// Renders `model` as `kind` ("go" or "md") into `output`.
///
/// The kind is checked before anything is created on disk.
pub fn generate(model: &Model, output: impl AsRef<Path>, kind: &str) -> Result<()> {
    let format: OutputFormat = kind.parse()?;
    write_output(model, output, format)
}

pub fn write_output(model: &Model, output: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let output = output.as_ref();
    write_rendered(output, || format.render(model))?;
    info!(
        path = %output.display(),
        format = %format,
        errors = model.errors.len(),
        "Generated errors file"
    );
    Ok(())
}

/// Renders first, so a failed render leaves any existing file untouched.
fn write_rendered(output: &Path, render: impl FnOnce() -> Result<String>) -> Result<()> {
    let content = render()?;
    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| {
            ErrgenError::io(format!("create output directory {}", dir.display()), e)
        })?;
    }

    let mut file = File::create(output)
        .map_err(|e| ErrgenError::io(format!("create errors file {}", output.display()), e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ErrgenError::io(format!("write errors file {}", output.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("go".parse::<OutputFormat>().unwrap(), OutputFormat::Go);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn rejects_unknown_formats() {
        for kind in ["xml", "GO", ""] {
            match kind.parse::<OutputFormat>() {
                Err(ErrgenError::UnsupportedFormat(s)) => assert_eq!(s, kind),
                other => panic!("expected UnsupportedFormat for {kind:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_output_matches_format() {
        assert_eq!(
            OutputFormat::Go.default_output(),
            PathBuf::from("./errors/errors.go")
        );
        assert_eq!(
            OutputFormat::Markdown.default_output(),
            PathBuf::from("./errors/errors.md")
        );
    }

    #[test]
    fn failed_render_keeps_previous_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("errors.go");
        fs::write(&output, "previous").unwrap();

        let err = write_rendered(&output, || Err(ErrgenError::Template(fmt::Error))).unwrap_err();

        assert!(matches!(err, ErrgenError::Template(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn failed_render_creates_no_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("nested/errors.md");

        assert!(write_rendered(&output, || Err(ErrgenError::Template(fmt::Error))).is_err());

        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn display_round_trips() {
        for format in [OutputFormat::Go, OutputFormat::Markdown] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
