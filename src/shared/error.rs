use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the scaffolding core
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse template '{name}': {source}")]
    TemplateParse {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("root command file not found at {}; run `cobra-scaffold init` first", .path.display())]
    RootFileMissing { path: PathBuf },

    #[error("invalid {kind} name '{name}': must start with a letter or underscore and contain only letters, digits and underscores")]
    InvalidName { kind: &'static str, name: String },

    #[error("unknown license '{name}' (available: {available})")]
    UnknownLicense { name: String, available: String },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl ScaffoldError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
