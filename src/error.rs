use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Errors produced while converting markdown or publishing a site
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A leaf node was rendered without a value
    #[error("leaf node has no value")]
    MissingValue,

    /// A parent node was rendered without a tag
    #[error("parent node has no tag")]
    MissingTag,

    #[error("invalid text style: {0}")]
    InvalidStyle(String),

    /// A path handed to page generation is missing or of the wrong kind
    #[error("invalid source path: {}", .0.display())]
    InvalidSourcePath(PathBuf),

    #[error("no `# ` title line in {}", .0.display())]
    MissingTitle(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
