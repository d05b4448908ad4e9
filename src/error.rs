use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("unknown zone type {0:?}, expected one of \"M\", \"C\"")]
    InvalidZoneType(String),

    #[error("failed to write {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failure to load a label font. Always recoverable: callers fall back to
/// the builtin bitmap font via [`LabelFont::load_or_builtin`].
///
/// [`LabelFont::load_or_builtin`]: crate::font::LabelFont::load_or_builtin
#[derive(Debug, Error)]
pub enum FontError {
    #[error("could not read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path} is not a valid font")]
    Parse { path: PathBuf },
}
