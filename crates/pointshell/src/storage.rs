//! File access for point collections.
//!
//! The format is picked from the file extension here, never inside the codec
//! library. Writes go to a temporary file next to the destination that only
//! replaces it once the whole payload is on disk, so a failed save leaves the
//! previous file untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use pointcodec::{CodecConfig, DecodeError, EncodeError, PointCollection, PointFormat};
use tempfile::NamedTempFile;

/// Accepted in addition to each format's own extension.
const YAML_ALIAS: &str = "yml";

/// Extensions understood by [`format_for_path`], one per format.
pub fn extensions() -> Vec<&'static str> {
    PointFormat::all().into_iter().map(PointFormat::extension).collect()
}

fn listed_extensions() -> String {
    extensions().iter().map(|ext| format!(".{}", ext)).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot pick a format for {}: expected one of {}", .0.display(), listed_extensions())]
    UnknownExtension(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io { path: path.to_path_buf(), source }
    }
}

/// Map a file extension (case-insensitive) to its format.
pub fn format_for_path(path: &Path) -> Result<PointFormat, StorageError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| StorageError::UnknownExtension(path.to_path_buf()))?;

    if extension == YAML_ALIAS {
        return Ok(PointFormat::Yaml);
    }
    PointFormat::all()
        .into_iter()
        .find(|format| format.extension() == extension)
        .ok_or_else(|| StorageError::UnknownExtension(path.to_path_buf()))
}

/// Read and decode the collection stored at `path`.
pub fn load(path: &Path, config: &CodecConfig) -> Result<PointCollection, StorageError> {
    let format = format_for_path(path)?;
    let bytes = std::fs::read(path).map_err(|e| StorageError::io(path, e))?;
    let points = pointcodec::decode_with(&bytes, format, config)?;

    tracing::info!(path = %path.display(), %format, points = points.len(), "loaded points");
    Ok(points)
}

/// Encode `points` and store them at `path`, replacing any existing file.
pub fn save(path: &Path, points: &PointCollection, config: &CodecConfig) -> Result<(), StorageError> {
    let format = format_for_path(path)?;
    let bytes = pointcodec::encode_with(points, format, config)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(directory).map_err(|e| StorageError::io(path, e))?;
    file.write_all(&bytes).map_err(|e| StorageError::io(path, e))?;
    file.as_file().sync_all().map_err(|e| StorageError::io(path, e))?;
    file.persist(path).map_err(|e| StorageError::io(path, e.error))?;

    tracing::info!(path = %path.display(), %format, points = points.len(), bytes = bytes.len(), "saved points");
    Ok(())
}
