//! Source-image loading and PNG export of the composited canvas

use crate::analysis::classifier::SourceImage;
use crate::io::error::{CollageError, Result};
use image::{ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// Collect candidate file paths from a file or directory target
///
/// A directory yields its regular files in sorted order; a single file
/// yields itself. Whether an entry is actually a decodable image is decided
/// later, at load time.
///
/// # Errors
///
/// Returns an error if the target does not exist or the directory cannot
/// be read.
pub fn collect_paths(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    if !target.is_dir() {
        return Err(CollageError::FileSystem {
            path: target.to_path_buf(),
            operation: "resolve target",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }

    let entries = std::fs::read_dir(target).map_err(|e| CollageError::FileSystem {
        path: target.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CollageError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Decode every loadable image, silently skipping non-image files
///
/// Anything that is not a recognizable raster image is dropped without an
/// error. The caller is responsible for treating an empty result as a fatal
/// precondition.
pub fn load_sources(paths: &[PathBuf]) -> Vec<SourceImage> {
    let mut sources = Vec::new();
    for path in paths {
        let Ok(reader) = ImageReader::open(path) else {
            continue;
        };
        let Ok(reader) = reader.with_guessed_format() else {
            continue;
        };
        let Ok(decoded) = reader.decode() else {
            continue;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        sources.push(SourceImage {
            name,
            image: decoded.to_rgba8(),
        });
    }
    sources
}

/// Export the composited canvas as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas
        .save(output_path)
        .map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
