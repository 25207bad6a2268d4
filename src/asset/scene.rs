//! Scene description files.
//!
//! A scene file is plain text: the first line is a dimension header (kept
//! verbatim, never interpreted), and every following line names one OBJ
//! model file, resolved relative to the data directory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use super::AssetError;

/// A parsed scene description file.
#[derive(Debug, Clone)]
pub struct SceneFile {
    /// The unparsed dimension header line.
    pub header: String,
    /// OBJ model filenames, one per line, in input order. Blank lines are
    /// kept so the list mirrors the file.
    pub model_files: Vec<String>,
}

impl SceneFile {
    /// Reads a scene file from `path`.
    ///
    /// The first line becomes the header; all remaining lines are collected
    /// verbatim as model filenames. Filenames are not validated here.
    pub fn load(path: impl AsRef<Path>) -> Result<SceneFile, AssetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = BufReader::new(file).lines();

        let header = match lines.next() {
            Some(line) => line.map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?,
            None => String::new(),
        };
        info!("scene '{}' dimension header: '{}'", path.display(), header);

        let mut model_files = Vec::new();
        for line in lines {
            let line = line.map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            model_files.push(line);
        }

        Ok(SceneFile { header, model_files })
    }
}
