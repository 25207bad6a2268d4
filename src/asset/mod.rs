//! Asset loading for scene description files and Wavefront OBJ models.

pub mod obj;
pub mod scene;

pub use obj::ObjModel;
pub use scene::SceneFile;

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading scene or model files.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to open file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line_no}: malformed '{keyword}' record: {line:?}")]
    MalformedLine {
        path: PathBuf,
        line_no: usize,
        keyword: String,
        line: String,
    },

    #[error("face index {index} out of range for {count} elements")]
    IndexOutOfRange { index: isize, count: usize },
}
