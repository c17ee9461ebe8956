//! Document input: file, standard input or the built-in sample

use legal_domain::SAMPLE_AGREEMENT;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while reading the document to analyze
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input given: pass a FILE, `-` for standard input, --sample or --tui")]
    Missing,

    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Where the document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Sample,
}

impl InputSource {
    /// Resolve from the positional argument and `--sample`
    pub fn resolve(input: Option<&Path>, sample: bool) -> Result<Self, InputError> {
        match (input, sample) {
            (_, true) => Ok(Self::Sample),
            (Some(path), false) if path == Path::new("-") => Ok(Self::Stdin),
            (Some(path), false) => Ok(Self::File(path.to_path_buf())),
            (None, false) => Err(InputError::Missing),
        }
    }

    /// Short label for logs and headers
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Sample => "<built-in sample>".to_string(),
        }
    }

    pub fn read(&self) -> Result<String, InputError> {
        match self {
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Self::Stdin => Self::read_from(std::io::stdin().lock()),
            Self::Sample => Ok(SAMPLE_AGREEMENT.to_string()),
        }
    }

    fn read_from(mut reader: impl Read) -> Result<String, InputError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(InputError::Stdin)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
