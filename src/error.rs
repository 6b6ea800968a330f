// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockError {
    #[error("cannot classify {}: name matches no supported suffix (*.component.ts | *.directive.ts | *.pipe.ts | *.service.ts)", path.display())]
    UnclassifiableSource { path: PathBuf },

    #[error("anchor pattern not found in {}", path.display())]
    AnchorNotFound { path: PathBuf },

    #[error("cyclic extends chain through {class}")]
    CyclicInheritance { class: String },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, MockError>;

// Allow `?` on std::io::Error by converting to MockError::Io with unknown path.
impl From<std::io::Error> for MockError {
    fn from(source: std::io::Error) -> Self {
        MockError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl MockError {
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        MockError::Io {
            source,
            path: path.into(),
        }
    }
}
