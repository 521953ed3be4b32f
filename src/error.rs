use std::fmt;
use std::path::PathBuf;

/// Fatal rendering/serialization errors. The workbook is not produced.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Zip(zip::result::ZipError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Zip(e) => write!(f, "workbook archive error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Zip(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

/// Photo loading failures: missing, unreadable, or undecodable. Recovered
/// locally — the caller logs and renders without the picture.
#[derive(Debug)]
pub enum PhotoError {
    Read(PathBuf, std::io::Error),
    Decode(PathBuf, image::ImageError),
    Encode(PathBuf, image::ImageError),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::Read(path, e) => {
                write!(f, "cannot read photo {}: {e}", path.display())
            }
            PhotoError::Decode(path, e) => {
                write!(f, "cannot decode photo {}: {e}", path.display())
            }
            PhotoError::Encode(path, e) => {
                write!(f, "cannot re-encode photo {}: {e}", path.display())
            }
        }
    }
}

impl std::error::Error for PhotoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhotoError::Read(_, e) => Some(e),
            PhotoError::Decode(_, e) | PhotoError::Encode(_, e) => Some(e),
        }
    }
}
