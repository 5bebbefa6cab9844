#[cfg(feature = "svg-io")]
mod svg;

/// Generic I/O errors for the export backends.
///
/// Export features live behind cargo feature flags; a disabled backend
/// contributes no variants and no dependencies.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIo(error) => write!(f, "std::io::Error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
