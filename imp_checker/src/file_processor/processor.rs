//! Source file loading and validation
//!
//! Sourcing text is a collaborator concern: the checker core only ever sees
//! an in-memory string. This module is the default collaborator used by the
//! binary, enforcing the compile-time size bound and UTF-8 before a run.

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE,
};
use crate::logging::codes;
use crate::{log_success, log_warning};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File loading errors
#[derive(Debug, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("File too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::NotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            Self::TooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            Self::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            Self::Io { .. } => codes::file_processing::IO_ERROR,
        }
    }
}

/// A loaded and validated source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    source: String,
    line_count: usize,
    size: u64,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_large(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// Load a source file, enforcing the size bound and UTF-8 encoding
pub fn load_source(path: &Path) -> Result<SourceFile, FileProcessorError> {
    let display_path = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FileProcessorError::NotFound {
            path: display_path.clone(),
        },
        _ => FileProcessorError::Io {
            path: display_path.clone(),
            source,
        },
    })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(FileProcessorError::TooLarge {
            size,
            max: MAX_FILE_SIZE,
        });
    }

    let bytes = fs::read(path).map_err(|source| FileProcessorError::Io {
        path: display_path.clone(),
        source,
    })?;

    let source = String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
        path: display_path.clone(),
    })?;

    let file = SourceFile {
        path: path.to_path_buf(),
        line_count: source.lines().count(),
        size,
        source,
    };

    if file.is_large() {
        log_warning!("Input file is large",
            "file" => display_path,
            "bytes" => size
        );
    }

    log_success!(codes::success::FILE_LOADED,
        "Source file loaded",
        "file" => file.path().display(),
        "bytes" => file.size(),
        "lines" => file.line_count()
    );

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_load_valid_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x = 1 ;").unwrap();
        writeln!(file, "y = 2 ;").unwrap();

        let loaded = load_source(file.path()).unwrap();
        assert_eq!(loaded.source(), "x = 1 ;\ny = 2 ;\n");
        assert_eq!(loaded.line_count(), 2);
        assert!(!loaded.is_large());
    }

    #[test]
    fn test_missing_file_is_distinct_error() {
        let result = load_source(Path::new("/nonexistent/input.imp"));
        assert_matches!(result, Err(FileProcessorError::NotFound { .. }));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let chunk = vec![b'a'; 64 * 1024];
        for _ in 0..17 {
            file.write_all(&chunk).unwrap();
        }
        file.flush().unwrap();

        let result = load_source(file.path());
        assert_matches!(result, Err(FileProcessorError::TooLarge { size, .. }) => {
            assert!(size > MAX_FILE_SIZE);
        });
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x78, 0xff, 0xfe, 0x20]).unwrap();
        file.flush().unwrap();

        let result = load_source(file.path());
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_codes() {
        let not_found = FileProcessorError::NotFound {
            path: "missing.imp".to_string(),
        };
        assert_eq!(not_found.error_code().as_str(), "E005");

        let too_large = FileProcessorError::TooLarge { size: 2, max: 1 };
        assert_eq!(too_large.error_code().as_str(), "E007");
    }
}
