//! Pipeline error types
//!
//! Only file-level failures abort a run. Lexical and syntax findings are
//! collected diagnostics, never pipeline errors.

use crate::file_processor::FileProcessorError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),
}

impl PipelineError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::FileProcessing(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_conversion() {
        let error = PipelineError::from(FileProcessorError::NotFound {
            path: "missing.imp".to_string(),
        });

        assert_eq!(error.error_code().as_str(), "E005");
        assert!(error.to_string().contains("File not found: missing.imp"));
    }
}
