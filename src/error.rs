use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiteCheckError {
    #[error("Could not find file: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid pattern configuration: {message}")]
    Pattern { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CiteCheckError {
    /// Classify a read failure for `path`, keeping "file does not exist"
    /// distinct from every other IO or decoding problem.
    pub fn from_read_error(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            CiteCheckError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CiteCheckError::Read {
                path: path.to_path_buf(),
                message: error.to_string(),
            }
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CiteCheckError {
    fn user_message(&self) -> String {
        match self {
            CiteCheckError::FileNotFound { path } => {
                format!("Could not find file - {}", path.display())
            }
            CiteCheckError::Read { path, message } => {
                format!("Failed to read {}: {}", path.display(), message)
            }
            CiteCheckError::Pattern { message } => {
                format!("Invalid pattern configuration: {}", message)
            }
            CiteCheckError::Config { message } => {
                format!("Configuration error: {}", message)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CiteCheckError::FileNotFound { .. } => Some(
                "Check that the path is spelled correctly and that the file exists.".to_string(),
            ),
            CiteCheckError::Read { .. } => Some(
                "The file exists but could not be read as UTF-8 text. Check permissions and encoding.".to_string(),
            ),
            CiteCheckError::Pattern { .. } => Some(
                "Entry types and citation command names may only contain letters, digits and '*'.".to_string(),
            ),
            CiteCheckError::Config { .. } => Some(
                "Check the values passed via --entry-types and --cite-command.".to_string(),
            ),
        }
    }
}

impl From<regex::Error> for CiteCheckError {
    fn from(error: regex::Error) -> Self {
        CiteCheckError::Pattern {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CiteCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_friendly_messages() {
        let error = CiteCheckError::FileNotFound {
            path: PathBuf::from("refs.bib"),
        };
        assert!(error.user_message().contains("refs.bib"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_read_error_classification() {
        let path = std::path::Path::new("missing.bib");

        let not_found = io::Error::new(io::ErrorKind::NotFound, "no such file");
        matches!(
            CiteCheckError::from_read_error(path, not_found),
            CiteCheckError::FileNotFound { .. }
        );

        let decode = io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        let error = CiteCheckError::from_read_error(path, decode);
        match error {
            CiteCheckError::Read { message, .. } => assert!(message.contains("UTF-8")),
            other => panic!("expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_regex_error_conversion() {
        let bad = regex::Regex::new("(").unwrap_err();
        let error = CiteCheckError::from(bad);
        matches!(error, CiteCheckError::Pattern { .. });
    }
}
