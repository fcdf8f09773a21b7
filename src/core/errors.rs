use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordHistError {
    #[error("Retrieval error: {0}")]
    Retrieval(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WordHistError: {0}")]
    Custom(String),
}

impl WordHistError {
    /// True for any failure to obtain the source document's text.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, WordHistError::Retrieval(_) | WordHistError::HttpStatus { .. })
    }
}

impl From<std::io::Error> for WordHistError {
    fn from(error: std::io::Error) -> Self {
        WordHistError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordHistError {
    fn from(error: reqwest::Error) -> Self {
        WordHistError::Retrieval(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_grouping() {
        let status = WordHistError::HttpStatus { status: 404, url: "http://x/doc.txt".to_string() };
        assert!(status.is_retrieval());
        assert_eq!(status.to_string(), "HTTP error 404 from http://x/doc.txt");

        let io: WordHistError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!io.is_retrieval());
        assert!(!WordHistError::Custom("nope".to_string()).is_retrieval());
    }
}
