use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unauthorized: check that the API key is correct and properly included in the header")]
    Unauthorized,
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FoodError {
    /// Process exit status for this failure. Codes follow sysexits.h where one fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            FoodError::Config(_) => 78,
            FoodError::Unauthorized => 77,
            FoodError::Io(_) => 74,
            _ => 1,
        }
    }

    /// Transport failures and 5xx answers may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FoodError::Transport(_) => true,
            FoodError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> FoodError {
        FoodError::Decode {
            context: "search",
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
    }

    #[test]
    fn test_exit_codes_distinguish_failure_kinds() {
        assert_eq!(FoodError::Config("missing".into()).exit_code(), 78);
        assert_eq!(FoodError::Unauthorized.exit_code(), 77);
        assert_eq!(decode_error().exit_code(), 1);
        assert_eq!(
            FoodError::Status { status: 500, body: String::new() }.exit_code(),
            1
        );
    }

    #[test]
    fn test_only_server_errors_are_retryable() {
        assert!(FoodError::Status { status: 503, body: String::new() }.is_retryable());
        assert!(!FoodError::Status { status: 404, body: String::new() }.is_retryable());
        assert!(!FoodError::Unauthorized.is_retryable());
        assert!(!decode_error().is_retryable());
    }

    #[test]
    fn test_decode_message_names_the_endpoint() {
        assert!(decode_error().to_string().starts_with("Malformed search response"));
    }
}
