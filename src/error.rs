// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Failures raised while talking to the Postify backend.
///
/// These never reach the user as-is: the app classifies them into
/// notifications (see [`crate::api::classify`]).
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped.
    Transport(String),

    /// The response body was not the JSON shape we expected.
    Decode(String),

    /// The configured base URL is unusable.
    InvalidUrl(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "error-api-transport",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidUrl(_) => "error-api-invalid-url",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::InvalidUrl(url) => write!(f, "Invalid base URL: {}", url),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Api(ApiError::Decode(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ApiError::Transport(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_decode_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Api(ApiError::Decode(_))));
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(
            ApiError::Transport("x".into()).i18n_key(),
            "error-api-transport"
        );
        assert_eq!(ApiError::Decode("x".into()).i18n_key(), "error-api-decode");
        assert_eq!(
            ApiError::InvalidUrl("x".into()).i18n_key(),
            "error-api-invalid-url"
        );
    }

    #[test]
    fn api_error_display_includes_detail() {
        let err = Error::from(ApiError::InvalidUrl("ftp://nope".to_string()));
        assert_eq!(format!("{}", err), "API Error: Invalid base URL: ftp://nope");
    }
}
