// SPDX-License-Identifier: MPL-2.0
//! Session check against the Postify backend.

use super::{ApiFailure, ErrorPayload};
use crate::error::ApiError;
use reqwest::Url;
use std::time::Duration;

const SESSION_PATH: &str = "api/session";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a session check did not succeed.
#[derive(Debug, Clone)]
pub enum CheckFailure {
    /// The backend answered with a non-success status.
    Response(ApiFailure),
    /// No usable response was received.
    Request(ApiError),
}

/// Asks the backend whether the current session is still valid.
///
/// Performs `GET {base_url}/api/session`; any 2xx status counts as valid.
pub async fn check_session(base_url: String) -> Result<(), CheckFailure> {
    let url = session_url(&base_url).map_err(CheckFailure::Request)?;

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| CheckFailure::Request(ApiError::Transport(err.to_string())))?;

    tracing::debug!(%url, "checking session");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| CheckFailure::Request(ApiError::Transport(err.to_string())))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    // An unreadable body still carries the status
    let body = response.bytes().await.unwrap_or_default();
    Err(CheckFailure::Response(ApiFailure {
        status: status.as_u16(),
        payload: ErrorPayload::from_body(&body),
    }))
}

/// Builds the session endpoint URL, rejecting anything but http(s).
fn session_url(base_url: &str) -> Result<Url, ApiError> {
    let invalid = || ApiError::InvalidUrl(base_url.to_string());

    let mut base = Url::parse(base_url.trim()).map_err(|_| invalid())?;
    if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
        return Err(invalid());
    }
    // Url::join replaces the last segment unless the path ends with '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SESSION_PATH).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_url_appends_endpoint() {
        let url = session_url("https://api.example.org").expect("valid");
        assert_eq!(url.as_str(), "https://api.example.org/api/session");
    }

    #[test]
    fn session_url_keeps_base_path() {
        let url = session_url("https://example.org/postify").expect("valid");
        assert_eq!(url.as_str(), "https://example.org/postify/api/session");
    }

    #[test]
    fn session_url_rejects_other_schemes() {
        assert!(matches!(
            session_url("ftp://example.org"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(session_url("not a url"), Err(ApiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn invalid_base_url_fails_before_any_request() {
        let result = check_session("mailto:hello@postify.app".to_string()).await;
        assert!(matches!(
            result,
            Err(CheckFailure::Request(ApiError::InvalidUrl(_)))
        ));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_failure() {
        // Bind then drop a listener to get a port nobody listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let result = check_session(format!("http://127.0.0.1:{port}")).await;
        assert!(matches!(
            result,
            Err(CheckFailure::Request(ApiError::Transport(_)))
        ));
    }
}
