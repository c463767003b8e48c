use gloo_net::http::Request;
use shared::{CreateGroupRequest, Role, SubmissionOutcome};
use thiserror::Error;
use web_sys::RequestCredentials;

const API_BASE: &str = "http://localhost:8081";

/// Transport-level failure talking to the backend. Errors the server reports
/// in a response travel through `SubmissionOutcome` instead.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

pub struct ApiClient;

impl ApiClient {
    /// `GET /auth`: the backend answers with the session's role as a bare
    /// string.
    pub async fn current_role() -> Result<Role, ApiError> {
        let response = Request::get(&format!("{}/auth", API_BASE))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Tolerate a JSON-quoted role string.
        let role = body.trim().trim_matches('"');
        role.parse()
            .map_err(|()| ApiError::Decode(format!("unknown role: {}", role)))
    }

    /// `GET /grupos/names`: names of every existing group, for display next
    /// to the form.
    pub async fn list_group_names() -> Result<Vec<String>, ApiError> {
        let response = Request::get(&format!("{}/grupos/names", API_BASE))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /grupos/new`: submits the draft and reconciles the status plus
    /// raw body into a `SubmissionOutcome`. `Err` only on transport failure.
    pub async fn create_group(
        request: CreateGroupRequest,
    ) -> Result<SubmissionOutcome, ApiError> {
        let response = Request::post(&format!("{}/grupos/new", API_BASE))
            .credentials(RequestCredentials::Include)
            .json(&request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(SubmissionOutcome::from_response(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_error_display() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "request failed: connection refused");

        let error = ApiError::Decode("unknown role: admin".to_string());
        assert_eq!(error.to_string(), "malformed response: unknown role: admin");
    }
}
