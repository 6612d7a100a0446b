use gloo_net::http::Response;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the
    /// human-readable explanation extracted from the response body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(gloo_net::Error),
    #[error("Parse error: {0}")]
    Parse(gloo_net::Error),
    #[error("Serialize error: {0}")]
    Serialize(gloo_net::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 404, .. })
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Error payload shapes the API is known to return.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error_message: Option<String>,
    data: Option<ErrorBodyData>,
}

#[derive(Deserialize)]
struct ErrorBodyData {
    #[serde(rename = "responseMessage")]
    response_message: Option<String>,
}

/// Pull a human-readable message out of an error response body, preferring
/// the top-level `message`, then `error_message`, then the nested
/// `data.responseMessage`, falling back to the supplied string.
pub fn extract_error_message(body: &str, fallback: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return fallback.to_string();
    };
    parsed
        .message
        .or(parsed.error_message)
        .or_else(|| parsed.data.and_then(|d| d.response_message))
        .unwrap_or_else(|| fallback.to_string())
}

async fn handle_response_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(response);
    }
    let fallback = format!("Request failed with status {status}");
    let message = match response.text().await {
        Ok(body) => extract_error_message(&body, &fallback),
        Err(_) => fallback,
    };
    Err(ApiError::Rejected { status, message })
}

async fn handle_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated = handle_response_status(response).await?;
    validated.json::<T>().await.map_err(ApiError::Parse)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

pub struct HttpApiClient {
    root_url: String,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.root_url, endpoint);
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;
        handle_json_response(response).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.root_url, endpoint);
        let response = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(ApiError::Serialize)?
            .send()
            .await
            .map_err(ApiError::Network)?;
        handle_json_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_top_level_message() {
        let body = r#"{"message":"nope","error_message":"other","data":{"responseMessage":"nested"}}"#;
        assert_eq!(extract_error_message(body, "fallback"), "nope");
    }

    #[test]
    fn falls_back_to_error_message() {
        let body = r#"{"error_message":"bad credentials"}"#;
        assert_eq!(extract_error_message(body, "fallback"), "bad credentials");
    }

    #[test]
    fn falls_back_to_nested_response_message() {
        let body = r#"{"data":{"responseMessage":"email already registered"}}"#;
        assert_eq!(
            extract_error_message(body, "fallback"),
            "email already registered"
        );
    }

    #[test]
    fn unparseable_or_empty_bodies_use_the_fallback() {
        assert_eq!(extract_error_message("<html>", "fallback"), "fallback");
        assert_eq!(extract_error_message("{}", "fallback"), "fallback");
    }

    #[test]
    fn rejected_error_displays_its_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Invalid password".into(),
        };
        assert_eq!(err.to_string(), "Invalid password");
        assert!(!err.is_not_found());
        assert!(
            ApiError::Rejected {
                status: 404,
                message: "gone".into(),
            }
            .is_not_found()
        );
    }
}
