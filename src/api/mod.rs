use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("{ctx} ({status})")
        } else {
            format!("{ctx} ({status}): {body}")
        };
        Self {
            kind: ApiErrorKind::Http,
            message,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // `window.ENV.API_URL` wins, `window.ENV.api_url` is accepted for older deployments.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_api_url(&url_str);
                            }
                        }
                    }
                }
            }

            // The notes server also serves this client, so default to the page origin.
            if let Ok(origin) = window.location().origin() {
                return Self::with_api_url(&origin);
            }
        }

        Self::with_api_url("http://localhost:9999")
    }

    pub(crate) fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Form body accepted by `POST /new`.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NewNoteRequest {
    pub url: String,
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl NewNoteRequest {
    pub(crate) fn new(url: &str, title: &str, content: &str, raw_tags: &str) -> Self {
        Self {
            url: url.trim().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: split_tags(raw_tags).join(" "),
        }
    }
}

/// Tags as the server stores them: space separated, empty pieces dropped.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(res: reqwest::Response, ctx: &str) -> ApiResult<reqwest::Response> {
        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    /// Every tag known to the server, in server order.
    pub async fn get_tags(&self) -> ApiResult<Vec<String>> {
        let client = reqwest::Client::new();
        let res = client
            .get(self.url("/tags"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::network)?;

        let res = Self::check(res, "Failed to load tags").await?;
        let text = res.text().await.map_err(ApiError::network)?;
        Self::parse_tags_response(&text)
    }

    pub(crate) fn parse_tags_response(body: &str) -> ApiResult<Vec<String>> {
        // The server encodes an empty tag list as `null`.
        let tags: Option<Vec<String>> = serde_json::from_str(body).map_err(ApiError::parse)?;
        Ok(tags.unwrap_or_default())
    }

    /// Publish a note. The server answers with a redirect to `/notes`, which is followed.
    pub async fn create_note(&self, req: &NewNoteRequest) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.url("/new"))
            .form(req)
            .send()
            .await
            .map_err(ApiError::network)?;

        Self::check(res, "Failed to create note").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:9999".to_string());
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.url("/tags"), "http://localhost:9999/tags");
    }

    #[test]
    fn test_env_config_trims_trailing_slash() {
        let cfg = EnvConfig::with_api_url("https://notes.example.com/");
        assert_eq!(cfg.api_url, "https://notes.example.com");
    }

    #[test]
    fn test_parse_tags_response() {
        let tags = ApiClient::parse_tags_response(r#"["golang","google","go-lang"]"#)
            .expect("tags should parse");
        assert_eq!(tags, vec!["golang", "google", "go-lang"]);
    }

    #[test]
    fn test_parse_tags_response_null_is_empty() {
        let tags = ApiClient::parse_tags_response("null").expect("null should parse");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_parse_tags_response_rejects_non_strings() {
        let err = ApiClient::parse_tags_response(r#"[1, 2]"#).expect_err("should fail");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_split_tags_drops_empty_pieces() {
        assert_eq!(split_tags("  rust  notes go-lang "), vec!["rust", "notes", "go-lang"]);
        assert!(split_tags("   ").is_empty());
    }

    #[test]
    fn test_new_note_request_normalizes_tags() {
        let req = NewNoteRequest::new(" https://example.com ", "Title", "body", "a  b ");
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.tags, "a b");

        let v = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(v["title"], "Title");
        assert_eq!(v["content"], "body");
    }
}
