use serde::Deserialize;

/// randomuser.me API base URL
pub const RANDOM_USER_API_BASE: &str = "https://randomuser.me/api/";

/// Seed used so every visit shows the same generated person
const DEFAULT_SEED: &str = "abc";

/// Top-level body returned by the randomuser.me API
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserResponse {
    pub results: Vec<Profile>,
    #[serde(default)]
    pub info: Option<ResponseInfo>,
}

/// Echo of the query the API actually served
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}

/// A generated user profile
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub gender: String,
    pub name: ProfileName,
    pub email: String,
    pub phone: String,
    pub picture: ProfilePicture,
    pub location: ProfileLocation,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileName {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Portrait URLs at three resolutions
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfilePicture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// Only city and country are kept; the API sends a lot more
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileLocation {
    pub city: String,
    pub country: String,
}

/// Error type for randomuser.me requests
#[derive(Debug, Clone, PartialEq)]
pub enum RandomUserError {
    Request(String),
    Status { code: u16, text: String },
    Parse(String),
    EmptyResults,
}

impl std::fmt::Display for RandomUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RandomUserError::Request(e) => write!(f, "Request failed: {}", e),
            RandomUserError::Status { code, text } => write!(f, "HTTP error: {} {}", code, text),
            RandomUserError::Parse(e) => write!(f, "Failed to parse user data: {}", e),
            RandomUserError::EmptyResults => write!(f, "Response contained no users"),
        }
    }
}

impl std::error::Error for RandomUserError {}

/// Query parameters sent with every request
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileQuery {
    pub page: u32,
    pub results: u32,
    pub seed: String,
}

impl Default for ProfileQuery {
    fn default() -> Self {
        Self {
            page: 1,
            results: 1,
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

impl ProfileQuery {
    /// Build the full request URL against `base_url`
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}?page={}&results={}&seed={}",
            base_url,
            self.page,
            self.results,
            urlencoding::encode(&self.seed)
        )
    }
}

/// randomuser.me API client
#[derive(Debug, Clone, PartialEq)]
pub struct RandomUserApi {
    base_url: String,
    query: ProfileQuery,
}

impl RandomUserApi {
    pub fn new() -> Self {
        Self {
            base_url: RANDOM_USER_API_BASE.to_string(),
            query: ProfileQuery::default(),
        }
    }

    pub fn with_query(mut self, query: ProfileQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn url(&self) -> String {
        self.query.to_url(&self.base_url)
    }

    /// Fetch the user list and return its first profile
    pub async fn fetch_profile(&self) -> Result<Profile, RandomUserError> {
        let url = self.url();
        log::info!("Fetching profile from {}", url);

        #[cfg(target_arch = "wasm32")]
        let body = fetch_body_wasm(&url).await?;

        #[cfg(not(target_arch = "wasm32"))]
        let body = fetch_body_native(&url).await?;

        parse_profile(&body)
    }
}

/// Fetch the response body using gloo-net (WASM)
#[cfg(target_arch = "wasm32")]
async fn fetch_body_wasm(url: &str) -> Result<String, RandomUserError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| RandomUserError::Request(e.to_string()))?;

    check_status(response.status(), &response.status_text())?;

    response
        .text()
        .await
        .map_err(|e| RandomUserError::Request(format!("Failed to read response body: {}", e)))
}

/// Fetch the response body using reqwest (native)
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_body_native(url: &str) -> Result<String, RandomUserError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| RandomUserError::Request(e.to_string()))?;

    let status = response.status();
    check_status(status.as_u16(), status.canonical_reason().unwrap_or(""))?;

    response
        .text()
        .await
        .map_err(|e| RandomUserError::Request(format!("Failed to read response body: {}", e)))
}

/// Any status outside 200..=299 is an error
pub fn check_status(code: u16, status_text: &str) -> Result<(), RandomUserError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(RandomUserError::Status {
            code,
            text: status_text.to_string(),
        })
    }
}

/// Parse a response body and take the first profile
pub fn parse_profile(body: &str) -> Result<Profile, RandomUserError> {
    let response: UserResponse =
        serde_json::from_str(body).map_err(|e| RandomUserError::Parse(e.to_string()))?;

    if let Some(info) = &response.info {
        log::debug!(
            "randomuser.me served seed={} page={} results={} (v{})",
            info.seed,
            info.page,
            info.results,
            info.version
        );
    }

    response
        .results
        .into_iter()
        .next()
        .ok_or(RandomUserError::EmptyResults)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [{
            "gender": "female",
            "name": { "title": "Miss", "first": "Jennie", "last": "Nichols" },
            "location": {
                "street": { "number": 8929, "name": "Valwood Pkwy" },
                "city": "Billings",
                "state": "Michigan",
                "country": "United States",
                "postcode": "63104"
            },
            "email": "jennie.nichols@example.com",
            "phone": "(272) 790-0888",
            "cell": "(489) 330-2385",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
            },
            "nat": "US"
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn test_default_url() {
        let api = RandomUserApi::new();
        assert_eq!(api.url(), "https://randomuser.me/api/?page=1&results=1&seed=abc");
    }

    #[test]
    fn test_seed_is_encoded() {
        let query = ProfileQuery {
            seed: "a b&c".to_string(),
            ..Default::default()
        };
        let api = RandomUserApi::new()
            .with_base_url("http://localhost:8080/api/")
            .with_query(query);
        assert_eq!(api.url(), "http://localhost:8080/api/?page=1&results=1&seed=a%20b%26c");
    }

    #[test]
    fn test_parse_first_profile() {
        let profile = parse_profile(SAMPLE).unwrap();
        assert_eq!(profile.gender, "female");
        assert_eq!(profile.name.first, "Jennie");
        assert_eq!(profile.name.last, "Nichols");
        assert_eq!(profile.email, "jennie.nichols@example.com");
        assert_eq!(profile.phone, "(272) 790-0888");
        assert_eq!(profile.location.city, "Billings");
        assert_eq!(profile.location.country, "United States");
        assert!(profile.picture.large.ends_with("/women/75.jpg"));
    }

    #[test]
    fn test_parse_without_info() {
        let body = r#"{"results":[{"gender":"male","name":{"title":"Mr","first":"A","last":"B"},
            "email":"a@b.c","phone":"1","picture":{"large":"l","medium":"m","thumbnail":"t"},
            "location":{"city":"X","country":"Y"}}]}"#;
        assert_eq!(parse_profile(body).unwrap().name.first, "A");
    }

    #[test]
    fn test_empty_results() {
        let body = r#"{"results":[]}"#;
        assert_eq!(parse_profile(body), Err(RandomUserError::EmptyResults));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_profile("<html>"), Err(RandomUserError::Parse(_))));
        assert!(matches!(
            parse_profile(r#"{"results":[{"gender":"x"}]}"#),
            Err(RandomUserError::Parse(_))
        ));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());

        let err = check_status(503, "Service Unavailable").unwrap_err();
        assert_eq!(
            err,
            RandomUserError::Status {
                code: 503,
                text: "Service Unavailable".to_string()
            }
        );
        assert_eq!(err.to_string(), "HTTP error: 503 Service Unavailable");
        assert!(check_status(404, "Not Found").is_err());
        assert!(check_status(301, "Moved Permanently").is_err());
    }

    #[tokio::test]
    async fn test_fetch_reports_error_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                    .await;
            }
        });

        let api = RandomUserApi::new().with_base_url(format!("http://{}/api/", addr));
        let err = api.fetch_profile().await.unwrap_err();
        assert!(matches!(err, RandomUserError::Status { code: 503, .. }));
    }
}
