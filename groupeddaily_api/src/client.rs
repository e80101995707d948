//! HTTP client for the grouped daily bars endpoint.

use url::Url;

use crate::{types::GroupedDailyResponse, Error};

/// Default base URL for the local grouped daily endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path serving the grouped daily payload.
const GROUPED_DAILY_PATH: &str = "/api/polygon";

/// An HTTP status paired with the decoded entity it carried.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub status: reqwest::StatusCode,
    pub entity: T,
}

/// HTTP client for the grouped daily endpoint.
///
/// Issues plain GET requests with `Accept: application/json`. One call per
/// request, no retries. The underlying `reqwest::Client` keeps its default
/// timeout behavior.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Also used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::from(e)
        })
    }

    /// Fetches the grouped daily payload and decodes it.
    ///
    /// The body is decoded regardless of the HTTP status code; a non-2xx
    /// response with a grouped-daily-shaped body still succeeds. A body that
    /// does not match the shape fails with [`Error::Parse`] whatever the
    /// status was.
    pub async fn get_grouped_daily(&self) -> Result<ApiResponse<GroupedDailyResponse>, Error> {
        let url = self.get_url(GROUPED_DAILY_PATH)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get grouped daily bars: {}", e);
                Error::from(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from(e)
        })?;

        let entity = serde_json::from_str::<GroupedDailyResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse grouped daily response: {} | body: {}", e, snippet);
            Error::Parse { source: e, snippet }
        })?;

        Ok(ApiResponse { status, entity })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // The cut may land inside a multibyte character; back up to the
        // nearest boundary so the slice cannot panic.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_targets_default_base_url() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn truncate_keeps_short_bodies_intact() {
        assert_eq!(truncate_body("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn truncate_snaps_to_char_boundary() {
        // 3000 bytes of 3-byte characters; the 2000-byte cut lands mid-char.
        let body = "€".repeat(1000);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(
            snippet.strip_suffix("...[truncated]").unwrap(),
            "€".repeat(666)
        );
    }
}
