//! Paginated fetching of option pages over HTTP.
//!
//! Wraps the `{ success, message, data: { <items_key>: [...], pagination } }`
//! list envelope using [`reqwest`]. The items field is named explicitly via
//! [`FetchConfig::items_key`]; nothing is inferred from the envelope shape.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::label::{map_item, SelectOption};

/// Keys used to interpret list responses.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Name of the array field inside `data` holding the rows.
    pub items_key: String,
    /// Item field holding the option id.
    pub id_key: String,
    /// Item field holding the display name.
    pub name_key: String,
    /// Page size sent as `limit`; server default when `None`.
    pub page_size: Option<i64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            items_key: "items".into(),
            id_key: "id".into(),
            name_key: "name".into(),
            page_size: None,
        }
    }
}

/// One page request against a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Endpoint path, e.g. `/api/v1/cars`.
    pub endpoint: String,
    /// 1-based page number.
    pub page: i64,
    /// Debounced search term; `None` when not searching.
    pub search: Option<String>,
    /// Extra filter parameters. Absent values are simply not present.
    pub params: Vec<(String, String)>,
}

/// One fetched page of mapped options.
#[derive(Debug, Clone, Default)]
pub struct FetchedPage {
    /// Options in server order.
    pub options: Vec<SelectOption>,
    /// The next page number, or `None` when this was the last page.
    pub next_page: Option<i64>,
    /// Total page count reported by the server, if any.
    pub total_pages: Option<i64>,
}

/// Source of option pages.
///
/// Implemented by [`PageFetcher`] for real HTTP and by scripted sources in
/// tests, so the accumulator and combobox can be exercised without a
/// network.
#[async_trait::async_trait]
pub trait PageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchedPage, ClientError>;
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<Value>,
}

/// Only `page` and `pages` drive the client; the rest of the pagination
/// block is ignored.
#[derive(Debug, Deserialize)]
struct WirePagination {
    page: i64,
    pages: i64,
}

/// HTTP client for paginated list endpoints.
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: String,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a fetcher for the given API base URL.
    ///
    /// * `base_url` - e.g. `http://host:3000`; endpoint paths are appended.
    pub fn new(base_url: impl Into<String>, config: FetchConfig) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, config)
    }

    /// Create a fetcher reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple controls).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        config: FetchConfig,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    async fn get_page(&self, request: &PageRequest) -> Result<FetchedPage, ClientError> {
        let mut query: Vec<(&str, String)> = vec![("page", request.page.to_string())];
        if let Some(limit) = self.config.page_size {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        for (key, value) in &request.params {
            query.push((key.as_str(), value.clone()));
        }

        let url = format!("{}{}", self.base_url, request.endpoint);
        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: WireEnvelope = response.json().await?;

        tracing::debug!(
            endpoint = %request.endpoint,
            page = request.page,
            success = envelope.success,
            message = %envelope.message,
            "Fetched option page",
        );

        Ok(interpret(envelope, &self.config))
    }
}

#[async_trait::async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> Result<FetchedPage, ClientError> {
        self.get_page(request).await
    }
}

/// Interpret a decoded envelope into a page of options.
///
/// Missing or malformed `data` fields degrade to an empty page rather
/// than erroring: a `success: false` answer with no data renders as "no
/// results", not as a failure.
fn interpret(envelope: WireEnvelope, config: &FetchConfig) -> FetchedPage {
    let Some(data) = envelope.data else {
        return FetchedPage::default();
    };

    let options = data
        .get(&config.items_key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| map_item(item, &config.id_key, &config.name_key))
                .collect()
        })
        .unwrap_or_default();

    let pagination: Option<WirePagination> = data
        .get("pagination")
        .and_then(|p| serde_json::from_value(p.clone()).ok());

    let (next_page, total_pages) = match pagination {
        Some(p) => {
            let next = if p.page < p.pages { Some(p.page + 1) } else { None };
            (next, Some(p.pages))
        }
        None => (None, None),
    };

    FetchedPage {
        options,
        next_page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(data: Value) -> WireEnvelope {
        serde_json::from_value(json!({
            "success": true,
            "message": "OK",
            "data": data,
        }))
        .unwrap()
    }

    #[test]
    fn items_are_mapped_under_the_configured_key() {
        let page = interpret(
            envelope(json!({
                "items": [{"id": 1, "name": "Camry"}, {"id": 2, "name": "Patrol"}],
                "pagination": {"page": 1, "limit": 2, "total": 4, "pages": 2},
            })),
            &FetchConfig::default(),
        );

        assert_eq!(page.options.len(), 2);
        assert_eq!(page.options[0].name, "Camry");
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.total_pages, Some(2));
    }

    #[test]
    fn final_page_has_no_next_page() {
        let page = interpret(
            envelope(json!({
                "items": [{"id": 21, "name": "Last"}],
                "pagination": {"page": 3, "limit": 10, "total": 25, "pages": 3},
            })),
            &FetchConfig::default(),
        );

        assert_eq!(page.next_page, None);
        assert_eq!(page.total_pages, Some(3));
    }

    #[test]
    fn missing_data_degrades_to_an_empty_page() {
        let envelope: WireEnvelope = serde_json::from_value(json!({
            "success": false,
            "message": "Something went wrong",
        }))
        .unwrap();

        let page = interpret(envelope, &FetchConfig::default());
        assert!(page.options.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn missing_items_key_and_pagination_degrade_silently() {
        let page = interpret(envelope(json!({"unexpected": true})), &FetchConfig::default());
        assert!(page.options.is_empty());
        assert_eq!(page.next_page, None);
        assert_eq!(page.total_pages, None);
    }

    #[test]
    fn malformed_pagination_is_treated_as_absent() {
        let page = interpret(
            envelope(json!({
                "items": [{"id": 1, "name": "Only"}],
                "pagination": {"page": "one"},
            })),
            &FetchConfig::default(),
        );

        assert_eq!(page.options.len(), 1);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn custom_items_key_is_honoured() {
        let config = FetchConfig {
            items_key: "vehicles".into(),
            ..FetchConfig::default()
        };
        let page = interpret(
            envelope(json!({
                "vehicles": [{"id": 1, "name": "Camry"}],
                "pagination": {"page": 1, "limit": 20, "total": 1, "pages": 1},
            })),
            &config,
        );

        assert_eq!(page.options.len(), 1);
    }
}
