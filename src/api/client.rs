// src/api/client.rs
//! Thin reqwest wrapper for the Notion API.
//!
//! Handles authentication and the request/response round trip; decoding is
//! left to [`super::parser`].

use super::types::DatabaseQuery;
use crate::constants::{NOTION_API_VERSION, NOTION_MAX_RESULT_PAGES};
use crate::error::AppError;
use crate::model::{Block, Page};
use crate::types::{ApiKey, NotionId};
use reqwest::{header, Client, Response};
use serde::Serialize;

const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Same as [`Self::new`] against another API root, e.g. a local mock.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to `endpoint` (relative to the API root) with query parameters.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;
        log::debug!("GET {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Makes a POST request with JSON body to `endpoint`.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);

        let response = self.client.post(url).json(body).send().await?;
        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(
        &self,
        database: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let pagination_result = super::simple_pagination::fetch_all_pages_simple(
            |page_size, cursor| {
                let client = self.clone();
                let endpoint = endpoint.clone();
                let body = query_body(query, page_size, cursor);
                async move {
                    let body = body?;
                    let response = client.post(&endpoint, &body).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_pages_pagination(result)
                }
            },
            Some(NOTION_MAX_RESULT_PAGES),
        )
        .await?;

        log::debug!(
            "Database {} returned {} rows over {} result pages",
            database,
            pagination_result.items.len(),
            pagination_result.pages_fetched
        );
        Ok(pagination_result.items)
    }

    async fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint, &[] as &[(&str, &str)]).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_page_response(result)
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let pagination_result = super::simple_pagination::fetch_all_pages_simple(
            |page_size, cursor| {
                let client = self.clone();
                let endpoint = endpoint.clone();
                async move {
                    let query = children_query(page_size, cursor);
                    let response = client.get(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_blocks_pagination(result)
                }
            },
            Some(NOTION_MAX_RESULT_PAGES),
        )
        .await?;
        Ok(pagination_result.items)
    }
}

/// The caller's filter and sorts plus the pagination fields.
fn query_body(
    query: &DatabaseQuery,
    page_size: usize,
    cursor: Option<String>,
) -> Result<serde_json::Value, AppError> {
    let mut body = serde_json::to_value(query)?;
    body["page_size"] = serde_json::json!(page_size);
    if let Some(cursor) = cursor {
        body["start_cursor"] = serde_json::json!(cursor);
    }
    Ok(body)
}

fn children_query(page_size: usize, cursor: Option<String>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page_size", page_size.to_string())];
    if let Some(cursor) = cursor {
        query.push(("start_cursor", cursor));
    }
    query
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

impl ApiResponse<String> {
    /// A successful response with the given body, for decoding fixtures.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            data: body.into(),
            status: reqwest::StatusCode::OK,
            url: String::new(),
        }
    }
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_query_carries_cursor() {
        assert_eq!(
            children_query(100, None),
            vec![("page_size", "100".to_string())]
        );
        assert_eq!(
            children_query(100, Some("abc".to_string())),
            vec![
                ("page_size", "100".to_string()),
                ("start_cursor", "abc".to_string())
            ]
        );
    }

    #[test]
    fn test_query_body_carries_cursor() {
        let query = DatabaseQuery::default();
        assert_eq!(
            query_body(&query, 100, None).unwrap(),
            serde_json::json!({ "page_size": 100 })
        );
        assert_eq!(
            query_body(&query, 100, Some("abc".to_string())).unwrap(),
            serde_json::json!({ "page_size": 100, "start_cursor": "abc" })
        );
    }

    #[test]
    fn test_query_body_forwards_filter_and_sorts() {
        let query = DatabaseQuery {
            filter: Some(serde_json::json!({
                "property": "Published",
                "checkbox": { "equals": true }
            })),
            sorts: vec![serde_json::json!({ "property": "Date", "direction": "descending" })],
        };

        assert_eq!(
            query_body(&query, 100, Some("abc".to_string())).unwrap(),
            serde_json::json!({
                "filter": { "property": "Published", "checkbox": { "equals": true } },
                "sorts": [{ "property": "Date", "direction": "descending" }],
                "page_size": 100,
                "start_cursor": "abc"
            })
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let key = ApiKey::new("secret_abcdefghijklmnopqrs").unwrap();
        let client = NotionHttpClient::with_base_url(&key, "http://localhost:9999/v1/").unwrap();
        assert_eq!(client.base_url, "http://localhost:9999/v1");
    }
}
