// src/api/parser.rs
//! Decodes Notion API responses with notion-client's serde types.

use super::client::ApiResponse;
use super::responses::{
    NotionError, QueryDatabaseResponse, RawPage, RetrieveBlockChildrenResponse, ToDomain,
};
use super::types::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionClientError, NotionErrorCode};
use crate::model::{Block, Page};
use reqwest::StatusCode;

/// Decodes a success body as `T`, or an error body as a Notion error.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        parse_error(&result.data, result.status, &result.url)
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        NotionClientError::Deserialization {
            source: e,
            body: preview(body),
        }
        .into()
    })
}

fn parse_error<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        log::debug!(
            "Notion error from {}: {} ({})",
            url,
            notion_error.code,
            notion_error.message
        );
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
        });
    }

    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status,
    })
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let cut = (0..=ERROR_BODY_PREVIEW_LENGTH)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let raw: RawPage = parse_api_response(result)?;
    raw.to_domain()
}

pub fn parse_block_response(result: ApiResponse<String>) -> Result<Block, AppError> {
    let raw: serde_json::Value = parse_api_response(result)?;
    raw.to_domain()
}

/// One page of database query results.
pub fn parse_pages_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Page>, AppError> {
    let response: QueryDatabaseResponse = parse_api_response(result)?;
    let object = response.object.clone();
    let next_cursor = response.next_cursor.clone();
    let has_more = response.has_more;

    Ok(PaginatedResponse {
        object,
        results: response.into_domain_pages()?,
        next_cursor,
        has_more,
    })
}

/// One page of block children.
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: RetrieveBlockChildrenResponse = parse_api_response(result)?;
    let object = response.object.clone();
    let next_cursor = response.next_cursor.clone();
    let has_more = response.has_more;

    Ok(PaginatedResponse {
        object,
        results: response.into_domain_blocks()?,
        next_cursor,
        has_more,
    })
}
