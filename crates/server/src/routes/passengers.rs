//! Passenger listing and lookup.
//!
//! # Endpoints
//!
//! - `GET /api/passengers?page=N&per_page=M` - One page of records
//! - `GET /api/passengers/{id}` - A single record
//!
//! Parameters are parsed here rather than by typed extractors so malformed
//! values produce the JSON error body.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use analytics::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Page, PageRequest, find_by_id, paginate};
use types::Passenger;

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Raw query parameters for the listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PassengersQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PassengersQuery {
    /// Parse and validate into a [`PageRequest`].
    pub fn page_request(&self) -> AppResult<PageRequest> {
        let page = parse_param("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let per_page = parse_param("per_page", self.per_page.as_deref(), DEFAULT_PER_PAGE)?;
        Ok(PageRequest::new(page, per_page)?)
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: u64) -> AppResult<u64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| {
            let reason = if is_integer(value) && !value.starts_with('-') {
                "is out of range"
            } else {
                "must be a positive integer"
            };
            AppError::BadRequest(format!("{name} {reason}, got '{value}'"))
        }),
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(|c| c == '+' || c == '-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// List passengers: `GET /api/passengers`
pub async fn list_passengers(
    State(state): State<ServerState>,
    query: Result<Query<PassengersQuery>, QueryRejection>,
) -> AppResult<Json<Page>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = query.page_request()?;
    Ok(Json(paginate(&state.dataset, request)))
}

/// Get one passenger: `GET /api/passengers/{id}`
///
/// Non-integer ids are a bad request; integers with no matching record,
/// including zero, negatives and values past `u64`, are not found.
pub async fn get_passenger(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Passenger>> {
    let not_found = || AppError::NotFound("Passenger not found".into());
    let raw = raw_id.trim();

    match raw.parse::<u64>() {
        Ok(id) => find_by_id(&state.dataset, id.into())
            .cloned()
            .map(Json)
            .ok_or_else(not_found),
        Err(_) if is_integer(raw) => Err(not_found()),
        Err(_) => Err(AppError::BadRequest(format!("Invalid passenger id '{raw_id}'"))),
    }
}
