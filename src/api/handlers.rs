//! HTTP request handlers for the hours tracker API.
//!
//! This module contains the handler functions for all API endpoints.
//! Every handler tags its log lines with a per-request correlation id.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::format_display_date;
use crate::error::TrackerError;
use crate::models::{EntryUpdate, NewEntry};

use super::request::{
    CalendarQuery, DateQuery, NewEntryRequest, SummaryQuery, UpdateEntryRequest, optional_date,
    parse_month_text,
};
use super::response::{ApiError, ApiErrorResponse, DateView, DeletedRow, EntryView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/form", get(form_handler))
        .route("/entries", get(list_entries_handler).post(create_entry_handler))
        .route("/entries/dates", get(list_dates_handler))
        .route(
            "/entries/:id",
            get(get_entry_handler)
                .put(update_entry_handler)
                .delete(delete_entry_handler),
        )
        .route("/summary", get(summary_handler))
        .route("/calendar", get(calendar_handler))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: TrackerError, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}",
        context
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn path_rejection_response(correlation_id: Uuid, rejection: PathRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection,
        "Invalid entry id"
    );
    json_response(
        StatusCode::BAD_REQUEST,
        ApiError::with_details(
            "INVALID_ID",
            "Entry id must be a non-negative integer",
            rejection.body_text(),
        ),
    )
}

/// Handler for GET /form.
///
/// Returns the pre-filled values for the entry form on `?date=` (default today).
async fn form_handler(State(state): State<AppState>, Query(query): Query<DateQuery>) -> Response {
    let correlation_id = Uuid::new_v4();

    let date = match optional_date(query.date.as_deref()) {
        Ok(date) => date.unwrap_or_else(today),
        Err(err) => return error_response(correlation_id, err, "Invalid form date"),
    };

    info!(correlation_id = %correlation_id, date = %date, "Serving form defaults");
    json_response(StatusCode::OK, state.ledger().form_defaults(date))
}

/// Handler for GET /entries.
///
/// Lists every readable entry, or only those on `?date=` when given.
async fn list_entries_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let entries = match optional_date(query.date.as_deref()) {
        Ok(Some(date)) => state.ledger().entries_on(date),
        Ok(None) => state.ledger().entries(),
        Err(err) => return error_response(correlation_id, err, "Invalid list date"),
    };

    match entries {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                count = entries.len(),
                "Listed entries"
            );
            let views: Vec<EntryView> = entries.iter().map(EntryView::from).collect();
            json_response(StatusCode::OK, views)
        }
        Err(err) => error_response(correlation_id, err, "Listing entries failed"),
    }
}

/// Handler for GET /entries/dates.
///
/// Lists the distinct logged dates, newest first.
async fn list_dates_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.ledger().dates() {
        Ok(dates) => {
            let views: Vec<DateView> = dates
                .into_iter()
                .map(|date| DateView {
                    date,
                    display_date: format_display_date(date),
                })
                .collect();
            json_response(StatusCode::OK, views)
        }
        Err(err) => error_response(correlation_id, err, "Listing dates failed"),
    }
}

/// Handler for GET /entries/:id.
async fn get_entry_handler(
    State(state): State<AppState>,
    id: Result<Path<usize>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };

    match state.ledger().entry(id) {
        Ok(entry) => json_response(StatusCode::OK, EntryView::from(&entry)),
        Err(err) => error_response(correlation_id, err, "Entry lookup failed"),
    }
}

/// Handler for POST /entries.
///
/// Validates the typed form values and appends a row to the worksheet.
async fn create_entry_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEntryRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing new entry");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let new_entry = match NewEntry::try_from(request) {
        Ok(new_entry) => new_entry,
        Err(err) => return error_response(correlation_id, err, "Entry validation failed"),
    };

    let start_time = Instant::now();
    match state.ledger().add_entry(new_entry) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                id = entry.id,
                date = %entry.date,
                kind = %entry.kind,
                duration_us = start_time.elapsed().as_micros(),
                "Entry created"
            );
            json_response(StatusCode::CREATED, EntryView::from(&entry))
        }
        Err(err) => error_response(correlation_id, err, "Entry creation failed"),
    }
}

/// Handler for PUT /entries/:id.
///
/// Applies the given fields to an existing entry; absent fields are kept.
async fn update_entry_handler(
    State(state): State<AppState>,
    id: Result<Path<usize>, PathRejection>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, id, "Processing entry update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let update = match EntryUpdate::try_from(request) {
        Ok(update) => update,
        Err(err) => return error_response(correlation_id, err, "Update validation failed"),
    };

    match state.ledger().update_entry(id, update) {
        Ok(entry) => {
            info!(correlation_id = %correlation_id, id, "Entry updated");
            json_response(StatusCode::OK, EntryView::from(&entry))
        }
        Err(err) => error_response(correlation_id, err, "Entry update failed"),
    }
}

/// Handler for DELETE /entries/:id.
///
/// Removes the row and returns its cells. Unreadable rows can be deleted too.
async fn delete_entry_handler(
    State(state): State<AppState>,
    id: Result<Path<usize>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return path_rejection_response(correlation_id, rejection),
    };

    match state.ledger().delete_entry(id) {
        Ok(row) => {
            info!(correlation_id = %correlation_id, id, "Entry deleted");
            json_response(StatusCode::OK, DeletedRow { id, row })
        }
        Err(err) => error_response(correlation_id, err, "Entry deletion failed"),
    }
}

/// Handler for GET /summary.
///
/// Returns week and month balances around `?today=` (default today).
async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let reference = match optional_date(query.today.as_deref()) {
        Ok(date) => date.unwrap_or_else(today),
        Err(err) => return error_response(correlation_id, err, "Invalid summary date"),
    };

    let start_time = Instant::now();
    match state.ledger().summary(reference) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                reference = %reference,
                week = %summary.week.balance_display,
                month = %summary.month.balance_display,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => error_response(correlation_id, err, "Summary failed"),
    }
}

/// Handler for GET /calendar.
///
/// Returns FullCalendar events and a month grid for `?month=YYYY-MM`
/// (default the current month).
async fn calendar_handler(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month) = match query.month.as_deref().map(str::trim) {
        None | Some("") => {
            let now = today();
            (now.year(), now.month())
        }
        Some(text) => match parse_month_text(text) {
            Ok(ym) => ym,
            Err(err) => return error_response(correlation_id, err, "Invalid calendar month"),
        },
    };

    match state.ledger().calendar(year, month) {
        Ok(view) => {
            info!(
                correlation_id = %correlation_id,
                year,
                month,
                events = view.events.len(),
                "Calendar completed"
            );
            json_response(StatusCode::OK, view)
        }
        Err(err) => error_response(correlation_id, err, "Calendar failed"),
    }
}
