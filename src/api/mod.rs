//! HTTP API module for the hours tracker.
//!
//! This module provides the REST endpoints behind the entry form, the
//! manage view, the balance summary and the calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalendarQuery, DateQuery, NewEntryRequest, SummaryQuery, UpdateEntryRequest, parse_month_text,
};
pub use response::{ApiError, ApiErrorResponse, DateView, DeletedRow, EntryView};
pub use state::AppState;
