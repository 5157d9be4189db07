//! Performance benchmarks for the hours tracker.
//!
//! Every report recomputes balances from the whole worksheet, so these
//! benchmarks measure the summary and calendar over a year of entries:
//! - Daily balances for a year of rows
//! - Summary endpoint with one year logged
//! - Calendar endpoint with one year logged
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hours_tracker::api::{AppState, create_router};
use hours_tracker::calculation::{daily_balances, summarize};
use hours_tracker::config::ConfigLoader;
use hours_tracker::models::{EntryKind, TargetPolicy, WeekStart};
use hours_tracker::store::{MemorySheetStore, SheetRow};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds one row per working day of 2025, with a vacation every fourth Monday.
fn year_of_rows() -> Vec<SheetRow> {
    let mut rows = Vec::new();
    let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    while date.year() == 2025 {
        match date.weekday() {
            Weekday::Fri | Weekday::Sat => {}
            Weekday::Mon if date.iso_week().week() % 4 == 0 => rows.push(SheetRow {
                date: date.format("%Y-%m-%d").to_string(),
                kind: EntryKind::Vacation.as_str().to_string(),
                ..SheetRow::default()
            }),
            _ => rows.push(SheetRow {
                date: date.format("%Y-%m-%d").to_string(),
                start_time: "06:30:00".to_string(),
                end_time: "15:45:00".to_string(),
                notes: String::new(),
                kind: EntryKind::Work.as_str().to_string(),
            }),
        }
        date += Duration::days(1);
    }
    rows
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config, Arc::new(MemorySheetStore::with_rows(year_of_rows())))
}

/// Benchmark: balances and summary computed directly from entries.
fn bench_daily_balances(c: &mut Criterion) {
    let state = create_test_state();
    let entries = state.ledger().entries().unwrap();
    let policy = TargetPolicy::default();
    let reference = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();

    c.bench_function("daily_balances_year", |b| {
        b.iter(|| {
            let days = daily_balances(black_box(&entries), &policy);
            black_box(summarize(&days, reference, WeekStart::Sunday).unwrap())
        })
    });
}

/// Benchmark: GET /summary with a year of rows.
fn bench_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    c.bench_function("summary_endpoint_year", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/summary?today=2025-06-18")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: GET /calendar with a year of rows.
fn bench_calendar_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    c.bench_function("calendar_endpoint_year", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/calendar?month=2025-06")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_daily_balances,
    bench_summary_endpoint,
    bench_calendar_endpoint
);
criterion_main!(benches);
