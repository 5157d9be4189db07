//! Personal work-hours tracker
//!
//! This crate records work and leave entries in a worksheet, measures each
//! logged day against a weekday target, and reports weekly and monthly
//! surplus or deficit balances through a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod store;
