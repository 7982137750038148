//! Shift pay engine.
//!
//! This crate splits work intervals into regular and night-differential
//! hours (the night window is 22:00 to 06:00 local clock time), pays each
//! bucket at its fixed rate, and aggregates per-shift results into time card
//! reports, month dashboards and schedule summaries. An axum HTTP API exposes
//! the same calculations.
//!
//! # Example
//!
//! ```
//! use shift_pay::calculation::compute_shift_pay;
//! use chrono::NaiveDateTime;
//!
//! let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//! let end = NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//!
//! assert_eq!(compute_shift_pay(start, end).unwrap().total_pay, 8000);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
