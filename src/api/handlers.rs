//! HTTP request handlers for the shift pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_interval_pay, segment_by_hour, summarize_dashboard, summarize_schedule,
    summarize_schedule_day, summarize_time_cards,
};
use crate::error::{PayError, PayResult};
use crate::models::{DashboardSummary, PayReport, ShiftInterval, TimeCard};

use super::request::{
    AmendTimeCardRequest, ClockOutRequest, DashboardRequest, ReportRequest, ScheduleDayRequest,
    ScheduleSummaryRequest, ShiftPayRequest, TimeCardRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, ScheduleDayResponse, ShiftPayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shift-pay", post(shift_pay_handler))
        .route("/reports", post(report_handler))
        .route("/dashboard", post(dashboard_handler))
        .route("/time-cards/clock-out", post(clock_out_handler))
        .route("/time-cards/amend", post(amend_handler))
        .route("/schedules/summary", post(schedule_summary_handler))
        .route("/schedules/day", post(schedule_day_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /shift-pay.
///
/// Returns the pay breakdown of a single interval with its hour segments.
async fn shift_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match bounded_interval(request.start, request.end, state.max_shift_hours()) {
        Ok(interval) => {
            let response = ShiftPayResponse {
                breakdown: compute_interval_pay(&interval),
                segments: segment_by_hour(&interval),
            };
            info!(
                correlation_id = %correlation_id,
                total_hours = %response.breakdown.total_hours,
                total_pay = response.breakdown.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Shift pay calculated"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /reports.
///
/// Rebuilds every submitted time card and reports on the completed ones.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_report(&state, request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                days_worked = report.days_worked,
                total_pay = report.totals.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Report generated"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn build_report(state: &AppState, request: ReportRequest) -> PayResult<PayReport> {
    check_batch_size(request.time_cards.len(), state.max_batch_size())?;
    let range = request.range()?;
    let cards = load_cards(request.time_cards, state.max_shift_hours())?;
    Ok(summarize_time_cards(&cards, range))
}

/// Handler for POST /dashboard.
///
/// Summarises the month containing `as_of` with its trends.
async fn dashboard_handler(
    State(state): State<AppState>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_dashboard(&state, request) {
        Ok(dashboard) => {
            info!(
                correlation_id = %correlation_id,
                as_of = %dashboard.as_of,
                total_pay = dashboard.totals.total_pay,
                months = dashboard.monthly_history.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Dashboard generated"
            );
            json_response(StatusCode::OK, dashboard)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn build_dashboard(state: &AppState, request: DashboardRequest) -> PayResult<DashboardSummary> {
    check_batch_size(request.time_cards.len(), state.max_batch_size())?;
    let as_of = request.as_of();
    let months = request.months.min(state.max_history_months());
    let cards = load_cards(request.time_cards, state.max_shift_hours())?;
    Ok(summarize_dashboard(&cards, as_of, months))
}

/// Handler for POST /time-cards/clock-out.
///
/// Closes the submitted active card and returns it with its pay.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock out request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match close_time_card(&state, request) {
        Ok(card) => {
            info!(
                correlation_id = %correlation_id,
                time_card_id = %card.id,
                total_pay = card.breakdown.total_pay,
                "Time card closed"
            );
            json_response(StatusCode::OK, card)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn close_time_card(state: &AppState, request: ClockOutRequest) -> PayResult<TimeCard> {
    let limit_hours = state.max_shift_hours();
    bounded_interval(request.time_card.time_in, request.time_out, limit_hours)?;
    let mut card = card_from_request(request.time_card, limit_hours)?;
    card.clock_out(request.time_out, request.notes)?;
    Ok(card)
}

/// Handler for POST /time-cards/amend.
///
/// Applies corrected times to the submitted card and recomputes its pay.
async fn amend_handler(
    State(state): State<AppState>,
    payload: Result<Json<AmendTimeCardRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time card amendment");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match amend_time_card(&state, request) {
        Ok(card) => {
            info!(
                correlation_id = %correlation_id,
                time_card_id = %card.id,
                status = ?card.status,
                total_pay = card.breakdown.total_pay,
                "Time card amended"
            );
            json_response(StatusCode::OK, card)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn amend_time_card(state: &AppState, request: AmendTimeCardRequest) -> PayResult<TimeCard> {
    let limit_hours = state.max_shift_hours();
    let mut card = card_from_request(request.time_card, limit_hours)?;
    if let Some(time_out) = request.time_out.or(card.time_out) {
        bounded_interval(request.time_in.unwrap_or(card.time_in), time_out, limit_hours)?;
    }
    card.amend_times(request.time_in, request.time_out)?;
    Ok(card)
}

/// Handler for POST /schedules/summary.
async fn schedule_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = check_batch_size(request.entries.len(), state.max_batch_size())
        .and_then(|()| summarize_schedule(&request.entries, request.as_of));

    match result {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                as_of = %summary.as_of,
                work_days = summary.work_days,
                total_pay = summary.totals.total_pay,
                "Schedule summarised"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /schedules/day.
async fn schedule_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleDayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule day request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = check_batch_size(request.entries.len(), state.max_batch_size())
        .and_then(|()| summarize_schedule_day(&request.entries, request.date));

    match result {
        Ok(totals) => {
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                shift_count = totals.shift_count,
                total_pay = totals.total_pay,
                "Schedule day totalled"
            );
            json_response(
                StatusCode::OK,
                ScheduleDayResponse {
                    date: request.date,
                    totals,
                },
            )
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

fn check_batch_size(count: usize, limit: usize) -> PayResult<()> {
    if count > limit {
        return Err(PayError::BatchTooLarge { count, limit });
    }
    Ok(())
}

/// Validates an interval and rejects it if it spans more than `limit_hours`.
///
/// Runs before any segmentation so oversized input never reaches the walk.
fn bounded_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    limit_hours: u32,
) -> PayResult<ShiftInterval> {
    let interval = ShiftInterval::new(start, end)?;
    if interval.duration() > TimeDelta::hours(i64::from(limit_hours)) {
        return Err(PayError::ShiftTooLong {
            start,
            end,
            limit_hours,
        });
    }
    Ok(interval)
}

fn card_from_request(request: TimeCardRequest, limit_hours: u32) -> PayResult<TimeCard> {
    if let Some(time_out) = request.time_out {
        bounded_interval(request.time_in, time_out, limit_hours)?;
    }
    TimeCard::try_from(request)
}

fn load_cards(requests: Vec<TimeCardRequest>, limit_hours: u32) -> PayResult<Vec<TimeCard>> {
    requests
        .into_iter()
        .map(|request| card_from_request(request, limit_hours))
        .collect()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn failure_response(err: PayError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, e.g. "missing field `end`"
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}
