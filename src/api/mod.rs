//! HTTP API module for the shift pay service.
//!
//! This module provides the REST API endpoints for calculating shift pay,
//! generating time card reports and dashboards, closing and correcting time
//! cards, and summarising schedules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AmendTimeCardRequest, ClockOutRequest, DEFAULT_HISTORY_MONTHS, DashboardRequest,
    ReportRequest, ScheduleDayRequest, ScheduleSummaryRequest, ShiftPayRequest, TimeCardRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, HealthResponse, ScheduleDayResponse, ShiftPayResponse,
};
pub use state::AppState;
