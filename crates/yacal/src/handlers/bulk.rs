//! Calendar endpoints under `/api/v1/bulk`.
//!
//! Every endpoint takes the Modeus event query as a JSON body and the
//! upstream credentials from headers (see [`Credentials`]).

use std::convert::Infallible;

use axum::{
    body::Body,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use yacal_core::calendar::{
    CalendarRequest, CalendarSnapshot, ModeusEventsBody, RefreshedCalendarSnapshot,
};
use yacal_core::export::ICS_CONTENT_TYPE;

use crate::{credentials::Credentials, handlers::error::AppError, state::AppState};

/// Query parameters shared by the calendar endpoints.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Netology program calendar ID.
    pub calendar_id: i64,
}

/// Query parameters of the export endpoint.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub calendar_id: i64,
    /// IANA timezone name, e.g. `Europe/Moscow`.
    pub timezone: String,
}

fn calendar_request(
    body: ModeusEventsBody,
    credentials: Credentials,
    calendar_id: i64,
) -> CalendarRequest {
    CalendarRequest::new(
        body,
        credentials.session_token,
        calendar_id,
        credentials.cookies,
    )
}

/// Get the aggregated calendar (GET|POST /api/v1/bulk/events).
///
/// Served from cache when possible.
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
    credentials: Credentials,
    Json(body): Json<ModeusEventsBody>,
) -> Result<Json<CalendarSnapshot>, AppError> {
    let request = calendar_request(body, credentials, query.calendar_id);
    let snapshot = state.calendar.get_cached_calendar(&request).await?;
    Ok(Json(snapshot))
}

/// Refetch a cached calendar (POST /api/v1/bulk/refresh_events).
pub async fn refresh_events(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
    credentials: Credentials,
    Json(body): Json<ModeusEventsBody>,
) -> Result<Json<RefreshedCalendarSnapshot>, AppError> {
    let request = calendar_request(body, credentials, query.calendar_id);
    let refreshed = state.calendar.refresh(&request).await?;
    Ok(Json(refreshed))
}

/// Download the calendar as iCalendar (GET|POST /api/v1/bulk/export_ics).
pub async fn export_ics(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    credentials: Credentials,
    Json(body): Json<ModeusEventsBody>,
) -> Result<impl IntoResponse, AppError> {
    let request = calendar_request(body, credentials, query.calendar_id);
    let document = state.calendar.export(&request, &query.timezone).await?;

    let stream = tokio_stream::once(Ok::<_, Infallible>(document.into_bytes()));

    Ok((
        [
            (header::CONTENT_TYPE, ICS_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"calendar.ics\"",
            ),
        ],
        Body::from_stream(stream),
    ))
}
