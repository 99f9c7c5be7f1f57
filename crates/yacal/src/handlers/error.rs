use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use yacal_core::calendar::{calendar_error_to_status_code, CalendarError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(calendar_error) = self.0.downcast_ref::<CalendarError>() {
            let code = calendar_error_to_status_code(calendar_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = %self.0, "Request failed");
        }

        (
            status_code,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
