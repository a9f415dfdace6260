use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::app::dto::ErrorBody;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn not_found(code: &'static str, message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, code, message)
}
