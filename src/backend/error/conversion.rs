/**
 * Error Conversion
 *
 * `IntoResponse` for the API error taxonomy, so handlers can return
 * `Result<_, ApiError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Task not found",
 *   "status": 404
 * }
 * ```
 */
use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    body::Body,
};
use crate::backend::error::types::ApiError;

// Static so the fallback path can never emit invalid JSON, whatever the
// message contains.
const FALLBACK_BODY: &str = r#"{"message":"Internal Server Error","status":500}"#;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("[API] Internal error: {}", message);
        }

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_string(&body).unwrap_or_else(|_| FALLBACK_BODY.to_string()),
            ))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from(FALLBACK_BODY))
                    .unwrap()
            })
    }
}
