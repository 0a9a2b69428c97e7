use std::sync::Arc;

use axum::{
    RequestExt, Router,
    body::{Bytes, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::{info, warn};

use crate::{
    application::usecases::payex_callback::PayexCallbackUseCase,
    domain::value_objects::payex_callback::PayexCallbackForm,
    infrastructure::axum_http::client_identifier::client_identifier,
};

pub fn routes(callback_path: &str, usecase: Arc<PayexCallbackUseCase>) -> Router {
    Router::new()
        .route(callback_path, any(callback))
        .with_state(usecase)
}

/// Transaction callback from PayEx. The answer is always `OK` or `FAILURE`
/// in the body; PayEx retries on `FAILURE`.
///
/// Headers are logged before the body is read, so a body that is too large
/// or cut off still leaves an audit line.
pub async fn callback(
    State(usecase): State<Arc<PayexCallbackUseCase>>,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method.clone();

    info!(
        method = %method,
        uri = %parts.uri,
        headers = ?parts.headers,
        client = %client_identifier(&parts.headers),
        "payex_callback: callback received"
    );

    // `into_limited_body` applies the router's `DefaultBodyLimit`.
    let body = Request::from_parts(parts, body).into_limited_body();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "payex_callback: failed to read body");
            Bytes::new()
        }
    };

    let form = PayexCallbackForm::from_pairs(url::form_urlencoded::parse(&body));
    info!(
        raw_body = %String::from_utf8_lossy(&body),
        form = ?form,
        "payex_callback: callback body"
    );

    if method != Method::POST {
        warn!(method = %method, "payex_callback: method not allowed");
        return method_not_allowed();
    }

    let outcome = usecase.handle_callback(form).await;
    (StatusCode::OK, outcome.as_str()).into_response()
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, HeaderValue::from_static("POST"))],
        "Method Not Allowed",
    )
        .into_response()
}
