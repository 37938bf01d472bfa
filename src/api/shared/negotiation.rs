// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Content negotiation.
//!
//! Every API resource is rendered as JSON. A request whose `Accept` header
//! admits neither `application/json` nor a wildcard is answered with 406.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::debug;

use super::error::{error_codes, ErrorResponse};

/// Whether the `Accept` header allows a JSON response.
///
/// A missing or unparseable header accepts anything.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let values: Vec<&str> = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if values.is_empty() {
        return true;
    }

    values
        .iter()
        .flat_map(|value| value.split(','))
        .filter_map(|range| {
            let mut parts = range.split(';');
            let media = parts.next()?.trim().to_ascii_lowercase();
            // a zero weight refuses the range
            let refused = parts.any(|param| {
                let param = param.trim().replace(' ', "");
                param
                    .strip_prefix("q=")
                    .and_then(|weight| weight.parse::<f32>().ok())
                    .is_some_and(|weight| weight <= 0.0)
            });
            (!refused).then_some(media)
        })
        .any(|media| {
            media == "*/*"
                || media == "application/*"
                || media == "application/json"
                || media.ends_with("+json")
        })
}

/// Middleware rejecting requests that cannot take a JSON response.
pub async fn require_json(request: Request, next: Next) -> Response {
    if !accepts_json(request.headers()) {
        debug!(
            "Rejecting {} {}: unacceptable Accept header",
            request.method(),
            request.uri().path()
        );
        return ErrorResponse::new(
            error_codes::NOT_ACCEPTABLE,
            "Only application/json responses are available",
        )
        .into_response();
    }
    next.run(request).await
}
