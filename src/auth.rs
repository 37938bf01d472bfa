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

//! HTTP basic authentication for API routes.
//!
//! The credentials come from the `auth` section of the configuration. Every
//! API request must carry them; documentation and health endpoints are
//! mounted outside this layer.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::sync::Arc;

use crate::api::shared::error::{error_codes, ErrorResponse};
use crate::config::AuthSettings;

/// Credentials carried by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Parse an `Authorization: Basic ...` header.
///
/// Returns `None` for a missing header, another scheme, bad base64, non-UTF-8
/// content or a payload without a colon.
pub fn parse_basic_credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Compares without short-circuiting on the first differing byte.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let diff = a
        .iter()
        .zip(b)
        .fold(a.len() ^ b.len(), |acc, (x, y)| acc | usize::from(x ^ y));
    diff == 0
}

fn challenge(realm: &str) -> Response {
    let mut response = ErrorResponse::new(
        error_codes::UNAUTHORIZED,
        "Valid basic authentication credentials are required",
    )
    .into_response();

    let value = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
    response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
    response
}

/// Middleware rejecting requests without valid credentials.
pub async fn require_basic_auth(
    State(auth): State<Arc<AuthSettings>>,
    request: Request,
    next: Next,
) -> Response {
    match parse_basic_credentials(request.headers()) {
        Some(credentials)
            if constant_time_eq(&credentials.username, &auth.username)
                & constant_time_eq(&credentials.password, &auth.password) =>
        {
            next.run(request).await
        }
        Some(credentials) => {
            debug!(
                "Rejected credentials for user '{}' on {}",
                credentials.username,
                request.uri().path()
            );
            challenge(&auth.realm)
        }
        None => {
            debug!("Missing basic credentials on {}", request.uri().path());
            challenge(&auth.realm)
        }
    }
}
