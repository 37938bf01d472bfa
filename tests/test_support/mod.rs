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

//! Helpers shared by the integration tests.

#![allow(clippy::unwrap_used, dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use book_library_server::api::ApiVersion;
use book_library_server::{BookLibraryServerBuilder, LibraryStore};
use serde_json::Value;
use tower::ServiceExt;

pub const USERNAME: &str = "tester";
pub const PASSWORD: &str = "s3cret";

/// George RR Martin in the sample data.
pub const SAMPLE_AUTHOR_ID: &str = "d28888e9-2ba9-473a-a40f-e38cb54f9b35";
/// "A Game of Thrones", written by the sample author.
pub const SAMPLE_BOOK_ID: &str = "5b1c2b4d-48c7-402a-80c3-cc796ad49c6b";
/// Stephen Fry in the sample data.
pub const OTHER_AUTHOR_ID: &str = "da2fd609-d754-4feb-8acd-c4f9ff13ba96";

pub const V1_DOCUMENT: &str = "book-library-api-specification-v1.0";
pub const V2_DOCUMENT: &str = "book-library-api-specification-v2.0";

/// Router with sample data serving the given versions.
pub fn router_for(versions: &[ApiVersion]) -> Router {
    BookLibraryServerBuilder::new()
        .with_versions(versions.iter().copied())
        .with_credentials(USERNAME, PASSWORD)
        .with_store(LibraryStore::with_sample_data())
        .build()
        .unwrap()
        .router()
        .unwrap()
}

/// Router with sample data serving 1.0 and 2.0.
pub fn test_router() -> Router {
    router_for(&[ApiVersion::V1, ApiVersion::V2])
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// An authenticated request with an optional JSON body.
pub fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(USERNAME, PASSWORD));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// An unauthenticated GET.
pub fn anonymous_get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request; the body is parsed as JSON, or `Null` when it is not.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

/// Send a request and return the raw body, for non-JSON responses.
pub async fn send_text(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Fetch a published document.
pub async fn fetch_document(router: &Router, name: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(
        router,
        anonymous_get(&format!("/specifications/{name}/spec.json")),
    )
    .await;
    (status, body)
}
