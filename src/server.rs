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

use anyhow::Result;
use axum::{
    extract::Extension,
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::openapi::{
    belongs, route_table, spec_path, ApiDoc, ApiSurface, OperationGroup, SurfaceError,
};
use crate::api::shared::handlers::SurfaceContext;
use crate::api::shared::negotiation::require_json;
use crate::api::{self, ApiVersion};
use crate::auth::require_basic_auth;
use crate::config::{load_config_file, ApiSettings, BookLibraryConfig};
use crate::store::LibraryStore;

pub struct BookLibraryServer {
    config: BookLibraryConfig,
    config_file_path: Option<String>,
    store: LibraryStore,
}

impl BookLibraryServer {
    /// Create a new server from a configuration file
    pub fn new(config_path: PathBuf, port: Option<u16>) -> Result<Self> {
        let mut config = load_config_file(&config_path)?;
        if let Some(port) = port {
            config.port = port;
        }
        config.validate()?;

        let store = if config.seed_sample_data {
            LibraryStore::with_sample_data()
        } else {
            LibraryStore::new()
        };

        Ok(Self {
            config,
            config_file_path: Some(config_path.to_string_lossy().to_string()),
            store,
        })
    }

    /// Create a server from an already validated configuration (for use with builder)
    pub fn from_config(
        config: BookLibraryConfig,
        store: LibraryStore,
        config_file_path: Option<String>,
    ) -> Self {
        Self {
            config,
            config_file_path,
            store,
        }
    }

    pub fn config(&self) -> &BookLibraryConfig {
        &self.config
    }

    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    /// Build the complete application router.
    ///
    /// Fails when the configuration registers no API version.
    pub fn router(&self) -> Result<Router, SurfaceError> {
        let surface = Arc::new(build_surface(&self.config.api)?);
        Ok(build_router(&self.config, surface, self.store.clone()))
    }

    #[allow(clippy::print_stdout)]
    pub async fn run(self) -> Result<()> {
        println!("Starting Book Library Server");
        if let Some(config_file) = &self.config_file_path {
            println!("  Config file: {config_file}");
        }
        println!("  API Port: {}", self.config.port);
        println!(
            "  Log level: {}",
            std::env::var("RUST_LOG").unwrap_or_else(|_| self.config.log_level.clone())
        );
        info!("Initializing Book Library Server");

        if self.config.auth.uses_default_credentials() {
            warn!("Basic authentication uses the default credentials. Set auth.username and auth.password in the config file.");
        }

        let surface = Arc::new(build_surface(&self.config.api)?);
        for published in surface.published() {
            info!(
                "Publishing '{}' with {} operation(s) at {}",
                published.document.name,
                published.operations.len(),
                spec_path(&self.config.api.spec_root, &published.document.name)
            );
        }
        info!(
            "Loaded {} author(s) into the library store",
            self.store.author_count().await
        );

        let app = build_router(&self.config, surface, self.store.clone());

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting web API on {addr}");
        info!("Swagger UI available at http://{addr}{}/", self.config.api.ui_path);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutting down Book Library Server");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
}

/// Compute the published documents for the configured versions.
pub fn build_surface(settings: &ApiSettings) -> Result<ApiSurface, SurfaceError> {
    let registry = settings.version_registry()?;
    registry.ensure_servable()?;
    Ok(ApiSurface::build(
        registry,
        &settings.metadata(),
        route_table(),
        &ApiDoc::openapi(),
    ))
}

/// Version-specific route modules with their mount points and metadata.
fn versioned_modules() -> Vec<(ApiVersion, OperationGroup, Router)> {
    vec![
        (ApiVersion::V1, api::v1::operation_group(), api::build_v1_router()),
        (ApiVersion::V2, api::v2::operation_group(), api::build_v2_router()),
    ]
}

/// Whether any operation of `group` is published in one of the documents.
fn is_published(group: &OperationGroup, document_names: &[String]) -> bool {
    group
        .operations()
        .iter()
        .any(|op| document_names.iter().any(|name| belongs(name, op)))
}

// `SwaggerUi` only takes `'static` urls; a router is built once per server.
fn leak(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

/// Assemble the application router.
///
/// A route module is mounted when at least one of its operations is
/// published. API routes sit behind content negotiation and basic authentication.
/// Health, documents and the Swagger UI are public.
pub fn build_router(
    config: &BookLibraryConfig,
    surface: Arc<ApiSurface>,
    store: LibraryStore,
) -> Router {
    let settings = &config.api;

    let registry = surface.registry();
    let document_names = registry.document_names();
    let modules = versioned_modules();

    for version in registry.all_versions() {
        if !modules.iter().any(|(mounted, _, _)| mounted == version) {
            warn!("API version {version} is registered but has no routes of its own");
        }
    }

    let mut api_router = api::unversioned::build_unversioned_router();
    for (version, group, router) in modules {
        if is_published(&group, &document_names) {
            api_router = api_router.nest(&format!("/{}", version.path_segment()), router);
        } else {
            debug!("Not mounting {} routes: no registered document lists them", group.name());
        }
    }

    let api_router = api_router
        .layer(Extension(store))
        .layer(Extension(SurfaceContext::new(
            surface.clone(),
            settings.spec_root.clone(),
        )))
        .route_layer(middleware::from_fn(require_json))
        .route_layer(middleware::from_fn_with_state(
            Arc::new(config.auth.clone()),
            require_basic_auth,
        ));

    let swagger = surface.published().fold(
        SwaggerUi::new(settings.ui_path.clone()),
        |ui, published| {
            let label = leak(published.document.version.group_name());
            let path = leak(spec_path(&settings.spec_root, &published.document.name));
            ui.url(Url::new(label, path), published.openapi.clone())
        },
    );

    let ui_path = settings.ui_path.clone();
    Router::new()
        .merge(api::unversioned::build_health_router())
        .nest("/api", api_router)
        .merge(swagger)
        .route(
            "/",
            get(move || {
                let target = format!("{ui_path}/");
                async move { Redirect::temporary(&target) }
            }),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
        )
        .layer(CorsLayer::permissive())
}
