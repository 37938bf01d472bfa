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

//! Assembly of the published document set.
//!
//! The generated OpenAPI description lists every operation the server knows.
//! Each published document is a copy of it with the document's own info
//! block, only the operations that belong to it, and the shared security
//! requirement.

use indexmap::IndexMap;
use log::debug;
use utoipa::openapi::OpenApi;

use super::document::{ApiDocument, DocumentMetadata, DocumentSet};
use super::operation::{belongs, ApiOperation, HttpMethod, OperationCatalog};
use crate::api::version::VersionRegistry;

/// File name served for every document under the spec root.
pub const SPEC_FILE_NAME: &str = "spec.json";

/// Public path of a document, e.g. `/specifications/{name}/spec.json`.
pub fn spec_path(spec_root: &str, document_name: &str) -> String {
    format!(
        "{}/{document_name}/{SPEC_FILE_NAME}",
        spec_root.trim_end_matches('/')
    )
}

/// A document together with the operations it lists.
#[derive(Debug, Clone)]
pub struct PublishedDocument {
    pub document: ApiDocument,
    pub operations: Vec<ApiOperation>,
    pub openapi: OpenApi,
}

/// The complete, immutable API surface computed at startup.
#[derive(Debug, Clone)]
pub struct ApiSurface {
    registry: VersionRegistry,
    documents: DocumentSet,
    catalog: OperationCatalog,
    published: IndexMap<String, PublishedDocument>,
}

impl ApiSurface {
    pub fn build(
        registry: VersionRegistry,
        metadata: &DocumentMetadata,
        catalog: OperationCatalog,
        generated: &OpenApi,
    ) -> Self {
        let documents = DocumentSet::build(&registry, metadata);

        for (path, item) in generated.paths.paths.iter() {
            for item_type in item.operations.keys() {
                let known = HttpMethod::from_path_item_type(item_type)
                    .and_then(|method| catalog.find(method, path))
                    .is_some();
                if !known {
                    debug!("Operation {item_type:?} {path} has no version metadata; publishing it in every document");
                }
            }
        }

        let published = documents
            .documents()
            .map(|document| {
                let openapi = render_document(document, &documents, &catalog, generated);
                let operations = catalog
                    .operations_for(&document.name)
                    .into_iter()
                    .cloned()
                    .collect();
                (
                    document.name.clone(),
                    PublishedDocument {
                        document: document.clone(),
                        operations,
                        openapi,
                    },
                )
            })
            .collect();

        Self {
            registry,
            documents,
            catalog,
            published,
        }
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn catalog(&self) -> &OperationCatalog {
        &self.catalog
    }

    pub fn get(&self, document_name: &str) -> Option<&PublishedDocument> {
        self.published.get(document_name)
    }

    /// Published documents in version order.
    pub fn published(&self) -> impl Iterator<Item = &PublishedDocument> {
        self.published.values()
    }

    pub fn len(&self) -> usize {
        self.published.len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.is_empty()
    }
}

fn render_document(
    document: &ApiDocument,
    documents: &DocumentSet,
    catalog: &OperationCatalog,
    generated: &OpenApi,
) -> OpenApi {
    let mut openapi = generated.clone();
    openapi.info = document.info();

    for (path, item) in openapi.paths.paths.iter_mut() {
        item.operations.retain(|item_type, _| {
            match HttpMethod::from_path_item_type(item_type).and_then(|m| catalog.find(m, path)) {
                Some(op) => belongs(&document.name, op),
                None => true,
            }
        });
    }
    openapi
        .paths
        .paths
        .retain(|_, item| !item.operations.is_empty());

    let components = openapi.components.get_or_insert_with(Default::default);
    if let Some(scheme) = documents.security_schemes().get(&document.security.scheme) {
        components.add_security_scheme(scheme.name.clone(), scheme.to_openapi());
    }
    openapi.security = Some(vec![document.security.to_openapi()]);

    openapi
}
