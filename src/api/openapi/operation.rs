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

//! Operations, their version sets, and document membership.
//!
//! An [`ApiOperation`] is one routable unit (method + path). Its versions come
//! from two levels: the versions it declares itself, and the versions its
//! [`OperationGroup`] implements. Declared versions always win; the two sets
//! are never merged.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use utoipa::openapi::PathItemType;

use crate::api::version::{document_name, ApiVersion};

/// HTTP methods exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Map an OpenAPI path item type back to a method we route.
    pub fn from_path_item_type(item: &PathItemType) -> Option<Self> {
        match item {
            PathItemType::Get => Some(HttpMethod::Get),
            PathItemType::Post => Some(HttpMethod::Post),
            PathItemType::Put => Some(HttpMethod::Put),
            PathItemType::Patch => Some(HttpMethod::Patch),
            PathItemType::Delete => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One routable unit of API surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOperation {
    pub method: HttpMethod,
    /// OpenAPI path template, e.g. `/api/v1/authors/{authorId}`.
    pub path: String,
    pub operation_id: String,
    /// Versions attached to the operation itself.
    pub declared: BTreeSet<ApiVersion>,
    /// Versions attached to the enclosing group.
    pub implemented: BTreeSet<ApiVersion>,
}

impl ApiOperation {
    pub fn new(method: HttpMethod, path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            operation_id: operation_id.into(),
            declared: BTreeSet::new(),
            implemented: BTreeSet::new(),
        }
    }

    pub fn declares(mut self, versions: impl IntoIterator<Item = ApiVersion>) -> Self {
        self.declared.extend(versions);
        self
    }

    pub fn implements(mut self, versions: impl IntoIterator<Item = ApiVersion>) -> Self {
        self.implemented.extend(versions);
        self
    }

    pub fn matches(&self, method: HttpMethod, path: &str) -> bool {
        self.method == method && self.path == path
    }
}

/// The versions an operation is published under.
///
/// Returns the declared set if non-empty, otherwise the implemented set. An
/// empty result means the operation is unversioned.
pub fn effective_versions(op: &ApiOperation) -> &BTreeSet<ApiVersion> {
    if op.declared.is_empty() {
        &op.implemented
    } else {
        &op.declared
    }
}

/// Whether `op` is listed in the document named `document`.
///
/// Unversioned operations belong to every document.
pub fn belongs(document: &str, op: &ApiOperation) -> bool {
    let versions = effective_versions(op);
    if versions.is_empty() {
        return true;
    }
    versions.iter().any(|v| document_name(v) == document)
}

/// A group of operations sharing an implemented version set (a "controller").
#[derive(Debug, Clone)]
pub struct OperationGroup {
    name: String,
    implemented: BTreeSet<ApiVersion>,
    operations: Vec<ApiOperation>,
}

impl OperationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implemented: BTreeSet::new(),
            operations: Vec::new(),
        }
    }

    /// Set the versions this group implements.
    ///
    /// Applies to operations added before and after this call.
    pub fn implements(mut self, versions: impl IntoIterator<Item = ApiVersion>) -> Self {
        self.implemented.extend(versions);
        for op in &mut self.operations {
            op.implemented = self.implemented.clone();
        }
        self
    }

    /// Add an operation that inherits the group's versions.
    pub fn operation(
        self,
        method: HttpMethod,
        path: impl Into<String>,
        operation_id: impl Into<String>,
    ) -> Self {
        self.declared_operation(method, path, operation_id, std::iter::empty::<ApiVersion>())
    }

    /// Add an operation with its own declared versions.
    pub fn declared_operation(
        mut self,
        method: HttpMethod,
        path: impl Into<String>,
        operation_id: impl Into<String>,
        declared: impl IntoIterator<Item = ApiVersion>,
    ) -> Self {
        let op = ApiOperation::new(method, path, operation_id)
            .declares(declared)
            .implements(self.implemented.iter().copied());
        self.operations.push(op);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[ApiOperation] {
        &self.operations
    }
}

/// Every operation discovered from the route table.
#[derive(Debug, Clone, Default)]
pub struct OperationCatalog {
    operations: Vec<ApiOperation>,
}

impl OperationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: OperationGroup) -> Self {
        self.operations.extend(group.operations);
        self
    }

    pub fn with_operation(mut self, op: ApiOperation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&ApiOperation> {
        self.operations.iter().find(|op| op.matches(method, path))
    }

    pub fn operations(&self) -> &[ApiOperation] {
        &self.operations
    }

    /// Operations that belong to the named document, in catalog order.
    pub fn operations_for(&self, document: &str) -> Vec<&ApiOperation> {
        self.operations
            .iter()
            .filter(|op| belongs(document, op))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
