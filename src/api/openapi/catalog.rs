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

//! The route table: version metadata for every operation the server exposes.

use super::operation::OperationCatalog;
use crate::api::{unversioned, v1, v2};

/// Collect the operation groups of every API module.
pub fn route_table() -> OperationCatalog {
    let catalog = OperationCatalog::new()
        .with_group(v1::operation_group())
        .with_group(v2::operation_group());

    unversioned::operation_groups()
        .into_iter()
        .fold(catalog, OperationCatalog::with_group)
}
