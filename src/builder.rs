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

use crate::api::version::ApiVersion;
use crate::config::{BookLibraryConfig, ValidationError};
use crate::server::BookLibraryServer;
use crate::store::LibraryStore;

/// Builder for creating a BookLibraryServer instance programmatically
pub struct BookLibraryServerBuilder {
    config: BookLibraryConfig,
    store: Option<LibraryStore>,
}

impl Default for BookLibraryServerBuilder {
    fn default() -> Self {
        Self {
            config: BookLibraryConfig {
                host: "127.0.0.1".to_string(),
                ..BookLibraryConfig::default()
            },
            store: None,
        }
    }
}

impl BookLibraryServerBuilder {
    /// Create a new BookLibraryServerBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve on a specific port
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Replace the registered API versions
    pub fn with_versions(mut self, versions: impl IntoIterator<Item = ApiVersion>) -> Self {
        self.config.api.versions = versions.into_iter().collect();
        self
    }

    /// Set the basic-authentication credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config.auth.username = username.into();
        self.config.auth.password = password.into();
        self
    }

    /// Set where documents and the Swagger UI are served
    pub fn with_docs_paths(
        mut self,
        spec_root: impl Into<String>,
        ui_path: impl Into<String>,
    ) -> Self {
        self.config.api.spec_root = spec_root.into();
        self.config.api.ui_path = ui_path.into();
        self
    }

    /// Use a pre-populated store instead of the configured seed data
    pub fn with_store(mut self, store: LibraryStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and build the server
    pub fn build(self) -> Result<BookLibraryServer, ValidationError> {
        self.config.validate()?;

        let store = match self.store {
            Some(store) => store,
            None if self.config.seed_sample_data => LibraryStore::with_sample_data(),
            None => LibraryStore::new(),
        };

        Ok(BookLibraryServer::from_config(self.config, store, None))
    }
}
