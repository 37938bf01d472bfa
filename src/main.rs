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

// Allow println! in main.rs for CLI user-facing output (validate, documents commands)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use book_library_server::api::openapi::spec_path;
use book_library_server::server::build_surface;
use book_library_server::{
    load_config_file, save_config_file, BookLibraryConfig, BookLibraryServer,
};

#[derive(Parser)]
#[command(name = "book-library-server")]
#[command(about = "Book library REST API with one OpenAPI document per API version")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },

    /// List the specification documents and the operations each one publishes
    Documents {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Only show the document with this name
        #[arg(long)]
        name: Option<String>,

        /// Print the rendered OpenAPI JSON instead of the operation list
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate {
            config,
            show_resolved,
        }) => validate_config(config, show_resolved),
        Some(Commands::Documents { config, name, json }) => list_documents(config, name, json),
        None => {
            // Default behavior: run the server
            run_server(cli.config, cli.port).await
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }
}

/// Load a `.env` file next to the config file, if there is one.
fn load_env_file(config_path: &Path) -> bool {
    let Some(config_dir) = config_path.parent() else {
        return false;
    };
    let env_file = config_dir.join(".env");
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

/// Run the book library server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Load .env before the config so interpolation can see its variables
    let env_file_loaded = load_env_file(&config_path);

    if !config_path.exists() {
        init_tracing("info");
        warn!(
            "Config file '{}' not found. Creating default configuration.",
            config_path.display()
        );

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut default_config = BookLibraryConfig::default();
        if let Some(port) = port_override {
            default_config.port = port;
            info!("Using command line port {port} in default configuration");
        }
        save_config_file(&default_config, &config_path)?;

        info!(
            "Default configuration created at: {}",
            config_path.display()
        );
    } else {
        // Load config first to get log level
        let config = load_config_file(&config_path)?;
        init_tracing(&config.log_level);
    }

    debug!("Debug logging is enabled");
    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }
    info!("Config file: {}", config_path.display());

    let server = BookLibraryServer::new(config_path, port_override)?;
    debug!("Server configuration: {:?}", server.config());
    server.run().await?;

    Ok(())
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf, show_resolved: bool) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    load_env_file(&config_path);

    match load_config_file(&config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();

            println!("Summary:");
            let versions: Vec<String> = config.api.versions.iter().map(|v| v.to_string()).collect();
            println!("  API versions: {}", versions.join(", "));
            println!("  Specifications: {}", config.api.spec_root);
            println!("  Swagger UI: {}", config.api.ui_path);
            match config.api.version_registry() {
                Ok(registry) => {
                    println!("  Documents:");
                    for name in registry.document_names() {
                        println!("    {}", spec_path(&config.api.spec_root, &name));
                    }
                }
                Err(e) => println!("  [WARN] {e}"),
            }

            if config.auth.uses_default_credentials() {
                println!();
                println!("[WARN] Basic authentication uses the default credentials");
            }

            if show_resolved {
                println!();
                println!("Resolved server settings:");
                println!("  Host: {}", config.host);
                println!("  Port: {}", config.port);
                println!("  Log Level: {}", config.log_level);
                println!("  Auth user: {}", config.auth.username);
                println!("  Auth realm: {}", config.auth.realm);
            }

            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}

/// Print each published document with its operations
fn list_documents(config_path: PathBuf, name: Option<String>, json: bool) -> Result<()> {
    load_env_file(&config_path);

    let config = if config_path.exists() {
        load_config_file(&config_path)?
    } else {
        eprintln!(
            "Config file '{}' not found; using defaults",
            config_path.display()
        );
        BookLibraryConfig::default()
    };

    let surface = build_surface(&config.api)?;
    if let Some(name) = &name {
        if surface.get(name).is_none() {
            anyhow::bail!(
                "Unknown document '{name}'. Published documents: {}",
                surface.registry().document_names().join(", ")
            );
        }
    }

    let selected = surface.published().filter(|published| match &name {
        Some(name) => *name == published.document.name,
        None => true,
    });
    for published in selected {
        if json {
            println!("{}", serde_json::to_string_pretty(&published.openapi)?);
            continue;
        }

        let document = &published.document;
        println!(
            "{} ({}, version {})",
            document.name,
            spec_path(&config.api.spec_root, &document.name),
            document.version
        );
        for op in &published.operations {
            println!("  {:<6} {:<40} {}", op.method, op.path, op.operation_id);
        }
        println!();
    }

    Ok(())
}
