use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;

use crate::config::{load_config, ConfigOverrides};
use commands::{check, list, serve};

#[derive(Parser)]
#[command(name = "asset-viewer")]
#[command(about = "Digital asset catalog viewer: host, API and catalog tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a catalog
#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (YAML or JSON) to use instead of the built-in list
    ///
    /// Format:
    ///   assets:
    ///     - { name: Bitget, slug: bitget, image: /images/bitget-circle.png, usd: 10000 }
    #[arg(short, long, env = "ASSET_VIEWER_CATALOG_PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Host the compiled viewer and the catalog API
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "ASSET_VIEWER_BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the built viewer (index.html, wasm, images)
        #[arg(short, long, env = "ASSET_VIEWER_STATIC_DIR")]
        static_dir: Option<PathBuf>,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Print the catalog in display order
    List {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Validate a catalog and check that every image exists
    Check {
        /// Directory the image paths are resolved against
        #[arg(short, long, env = "ASSET_VIEWER_STATIC_DIR")]
        static_dir: Option<PathBuf>,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir, catalog } => {
                let config = load_config()?.with_overrides(ConfigOverrides {
                    bind_address,
                    static_dir,
                    catalog_path: catalog.catalog,
                });
                serve(config).await?;
            }
            Commands::List { catalog, format } => {
                let config = load_config()?.with_overrides(ConfigOverrides {
                    catalog_path: catalog.catalog,
                    ..Default::default()
                });
                list(&config, format)?;
            }
            Commands::Check { static_dir, catalog } => {
                let config = load_config()?.with_overrides(ConfigOverrides {
                    static_dir,
                    catalog_path: catalog.catalog,
                    ..Default::default()
                });
                check(&config)?;
            }
        }
        Ok(())
    }
}
