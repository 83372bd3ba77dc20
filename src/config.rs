//! Command-line configuration.

use crate::interactive::session::{DEFAULT_PAGE_SIZE, SessionOptions};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use clap::Parser;

/// Interactively scan or query DynamoDB tables.
#[derive(Clone, Debug, Parser, PartialEq)]
#[command(name = "dynamodb-query", version, about)]
pub struct Cli {
    /// AWS region to connect to; defaults to the environment's region.
    #[arg(long)]
    pub region: Option<String>,

    /// Override the service URL, e.g. `http://localhost:8000` for DynamoDB Local.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum number of items evaluated per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(i32).range(1..))]
    pub page_size: i32,

    /// Read this table instead of picking one interactively.
    #[arg(long)]
    pub table_name: Option<String>,

    /// Send empty key values as NULL.
    #[arg(long)]
    pub convert_empty_values: bool,

    /// Disable coloured output (also respects the `NO_COLOR` environment variable).
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Load the AWS configuration, applying the region and endpoint overrides.
    pub async fn sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }

    /// Settings of the interactive session.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            table_name: self.table_name.clone(),
            page_size: self.page_size,
            convert_empty_values: self.convert_empty_values,
        }
    }
}
