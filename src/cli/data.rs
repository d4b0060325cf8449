//! Data source command.

use std::path::Path;

use crate::cli::document;
use crate::core::data_source::DataSourceHandler;
use crate::core::provider::Provider;
use crate::error::Result;

/// Look up a data source and print the filled-in document.
pub async fn execute(provider: &Provider, type_name: &str, config: Option<&Path>) -> Result<()> {
    let handler = provider.data_source(type_name)?;
    let config = document::read(config)?;
    let state = handler.read(config).await?;
    document::write(&state)
}
