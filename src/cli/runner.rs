//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cursor::{CursorPagination, CursorPaginationSystem};
use crate::error::Result;
use crate::links::{PageLinks, PageMetadata};
use crate::loader::load_registry;
use crate::offset::OffsetPaginationSystem;
use crate::pagination::{unpaged, Pagination, SharedControls, UnpagedControls};
use crate::parameters::PaginationParameters;
use crate::system::PaginationSystemRegistry;
use serde_json::{json, Value};
use std::sync::Arc;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let registry = self.registry()?;

        let output = match &self.cli.command {
            Commands::Resolve { query } => resolve(&registry, query)?,
            Commands::Links {
                url,
                has_next,
                next_cursor,
            } => links(&registry, url, *has_next, next_cursor.clone())?,
            Commands::Systems => systems(&registry),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Load the registry named on the command line, or the built-in one
    fn registry(&self) -> Result<PaginationSystemRegistry> {
        match &self.cli.registry {
            Some(path) => load_registry(path),
            None => Ok(PaginationSystemRegistry::with_defaults()),
        }
    }
}

/// Resolve a query string and describe the result
pub(crate) fn resolve(registry: &PaginationSystemRegistry, query: &str) -> Result<Value> {
    let parameters = PaginationParameters::from_query(query);
    let selected = registry.select(&parameters);
    let pagination = match selected {
        Some(system) => system.create(&parameters)?,
        None => unpaged(),
    };

    Ok(describe(
        selected.map(|system| system.name()),
        pagination.as_ref(),
    ))
}

/// Resolve a URL and build metadata and links for the page it requests
pub(crate) fn links(
    registry: &PaginationSystemRegistry,
    url: &str,
    has_next: bool,
    next_cursor: Option<String>,
) -> Result<Value> {
    let base = Url::parse(url)?;
    let parameters = PaginationParameters::from_query(base.query().unwrap_or_default());
    let pagination = registry.resolve(&parameters)?;

    let controls: SharedControls = if pagination.is_unpaged() {
        Arc::new(UnpagedControls)
    } else if pagination.as_any().is::<CursorPagination>() {
        Arc::new(CursorPaginationSystem::controls_for(
            pagination.as_ref(),
            next_cursor,
        ))
    } else {
        Arc::new(OffsetPaginationSystem::controls_for(
            pagination.as_ref(),
            has_next,
        ))
    };

    let page = PageMetadata::of(pagination.as_ref());
    let links = PageLinks::from_controls(&base, controls.as_ref());

    Ok(json!({
        "page": page,
        "_links": links,
    }))
}

/// List systems in selection order
pub(crate) fn systems(registry: &PaginationSystemRegistry) -> Value {
    registry
        .systems()
        .map(|system| {
            json!({
                "name": system.name(),
                "priority": system.priority(),
            })
        })
        .collect()
}

fn describe(system: Option<&str>, pagination: &dyn Pagination) -> Value {
    json!({
        "system": system,
        "unpaged": pagination.is_unpaged(),
        "limit": pagination.limit(),
        "reference": pagination.reference(),
        "first_page": pagination.is_first_page(),
        "parameters": pagination.parameters(),
    })
}
