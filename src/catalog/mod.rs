//! Catalog layer: route table, genre mapping, enrichment, and dispatch.
//!
//! [`CatalogService`] drives the whole request flow: validate the route,
//! consult the response cache, fetch the raw listing upstream, enrich each
//! item with its IMDb ID, then cache and return the formatted page.

pub mod enrich;
pub mod format;
pub mod genres;
pub mod routes;
pub mod service;

pub use format::ListingItem;
pub use service::{CatalogError, CatalogService};
