//! Ecoleta backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, ports,
//! and services; `inbound` adapts HTTP onto the ports; `outbound` backs
//! the ports with PostgreSQL and local file storage.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
