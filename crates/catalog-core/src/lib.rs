//! Catalog Core - in-memory cluster/command catalog kernel
//!
//! This crate models the Cluster aggregate of a resource-scheduling catalog
//! and the Command aggregates it can run:
//! - Cluster and Command models with reference sets and an ordered command list
//! - An arena store addressing aggregates by id
//! - The association consistency engine keeping `Cluster.commands` and
//!   `Command.clusters` mutually consistent
//! - Invariant scanning and store validation
//! - Load-graph shaped read projections
//!
//! Persistence, schema and query surfaces live outside this crate.

pub mod apply;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod mutations;
pub mod ops;
pub mod rules;

#[doc(hidden)]
pub use catalog_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use errors::{CatalogError, ExError, ExErrorKind, Result};
pub use model::{Cluster, ClusterId, Command, CommandId, FileRef, LoadGraph, TagRef};
pub use mutations::Mutation;
pub use ops::Store;
