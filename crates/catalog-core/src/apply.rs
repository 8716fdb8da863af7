//! Functional-boundary apply function
//!
//! `apply()` is the canonical entry point for catalog mutations.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either the mutation succeeds and a valid new store is
//!   returned, or it fails and the caller's pre-call state is untouched
//! - **No panics**: invalid input returns typed errors
//! - **Validated output**: every returned store passes `validate_store`
//!
//! ## Logging Ownership
//!
//! `apply()` owns the start/end/error events for a mutation, each tagged with
//! the request and trace ids of its `RequestContext`. A failure is logged as
//! an `ExError` carrying those ids. The ops it calls only emit
//! `tracing::debug!`.
//!
//! ## Example
//!
//! ```
//! use catalog_core::{apply, Mutation, Store};
//! use catalog_core::model::ClusterId;
//! use catalog_core::ops::NewCluster;
//! use catalog_core_types::RequestContext;
//!
//! let ctx = RequestContext::new();
//! let mutation = Mutation::ClusterCreate(NewCluster {
//!     id: Some(ClusterId::from("c1")),
//!     name: "h2query".to_string(),
//!     user: "genie".to_string(),
//!     version: "1.0".to_string(),
//!     ..Default::default()
//! });
//!
//! let state = apply(Store::new(), mutation, &ctx).unwrap();
//! assert!(state.contains_cluster(&ClusterId::from("c1")));
//! ```

use catalog_core_types::RequestContext;

use crate::errors::Result;
use crate::model::{ClusterId, CommandId};
use crate::mutations::Mutation;
use crate::ops::{association_ops, lifecycle_ops, Store};
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply a mutation to a store, returning the new store state
///
/// Ownership of `state` moves in. On error the moved-in store is dropped;
/// callers that need the previous state afterwards keep a clone.
///
/// # Errors
///
/// Returns the error of the underlying operation (see `CatalogError`), or an
/// invariant violation if the resulting store fails validation.
pub fn apply(mut state: Store, mutation: Mutation, ctx: &RequestContext) -> Result<Store> {
    let op = mutation.op_name();
    log_op_start!(
        op,
        ctx,
        cluster_id = mutation.cluster_id().map(ClusterId::as_str),
        command_id = mutation.command_id().map(CommandId::as_str)
    );
    let start = std::time::Instant::now();

    let result =
        apply_mutation(&mut state, mutation).and_then(|()| validation::validate_store(&state));

    match result {
        Ok(()) => {
            log_op_end!(op, ctx, duration_ms = start.elapsed().as_millis() as u64);
            Ok(state)
        }
        Err(err) => {
            log_op_error!(
                op,
                ctx,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn apply_mutation(state: &mut Store, mutation: Mutation) -> Result<()> {
    match mutation {
        Mutation::ClusterCreate(new) => lifecycle_ops::create_cluster(state, new).map(drop),
        Mutation::ClusterSetStatus { cluster_id, status } => {
            lifecycle_ops::update_cluster_status(state, &cluster_id, status)
        }
        Mutation::ClusterDelete { cluster_id } => {
            lifecycle_ops::delete_cluster(state, &cluster_id).map(drop)
        }
        Mutation::CommandCreate(new) => lifecycle_ops::create_command(state, new).map(drop),
        Mutation::CommandSetStatus { command_id, status } => {
            lifecycle_ops::update_command_status(state, &command_id, status)
        }
        Mutation::CommandDelete { command_id } => {
            lifecycle_ops::delete_command(state, &command_id).map(drop)
        }
        Mutation::SetSetupFile {
            cluster_id,
            setup_file,
        } => association_ops::set_setup_file(state, &cluster_id, setup_file),
        Mutation::ReplaceConfigs {
            cluster_id,
            configs,
        } => association_ops::replace_configs(state, &cluster_id, configs),
        Mutation::ReplaceDependencies {
            cluster_id,
            dependencies,
        } => association_ops::replace_dependencies(state, &cluster_id, dependencies),
        Mutation::ReplaceTags { cluster_id, tags } => {
            association_ops::replace_tags(state, &cluster_id, tags)
        }
        Mutation::ReplaceCommands {
            cluster_id,
            commands,
        } => association_ops::replace_commands(state, &cluster_id, commands),
        Mutation::AddCommand {
            cluster_id,
            command_id,
        } => association_ops::add_command(state, &cluster_id, &command_id),
        Mutation::RemoveCommand {
            cluster_id,
            command_id,
        } => association_ops::remove_command(state, &cluster_id, &command_id),
        Mutation::RemoveAllCommands { cluster_id } => {
            association_ops::remove_all_commands(state, &cluster_id)
        }
    }
}
