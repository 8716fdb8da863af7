use crate::errors::{CatalogError, Result};
use crate::ops::Store;

use super::invariants;

/// Validate every cluster/command association in the store
///
/// Checks, in order:
///
/// 1. Every command a cluster lists exists, and every back-reference points
///    at an existing cluster
/// 2. No cluster lists the same command twice
/// 3. Both sides of every association agree
///
/// # Errors
///
/// Returns the first violation encountered. For exhaustive reporting, call
/// the individual invariant functions directly.
pub fn validate_store(store: &Store) -> Result<()> {
    if let Some((cluster_id, command_id)) = invariants::find_unknown_command_refs(store).first() {
        return Err(CatalogError::UnknownCommandRef {
            cluster_id: cluster_id.to_string(),
            command_id: command_id.to_string(),
        });
    }

    if let Some((cluster_id, command_id)) = invariants::find_unknown_cluster_refs(store).first() {
        return Err(CatalogError::UnknownClusterRef {
            cluster_id: cluster_id.to_string(),
            command_id: command_id.to_string(),
        });
    }

    if let Some((cluster_id, command_id)) = invariants::find_duplicate_commands(store).first() {
        return Err(CatalogError::DuplicateCommandEntry {
            cluster_id: cluster_id.to_string(),
            command_id: command_id.to_string(),
        });
    }

    if let Some((cluster_id, command_id, listed_by_cluster)) =
        invariants::find_asymmetric_links(store).first()
    {
        let cluster_id = cluster_id.to_string();
        let command_id = command_id.to_string();
        return Err(if *listed_by_cluster {
            CatalogError::MissingBackReference {
                cluster_id,
                command_id,
            }
        } else {
            CatalogError::DanglingBackReference {
                cluster_id,
                command_id,
            }
        });
    }

    Ok(())
}
