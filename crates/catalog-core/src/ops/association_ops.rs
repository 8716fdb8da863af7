//! Association consistency engine
//!
//! Every mutation of a cluster's relations goes through this module. The
//! command list and each command's `clusters` back-reference set are updated
//! together, so after any call `m ∈ c.commands ⇔ c ∈ m.clusters` holds.
//!
//! All validation runs before the first write. A failing call leaves the
//! store exactly as it was.

use std::collections::{BTreeSet, HashSet};

use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::{Cluster, ClusterId, CommandId, FileRef, TagRef};

/// Clear a reference set and refill it from `members` (absent ≡ empty)
fn replace_members<T: Ord>(target: &mut BTreeSet<T>, members: Option<BTreeSet<T>>) {
    target.clear();
    if let Some(members) = members {
        target.extend(members);
    }
}

fn replace_reference_set<T, F>(
    store: &mut Store,
    cluster_id: &ClusterId,
    members: Option<BTreeSet<T>>,
    select: F,
) -> Result<()>
where
    T: Ord,
    F: FnOnce(&mut Cluster) -> &mut BTreeSet<T>,
{
    let cluster = store.get_cluster_mut(cluster_id)?;
    replace_members(select(cluster), members);
    cluster.touch();
    Ok(())
}

/// Replace the cluster's configuration files
///
/// Previous membership is discarded even when `configs` is `None`.
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn replace_configs(
    store: &mut Store,
    cluster_id: &ClusterId,
    configs: Option<BTreeSet<FileRef>>,
) -> Result<()> {
    replace_reference_set(store, cluster_id, configs, |c| &mut c.configs)?;
    tracing::debug!(cluster_id = %cluster_id, "configs replaced");
    Ok(())
}

/// Replace the cluster's dependency files
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn replace_dependencies(
    store: &mut Store,
    cluster_id: &ClusterId,
    dependencies: Option<BTreeSet<FileRef>>,
) -> Result<()> {
    replace_reference_set(store, cluster_id, dependencies, |c| &mut c.dependencies)?;
    tracing::debug!(cluster_id = %cluster_id, "dependencies replaced");
    Ok(())
}

/// Replace the cluster's tags
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn replace_tags(
    store: &mut Store,
    cluster_id: &ClusterId,
    tags: Option<BTreeSet<TagRef>>,
) -> Result<()> {
    replace_reference_set(store, cluster_id, tags, |c| &mut c.tags)?;
    tracing::debug!(cluster_id = %cluster_id, "tags replaced");
    Ok(())
}

/// Set or clear the cluster's setup file
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn set_setup_file(
    store: &mut Store,
    cluster_id: &ClusterId,
    setup_file: Option<FileRef>,
) -> Result<()> {
    let cluster = store.get_cluster_mut(cluster_id)?;
    cluster.setup_file = setup_file;
    cluster.touch();
    Ok(())
}

/// Replace the cluster's commands wholesale
///
/// Every current command first loses its back-reference to this cluster and
/// the list is cleared. Then the list becomes `commands` in the given order
/// and every listed command gains the back-reference. Commands present in
/// both the old and the new list go through the full remove/add pair.
///
/// `None` clears all commands.
///
/// # Errors
///
/// * `ClusterNotFound` - If the cluster doesn't exist
/// * `DuplicateCommandsInList` - If `commands` names the same id twice
/// * `CommandNotFound` - If `commands` names an id missing from the store
pub fn replace_commands(
    store: &mut Store,
    cluster_id: &ClusterId,
    commands: Option<Vec<CommandId>>,
) -> Result<()> {
    store.get_cluster(cluster_id)?;

    if let Some(ref list) = commands {
        let mut seen = HashSet::with_capacity(list.len());
        for command_id in list {
            if !seen.insert(command_id) {
                return Err(CatalogError::DuplicateCommandsInList {
                    cluster_id: cluster_id.to_string(),
                    command_id: command_id.to_string(),
                });
            }
        }
        for command_id in list {
            store.get_command(command_id)?;
        }
    }

    let (cluster, arena) = store.cluster_with_commands_mut(cluster_id)?;

    for command_id in &cluster.commands {
        match arena.get_mut(command_id) {
            Some(command) => {
                command.remove_cluster_ref(cluster_id);
                command.touch();
            }
            None => tracing::debug!(
                cluster_id = %cluster_id,
                command_id = %command_id,
                "skipping back-reference teardown for command missing from store"
            ),
        }
    }
    cluster.commands.clear();

    if let Some(list) = commands {
        cluster.commands = list;
        for command_id in &cluster.commands {
            if let Some(command) = arena.get_mut(command_id) {
                command.add_cluster_ref(cluster_id.clone());
                command.touch();
            }
        }
    }
    cluster.touch();

    tracing::debug!(
        cluster_id = %cluster_id,
        commands_len = cluster.commands.len(),
        "commands replaced"
    );
    Ok(())
}

/// Append a command to the end of the cluster's command list
///
/// # Errors
///
/// * `ClusterNotFound` - If the cluster doesn't exist
/// * `DuplicateAssociation` - If the command is already listed
/// * `CommandNotFound` - If the command doesn't exist
pub fn add_command(
    store: &mut Store,
    cluster_id: &ClusterId,
    command_id: &CommandId,
) -> Result<()> {
    let (cluster, arena) = store.cluster_with_commands_mut(cluster_id)?;

    if cluster.has_command(command_id) {
        return Err(CatalogError::DuplicateAssociation {
            cluster_id: cluster_id.to_string(),
            command_id: command_id.to_string(),
        });
    }

    let command = arena
        .get_mut(command_id)
        .ok_or_else(|| CatalogError::CommandNotFound {
            command_id: command_id.to_string(),
        })?;

    cluster.push_command(command_id.clone());
    cluster.touch();
    command.add_cluster_ref(cluster_id.clone());
    command.touch();

    tracing::debug!(cluster_id = %cluster_id, command_id = %command_id, "command added");
    Ok(())
}

/// Remove a command from the cluster, keeping the order of the rest
///
/// Removing a command that isn't listed, or that isn't in the store at all,
/// is a no-op.
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn remove_command(
    store: &mut Store,
    cluster_id: &ClusterId,
    command_id: &CommandId,
) -> Result<()> {
    let (cluster, arena) = store.cluster_with_commands_mut(cluster_id)?;

    let listed = cluster.remove_command_entry(command_id);
    if listed {
        cluster.touch();
    }

    let referenced = match arena.get_mut(command_id) {
        Some(command) => {
            let removed = command.remove_cluster_ref(cluster_id);
            if removed {
                command.touch();
            }
            removed
        }
        None => false,
    };

    tracing::debug!(
        cluster_id = %cluster_id,
        command_id = %command_id,
        listed,
        referenced,
        "command removed"
    );
    Ok(())
}

/// Detach every command from the cluster
///
/// Works over a snapshot of the command list taken before the first removal.
/// Must run before a cluster is dropped so no command keeps a dangling
/// back-reference.
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn remove_all_commands(store: &mut Store, cluster_id: &ClusterId) -> Result<()> {
    let snapshot = store.get_cluster(cluster_id)?.commands().to_vec();
    for command_id in &snapshot {
        remove_command(store, cluster_id, command_id)?;
    }
    Ok(())
}
