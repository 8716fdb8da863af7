use std::collections::HashSet;

use crate::model::{ClusterId, CommandId};
use crate::ops::Store;

/// Find association pairs that are only recorded on one side
///
/// Returns `(cluster_id, command_id, listed_by_cluster)` tuples: `true` means
/// the cluster lists the command but the command has no back-reference,
/// `false` means the command holds a back-reference the cluster doesn't list.
/// Pairs where the other side is missing from the store are reported by
/// `find_unknown_command_refs` / `find_unknown_cluster_refs` instead.
pub fn find_asymmetric_links(store: &Store) -> Vec<(ClusterId, CommandId, bool)> {
    let mut asymmetric = Vec::new();

    for cluster in store.list_clusters() {
        for command_id in cluster.commands() {
            if let Ok(command) = store.get_command(command_id) {
                if !command.is_on_cluster(&cluster.id) {
                    asymmetric.push((cluster.id.clone(), command_id.clone(), true));
                }
            }
        }
    }

    for command in store.list_commands() {
        for cluster_id in command.clusters() {
            if let Ok(cluster) = store.get_cluster(cluster_id) {
                if !cluster.has_command(&command.id) {
                    asymmetric.push((cluster_id.clone(), command.id.clone(), false));
                }
            }
        }
    }

    asymmetric
}

/// Find clusters whose command list repeats an entry
///
/// Returns `(cluster_id, command_id)` for each repeated command.
pub fn find_duplicate_commands(store: &Store) -> Vec<(ClusterId, CommandId)> {
    let mut duplicates = Vec::new();

    for cluster in store.list_clusters() {
        let mut seen = HashSet::new();
        for command_id in cluster.commands() {
            if !seen.insert(command_id) {
                duplicates.push((cluster.id.clone(), command_id.clone()));
            }
        }
    }

    duplicates
}

/// Find command ids listed by a cluster but missing from the store
pub fn find_unknown_command_refs(store: &Store) -> Vec<(ClusterId, CommandId)> {
    store
        .list_clusters()
        .into_iter()
        .flat_map(|cluster| {
            cluster
                .commands()
                .iter()
                .filter(|id| !store.contains_command(id))
                .map(|id| (cluster.id.clone(), id.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Find cluster back-references pointing at clusters missing from the store
pub fn find_unknown_cluster_refs(store: &Store) -> Vec<(ClusterId, CommandId)> {
    store
        .list_commands()
        .into_iter()
        .flat_map(|command| {
            command
                .clusters()
                .iter()
                .filter(|id| !store.contains_cluster(id))
                .map(|id| (id.clone(), command.id.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}
