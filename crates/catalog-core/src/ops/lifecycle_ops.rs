use super::association_ops;
use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::{Cluster, ClusterId, ClusterStatus, Command, CommandId, CommandStatus, Metadata};

/// Descriptive fields for a new cluster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCluster {
    /// Caller-chosen id; a UUIDv7 is generated when absent
    pub id: Option<ClusterId>,
    pub name: String,
    pub user: String,
    pub version: String,
    pub status: ClusterStatus,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
}

/// Descriptive fields for a new command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCommand {
    pub id: Option<CommandId>,
    pub name: String,
    pub user: String,
    pub version: String,
    pub status: CommandStatus,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidField {
            field: field.to_string(),
            reason: "cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Create a cluster with empty relation collections
///
/// # Errors
///
/// * `InvalidField` - If name, user or version is blank
/// * `AlreadyExists` - If a cluster with the supplied id is already stored
pub fn create_cluster(store: &mut Store, new: NewCluster) -> Result<ClusterId> {
    require_non_blank("name", &new.name)?;
    require_non_blank("user", &new.user)?;
    require_non_blank("version", &new.version)?;

    let id = new.id.unwrap_or_else(ClusterId::generate);
    if store.contains_cluster(&id) {
        return Err(CatalogError::AlreadyExists {
            entity_id: id.to_string(),
        });
    }

    let mut cluster = Cluster::new(id.clone(), new.name, new.user, new.version);
    cluster.status = new.status;
    cluster.description = new.description;
    if let Some(metadata) = new.metadata {
        cluster.metadata = metadata;
    }
    store.insert_cluster(cluster);

    tracing::debug!(cluster_id = %id, "cluster created");
    Ok(id)
}

/// Create a command with no cluster back-references
///
/// # Errors
///
/// * `InvalidField` - If name, user or version is blank
/// * `AlreadyExists` - If a command with the supplied id is already stored
pub fn create_command(store: &mut Store, new: NewCommand) -> Result<CommandId> {
    require_non_blank("name", &new.name)?;
    require_non_blank("user", &new.user)?;
    require_non_blank("version", &new.version)?;

    let id = new.id.unwrap_or_else(CommandId::generate);
    if store.contains_command(&id) {
        return Err(CatalogError::AlreadyExists {
            entity_id: id.to_string(),
        });
    }

    let mut command = Command::new(id.clone(), new.name, new.user, new.version);
    command.status = new.status;
    command.description = new.description;
    if let Some(metadata) = new.metadata {
        command.metadata = metadata;
    }
    store.insert_command(command);

    tracing::debug!(command_id = %id, "command created");
    Ok(id)
}

/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn update_cluster_status(
    store: &mut Store,
    cluster_id: &ClusterId,
    status: ClusterStatus,
) -> Result<()> {
    let cluster = store.get_cluster_mut(cluster_id)?;
    cluster.status = status;
    cluster.touch();
    Ok(())
}

/// # Errors
///
/// Returns `CommandNotFound` if the command doesn't exist.
pub fn update_command_status(
    store: &mut Store,
    command_id: &CommandId,
    status: CommandStatus,
) -> Result<()> {
    let command = store.get_command_mut(command_id)?;
    command.status = status;
    command.touch();
    Ok(())
}

/// Detach a cluster from all its commands and drop it from the store
///
/// Durable deletion belongs to the persistence side; this only guarantees
/// that no command is left holding a back-reference to the removed cluster.
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist.
pub fn delete_cluster(store: &mut Store, cluster_id: &ClusterId) -> Result<Cluster> {
    association_ops::remove_all_commands(store, cluster_id)?;
    let cluster = store
        .remove_cluster_entry(cluster_id)
        .ok_or_else(|| CatalogError::ClusterNotFound {
            cluster_id: cluster_id.to_string(),
        })?;

    tracing::debug!(cluster_id = %cluster_id, "cluster deleted");
    Ok(cluster)
}

/// Remove a command from every cluster that lists it and drop it from the store
///
/// Every back-referenced cluster is resolved before the first detach, so a
/// failing call leaves all clusters untouched.
///
/// # Errors
///
/// * `CommandNotFound` - If the command doesn't exist
/// * `ClusterNotFound` - If the command references a cluster missing from the store
pub fn delete_command(store: &mut Store, command_id: &CommandId) -> Result<Command> {
    let snapshot: Vec<ClusterId> = store
        .get_command(command_id)?
        .clusters()
        .iter()
        .cloned()
        .collect();

    for cluster_id in &snapshot {
        store.get_cluster(cluster_id)?;
    }

    for cluster_id in &snapshot {
        association_ops::remove_command(store, cluster_id, command_id)?;
    }

    let command = store
        .remove_command_entry(command_id)
        .ok_or_else(|| CatalogError::CommandNotFound {
            command_id: command_id.to_string(),
        })?;

    tracing::debug!(
        command_id = %command_id,
        detached = snapshot.len(),
        "command deleted"
    );
    Ok(command)
}
