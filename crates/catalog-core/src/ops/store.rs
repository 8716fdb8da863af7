use std::collections::HashMap;

use crate::errors::{CatalogError, Result};
use crate::model::{Cluster, ClusterId, Command, CommandId};

/// In-memory arena of clusters and commands
///
/// Aggregates are addressed by id and relations are stored as id sets/lists,
/// so the cluster/command graph carries no reference cycles. There is no
/// internal locking: mutation goes through `&mut Store` and the caller owns
/// serialization of a unit of work.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) clusters: HashMap<ClusterId, Cluster>,
    pub(crate) commands: HashMap<CommandId, Command>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cluster by id
    ///
    /// # Errors
    ///
    /// Returns `ClusterNotFound` if no cluster has this id.
    pub fn get_cluster(&self, id: &ClusterId) -> Result<&Cluster> {
        self.clusters
            .get(id)
            .ok_or_else(|| CatalogError::ClusterNotFound {
                cluster_id: id.to_string(),
            })
    }

    /// Get a mutable cluster by id
    ///
    /// Relation collections stay read-only through this handle; only the
    /// descriptive fields can be edited directly.
    ///
    /// # Errors
    ///
    /// Returns `ClusterNotFound` if no cluster has this id.
    pub fn get_cluster_mut(&mut self, id: &ClusterId) -> Result<&mut Cluster> {
        self.clusters
            .get_mut(id)
            .ok_or_else(|| CatalogError::ClusterNotFound {
                cluster_id: id.to_string(),
            })
    }

    /// Get a command by id
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` if no command has this id.
    pub fn get_command(&self, id: &CommandId) -> Result<&Command> {
        self.commands
            .get(id)
            .ok_or_else(|| CatalogError::CommandNotFound {
                command_id: id.to_string(),
            })
    }

    /// Get a mutable command by id
    ///
    /// # Errors
    ///
    /// Returns `CommandNotFound` if no command has this id.
    pub fn get_command_mut(&mut self, id: &CommandId) -> Result<&mut Command> {
        self.commands
            .get_mut(id)
            .ok_or_else(|| CatalogError::CommandNotFound {
                command_id: id.to_string(),
            })
    }

    /// All clusters, sorted by id
    pub fn list_clusters(&self) -> Vec<&Cluster> {
        let mut clusters: Vec<_> = self.clusters.values().collect();
        clusters.sort_by(|a, b| a.id.cmp(&b.id));
        clusters
    }

    /// All commands, sorted by id
    pub fn list_commands(&self) -> Vec<&Command> {
        let mut commands: Vec<_> = self.commands.values().collect();
        commands.sort_by(|a, b| a.id.cmp(&b.id));
        commands
    }

    pub fn contains_cluster(&self, id: &ClusterId) -> bool {
        self.clusters.contains_key(id)
    }

    pub fn contains_command(&self, id: &CommandId) -> bool {
        self.commands.contains_key(id)
    }

    /// Insert a cluster as-is, replacing any cluster with the same id
    ///
    /// Used by factories and by the persistence side when hydrating. The
    /// caller is responsible for the back-references of whatever it inserts.
    pub fn insert_cluster(&mut self, cluster: Cluster) {
        self.clusters.insert(cluster.id.clone(), cluster);
    }

    /// Insert a command as-is, replacing any command with the same id
    pub fn insert_command(&mut self, command: Command) {
        self.commands.insert(command.id.clone(), command);
    }

    /// Borrow one cluster and the command arena at the same time
    ///
    /// The association engine needs both sides of the relation mutably within
    /// a single operation.
    pub(crate) fn cluster_with_commands_mut(
        &mut self,
        id: &ClusterId,
    ) -> Result<(&mut Cluster, &mut HashMap<CommandId, Command>)> {
        let Store { clusters, commands } = self;
        let cluster = clusters
            .get_mut(id)
            .ok_or_else(|| CatalogError::ClusterNotFound {
                cluster_id: id.to_string(),
            })?;
        Ok((cluster, commands))
    }

    pub(crate) fn remove_cluster_entry(&mut self, id: &ClusterId) -> Option<Cluster> {
        self.clusters.remove(id)
    }

    pub(crate) fn remove_command_entry(&mut self, id: &CommandId) -> Option<Command> {
        self.commands.remove(id)
    }
}
