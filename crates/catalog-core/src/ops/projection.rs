//! Read projections over the store
//!
//! Projections are built for downstream transfer views. A load graph decides
//! which relations are materialized; relations outside the graph are `None`
//! rather than empty so callers can tell "not loaded" from "no members".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::store::Store;
use crate::errors::Result;
use crate::model::{
    Attribute, ClusterId, ClusterStatus, Command, CommandId, CommandStatus, FileRef, LoadGraph,
    TagRef,
};

/// Summary of one command as seen from a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSummary {
    pub id: CommandId,
    pub name: String,
    pub version: String,
    pub status: CommandStatus,
}

impl From<&Command> for CommandSummary {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id.clone(),
            name: command.name.clone(),
            version: command.version.clone(),
            status: command.status,
        }
    }
}

/// Serializable view of a cluster shaped by a load graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterProjection {
    pub id: ClusterId,
    pub name: String,
    pub user: String,
    pub version: String,
    pub status: ClusterStatus,
    pub load_graph: String,

    /// Only populated by graphs that load the setup file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_file: Option<FileRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<BTreeSet<FileRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeSet<FileRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<TagRef>>,

    /// Command ids in cluster order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_ids: Option<Vec<CommandId>>,
    /// Command details in cluster order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandSummary>>,
}

/// Ordered read view of a cluster's commands
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist, or
/// `CommandNotFound` if the cluster lists a command missing from the store.
pub fn cluster_commands<'a>(store: &'a Store, cluster_id: &ClusterId) -> Result<Vec<&'a Command>> {
    store
        .get_cluster(cluster_id)?
        .commands()
        .iter()
        .map(|id| store.get_command(id))
        .collect()
}

/// Build a projection of a cluster materializing only what `graph` names
///
/// # Errors
///
/// Returns `ClusterNotFound` if the cluster doesn't exist, or
/// `CommandNotFound` if command details are requested for a command missing
/// from the store.
pub fn project_cluster(
    store: &Store,
    cluster_id: &ClusterId,
    graph: LoadGraph,
) -> Result<ClusterProjection> {
    let cluster = store.get_cluster(cluster_id)?;

    let command_ids = graph
        .includes(Attribute::Commands)
        .then(|| cluster.commands().to_vec());

    let commands = if graph.loads_command_details() {
        let details = cluster_commands(store, cluster_id)?;
        Some(details.into_iter().map(CommandSummary::from).collect())
    } else {
        None
    };

    Ok(ClusterProjection {
        id: cluster.id.clone(),
        name: cluster.name.clone(),
        user: cluster.user.clone(),
        version: cluster.version.clone(),
        status: cluster.status,
        load_graph: graph.name().to_string(),
        setup_file: graph
            .includes(Attribute::SetupFile)
            .then(|| cluster.setup_file().cloned())
            .flatten(),
        configs: graph
            .includes(Attribute::Configs)
            .then(|| cluster.configs().clone()),
        dependencies: graph
            .includes(Attribute::Dependencies)
            .then(|| cluster.dependencies().clone()),
        tags: graph.includes(Attribute::Tags).then(|| cluster.tags().clone()),
        command_ids,
        commands,
    })
}

/// Serialize a projection to JSON
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn projection_to_json(projection: &ClusterProjection) -> Result<String> {
    Ok(serde_json::to_string(projection)?)
}
