//! Mutation inventory
//!
//! Every catalog operation the functional boundary accepts. Mutations are
//! processed by `apply()`.

use std::collections::BTreeSet;

use crate::model::{ClusterId, ClusterStatus, CommandId, CommandStatus, FileRef, LoadGraph, TagRef};
use crate::ops::{NewCluster, NewCommand};

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ClusterCreate(NewCluster),
    ClusterSetStatus {
        cluster_id: ClusterId,
        status: ClusterStatus,
    },
    /// Detach from all commands, then drop the cluster
    ClusterDelete { cluster_id: ClusterId },

    CommandCreate(NewCommand),
    CommandSetStatus {
        command_id: CommandId,
        status: CommandStatus,
    },
    /// Remove from every cluster, then drop the command
    CommandDelete { command_id: CommandId },

    SetSetupFile {
        cluster_id: ClusterId,
        setup_file: Option<FileRef>,
    },
    ReplaceConfigs {
        cluster_id: ClusterId,
        configs: Option<BTreeSet<FileRef>>,
    },
    ReplaceDependencies {
        cluster_id: ClusterId,
        dependencies: Option<BTreeSet<FileRef>>,
    },
    ReplaceTags {
        cluster_id: ClusterId,
        tags: Option<BTreeSet<TagRef>>,
    },

    ReplaceCommands {
        cluster_id: ClusterId,
        commands: Option<Vec<CommandId>>,
    },
    AddCommand {
        cluster_id: ClusterId,
        command_id: CommandId,
    },
    RemoveCommand {
        cluster_id: ClusterId,
        command_id: CommandId,
    },
    RemoveAllCommands { cluster_id: ClusterId },
}

impl Mutation {
    /// Stable operation name used for logging
    pub fn op_name(&self) -> &'static str {
        match self {
            Mutation::ClusterCreate(_) => "cluster_create",
            Mutation::ClusterSetStatus { .. } => "cluster_set_status",
            Mutation::ClusterDelete { .. } => "cluster_delete",
            Mutation::CommandCreate(_) => "command_create",
            Mutation::CommandSetStatus { .. } => "command_set_status",
            Mutation::CommandDelete { .. } => "command_delete",
            Mutation::SetSetupFile { .. } => "set_setup_file",
            Mutation::ReplaceConfigs { .. } => "replace_configs",
            Mutation::ReplaceDependencies { .. } => "replace_dependencies",
            Mutation::ReplaceTags { .. } => "replace_tags",
            Mutation::ReplaceCommands { .. } => "replace_commands",
            Mutation::AddCommand { .. } => "add_command",
            Mutation::RemoveCommand { .. } => "remove_command",
            Mutation::RemoveAllCommands { .. } => "remove_all_commands",
        }
    }

    /// Cluster the mutation targets, if any
    pub fn cluster_id(&self) -> Option<&ClusterId> {
        match self {
            Mutation::ClusterCreate(new) => new.id.as_ref(),
            Mutation::ClusterSetStatus { cluster_id, .. }
            | Mutation::ClusterDelete { cluster_id }
            | Mutation::SetSetupFile { cluster_id, .. }
            | Mutation::ReplaceConfigs { cluster_id, .. }
            | Mutation::ReplaceDependencies { cluster_id, .. }
            | Mutation::ReplaceTags { cluster_id, .. }
            | Mutation::ReplaceCommands { cluster_id, .. }
            | Mutation::AddCommand { cluster_id, .. }
            | Mutation::RemoveCommand { cluster_id, .. }
            | Mutation::RemoveAllCommands { cluster_id } => Some(cluster_id),
            Mutation::CommandCreate(_)
            | Mutation::CommandSetStatus { .. }
            | Mutation::CommandDelete { .. } => None,
        }
    }

    /// Single command the mutation targets, if any
    pub fn command_id(&self) -> Option<&CommandId> {
        match self {
            Mutation::CommandCreate(new) => new.id.as_ref(),
            Mutation::CommandSetStatus { command_id, .. }
            | Mutation::CommandDelete { command_id }
            | Mutation::AddCommand { command_id, .. }
            | Mutation::RemoveCommand { command_id, .. } => Some(command_id),
            _ => None,
        }
    }

    /// Load graph the caller must materialize before applying
    ///
    /// Mutations touching the command list need the cluster's commands and
    /// the affected commands' back-reference sets loaded; reference-set
    /// replacements need the cluster's own relations. `None` means base
    /// fields are enough.
    pub fn required_graph(&self) -> Option<LoadGraph> {
        match self {
            Mutation::ClusterDelete { .. }
            | Mutation::CommandDelete { .. }
            | Mutation::ReplaceCommands { .. }
            | Mutation::AddCommand { .. }
            | Mutation::RemoveCommand { .. }
            | Mutation::RemoveAllCommands { .. } => Some(LoadGraph::Commands),
            Mutation::SetSetupFile { .. }
            | Mutation::ReplaceConfigs { .. }
            | Mutation::ReplaceDependencies { .. }
            | Mutation::ReplaceTags { .. } => Some(LoadGraph::Dto),
            Mutation::ClusterCreate(_)
            | Mutation::ClusterSetStatus { .. }
            | Mutation::CommandCreate(_)
            | Mutation::CommandSetStatus { .. } => None,
        }
    }
}
