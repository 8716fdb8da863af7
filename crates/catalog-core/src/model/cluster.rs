use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::{ClusterId, CommandId};
use super::metadata::Metadata;
use super::refs::{FileRef, TagRef};

/// Operational status of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    #[default]
    Up,
    OutOfService,
    Terminated,
}

/// Cluster - a compute cluster jobs can be scheduled onto
///
/// Holds three unordered reference sets and the ordered list of commands it
/// can run. The order of `commands` is an execution preference consumed
/// downstream, so it is significant and free of duplicates.
///
/// Relation collections are only mutated through `ops::association_ops`,
/// which keeps each command's back-reference set in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Unique identifier, immutable after creation
    pub id: ClusterId,

    pub name: String,
    pub user: String,
    pub version: String,
    pub status: ClusterStatus,
    pub description: Option<String>,
    pub metadata: Metadata,

    pub(crate) setup_file: Option<FileRef>,
    pub(crate) configs: BTreeSet<FileRef>,
    pub(crate) dependencies: BTreeSet<FileRef>,
    pub(crate) tags: BTreeSet<TagRef>,
    pub(crate) commands: Vec<CommandId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cluster {
    /// Create a cluster with empty relation collections
    pub fn new(id: ClusterId, name: String, user: String, version: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            user,
            version,
            status: ClusterStatus::default(),
            description: None,
            metadata: Metadata::new(),
            setup_file: None,
            configs: BTreeSet::new(),
            dependencies: BTreeSet::new(),
            tags: BTreeSet::new(),
            commands: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn setup_file(&self) -> Option<&FileRef> {
        self.setup_file.as_ref()
    }

    pub fn configs(&self) -> &BTreeSet<FileRef> {
        &self.configs
    }

    pub fn dependencies(&self) -> &BTreeSet<FileRef> {
        &self.dependencies
    }

    pub fn tags(&self) -> &BTreeSet<TagRef> {
        &self.tags
    }

    /// Commands in execution-preference order
    pub fn commands(&self) -> &[CommandId] {
        &self.commands
    }

    pub fn has_command(&self, command_id: &CommandId) -> bool {
        self.commands.contains(command_id)
    }

    pub(crate) fn push_command(&mut self, command_id: CommandId) {
        self.commands.push(command_id);
    }

    /// Remove a command entry, keeping the order of the rest
    pub(crate) fn remove_command_entry(&mut self, command_id: &CommandId) -> bool {
        let before = self.commands.len();
        self.commands.retain(|id| id != command_id);
        self.commands.len() != before
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
