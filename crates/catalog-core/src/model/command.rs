use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::{ClusterId, CommandId};
use super::metadata::Metadata;

/// Lifecycle status of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    #[default]
    Active,
    Deprecated,
    Inactive,
}

/// Command - something a cluster can run
///
/// The `clusters` set is the back-reference side of the cluster/command
/// association. It is kept in sync by the cluster's association operations
/// and never edited on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,

    pub name: String,
    pub user: String,
    pub version: String,
    pub status: CommandStatus,
    pub description: Option<String>,
    pub metadata: Metadata,

    pub(crate) clusters: BTreeSet<ClusterId>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Command {
    /// Create a command with no cluster back-references
    pub fn new(id: CommandId, name: String, user: String, version: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            user,
            version,
            status: CommandStatus::default(),
            description: None,
            metadata: Metadata::new(),
            clusters: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Clusters that list this command
    pub fn clusters(&self) -> &BTreeSet<ClusterId> {
        &self.clusters
    }

    pub fn is_on_cluster(&self, cluster_id: &ClusterId) -> bool {
        self.clusters.contains(cluster_id)
    }

    pub(crate) fn add_cluster_ref(&mut self, cluster_id: ClusterId) -> bool {
        self.clusters.insert(cluster_id)
    }

    pub(crate) fn remove_cluster_ref(&mut self, cluster_id: &ClusterId) -> bool {
        self.clusters.remove(cluster_id)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
