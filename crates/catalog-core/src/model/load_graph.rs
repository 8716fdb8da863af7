//! Named load graphs
//!
//! A load graph tells the persistence side which relations of a cluster must
//! be materialized before a read or mutation runs. The names are stable and
//! shared with the store that resolves them.

use serde::{Deserialize, Serialize};

/// Relation of a cluster (or of its commands) that a graph can materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Commands,
    SetupFile,
    Configs,
    Dependencies,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadGraph {
    /// Base fields of the cluster's commands
    Commands,
    /// The cluster's commands with everything needed to build their transfer views
    CommandsDto,
    /// Everything needed to build the cluster's own transfer view
    Dto,
}

impl LoadGraph {
    pub const ALL: [LoadGraph; 3] = [LoadGraph::Commands, LoadGraph::CommandsDto, LoadGraph::Dto];

    pub fn name(&self) -> &'static str {
        match self {
            LoadGraph::Commands => "Cluster.commands",
            LoadGraph::CommandsDto => "Cluster.commands.dto",
            LoadGraph::Dto => "Cluster.dto",
        }
    }

    /// Cluster attributes this graph materializes
    pub fn attribute_nodes(&self) -> &'static [Attribute] {
        match self {
            LoadGraph::Commands | LoadGraph::CommandsDto => &[Attribute::Commands],
            LoadGraph::Dto => &[
                Attribute::SetupFile,
                Attribute::Configs,
                Attribute::Dependencies,
                Attribute::Tags,
            ],
        }
    }

    /// Whether command details are loaded beyond their ids
    pub fn loads_command_details(&self) -> bool {
        matches!(self, LoadGraph::CommandsDto)
    }

    pub fn includes(&self, attribute: Attribute) -> bool {
        self.attribute_nodes().contains(&attribute)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|graph| graph.name() == name)
    }
}
