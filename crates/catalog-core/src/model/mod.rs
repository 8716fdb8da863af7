pub mod cluster;
pub mod command;
pub mod ids;
pub mod load_graph;
pub mod metadata;
pub mod refs;

pub use cluster::{Cluster, ClusterStatus};
pub use command::{Command, CommandStatus};
pub use ids::{ClusterId, CommandId};
pub use load_graph::{Attribute, LoadGraph};
pub use metadata::Metadata;
pub use refs::{FileRef, TagRef};
