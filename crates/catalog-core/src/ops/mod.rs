pub mod association_ops;
pub mod lifecycle_ops;
pub mod projection;
pub mod store;

pub use lifecycle_ops::{NewCluster, NewCommand};
pub use projection::{cluster_commands, project_cluster, ClusterProjection};
pub use store::Store;
