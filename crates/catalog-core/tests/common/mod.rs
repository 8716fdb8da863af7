use catalog_core::model::{ClusterId, CommandId};
use catalog_core::ops::{lifecycle_ops, NewCluster, NewCommand};
use catalog_core::Store;

/// Create a cluster with a fixed id through the lifecycle ops
#[allow(dead_code)]
pub fn create_test_cluster(store: &mut Store, id: &str) -> ClusterId {
    lifecycle_ops::create_cluster(
        store,
        NewCluster {
            id: Some(ClusterId::from(id)),
            name: format!("cluster-{}", id),
            user: "genie".to_string(),
            version: "1.0.0".to_string(),
            ..Default::default()
        },
    )
    .unwrap()
}

/// Create a command with a fixed id through the lifecycle ops
#[allow(dead_code)]
pub fn create_test_command(store: &mut Store, id: &str) -> CommandId {
    lifecycle_ops::create_command(
        store,
        NewCommand {
            id: Some(CommandId::from(id)),
            name: format!("command-{}", id),
            user: "genie".to_string(),
            version: "1.0.0".to_string(),
            ..Default::default()
        },
    )
    .unwrap()
}

/// Store with cluster `c1` and commands `m1`, `m2`, `m3`, nothing associated
#[allow(dead_code)]
pub fn setup_cluster_and_commands() -> (Store, ClusterId, CommandId, CommandId, CommandId) {
    let mut store = Store::new();
    let c1 = create_test_cluster(&mut store, "c1");
    let m1 = create_test_command(&mut store, "m1");
    let m2 = create_test_command(&mut store, "m2");
    let m3 = create_test_command(&mut store, "m3");
    (store, c1, m1, m2, m3)
}

/// The cluster's command list, in order
#[allow(dead_code)]
pub fn commands_of(store: &Store, cluster_id: &ClusterId) -> Vec<CommandId> {
    store.get_cluster(cluster_id).unwrap().commands().to_vec()
}

/// Whether the command holds a back-reference to the cluster
#[allow(dead_code)]
pub fn back_ref(store: &Store, command_id: &CommandId, cluster_id: &ClusterId) -> bool {
    store.get_command(command_id).unwrap().is_on_cluster(cluster_id)
}

/// `m ∈ c.commands ⇔ c ∈ m.clusters` for every cluster/command pair in the store
#[allow(dead_code)]
pub fn is_symmetric(store: &Store) -> bool {
    store.list_clusters().iter().all(|cluster| {
        store.list_commands().iter().all(|command| {
            cluster.has_command(&command.id) == command.is_on_cluster(&cluster.id)
        })
    })
}
