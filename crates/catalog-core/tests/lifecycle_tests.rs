mod common;

use catalog_core::errors::CatalogError;
use catalog_core::model::{ClusterId, ClusterStatus, CommandStatus};
use catalog_core::ops::association_ops::{add_command, replace_commands};
use catalog_core::ops::{lifecycle_ops, NewCluster, NewCommand, Store};
use common::{back_ref, commands_of, is_symmetric, setup_cluster_and_commands};

#[test]
fn test_create_cluster_starts_empty() {
    let mut store = Store::new();

    let id = lifecycle_ops::create_cluster(
        &mut store,
        NewCluster {
            name: "h2query".to_string(),
            user: "genie".to_string(),
            version: "2.1".to_string(),
            status: ClusterStatus::Up,
            ..Default::default()
        },
    )
    .unwrap();

    let cluster = store.get_cluster(&id).unwrap();
    assert_eq!(cluster.name, "h2query");
    assert!(cluster.commands().is_empty());
    assert!(cluster.configs().is_empty());
    assert!(cluster.setup_file().is_none());
}

#[test]
fn test_create_rejects_blank_fields() {
    let mut store = Store::new();

    let result = lifecycle_ops::create_command(
        &mut store,
        NewCommand {
            name: "spark".to_string(),
            user: "   ".to_string(),
            version: "3".to_string(),
            ..Default::default()
        },
    );

    match result {
        Err(CatalogError::InvalidField { field, .. }) => assert_eq!(field, "user"),
        other => panic!("expected InvalidField, got {:?}", other),
    }
    assert!(store.list_commands().is_empty());
}

#[test]
fn test_create_rejects_existing_id() {
    let (mut store, _, _, _, _) = setup_cluster_and_commands();

    let result = lifecycle_ops::create_cluster(
        &mut store,
        NewCluster {
            id: Some(ClusterId::from("c1")),
            name: "again".to_string(),
            user: "genie".to_string(),
            version: "1".to_string(),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(CatalogError::AlreadyExists { .. })));
    assert_eq!(store.get_cluster(&"c1".into()).unwrap().name, "cluster-c1");
}

#[test]
fn test_status_updates_leave_associations_alone() {
    let (mut store, c1, m1, _, _) = setup_cluster_and_commands();
    add_command(&mut store, &c1, &m1).unwrap();

    lifecycle_ops::update_cluster_status(&mut store, &c1, ClusterStatus::Terminated).unwrap();
    lifecycle_ops::update_command_status(&mut store, &m1, CommandStatus::Deprecated).unwrap();

    assert_eq!(commands_of(&store, &c1), vec![m1.clone()]);
    assert!(back_ref(&store, &m1, &c1));
}

#[test]
fn test_delete_cluster_returns_detached_aggregate() {
    let (mut store, c1, m1, m2, _) = setup_cluster_and_commands();
    let c2 = common::create_test_cluster(&mut store, "c2");
    replace_commands(&mut store, &c1, Some(vec![m1.clone(), m2.clone()])).unwrap();
    add_command(&mut store, &c2, &m1).unwrap();

    let removed = lifecycle_ops::delete_cluster(&mut store, &c1).unwrap();

    assert!(removed.commands().is_empty());
    assert!(!store.contains_cluster(&c1));
    assert!(!back_ref(&store, &m1, &c1));
    assert!(back_ref(&store, &m1, &c2));
    assert!(is_symmetric(&store));
}

#[test]
fn test_delete_command_detaches_from_all_clusters() {
    let (mut store, c1, m1, m2, m3) = setup_cluster_and_commands();
    replace_commands(
        &mut store,
        &c1,
        Some(vec![m1.clone(), m2.clone(), m3.clone()]),
    )
    .unwrap();

    let removed = lifecycle_ops::delete_command(&mut store, &m2).unwrap();

    assert!(removed.clusters().is_empty());
    assert_eq!(commands_of(&store, &c1), vec![m1.clone(), m3.clone()]);
    assert!(is_symmetric(&store));
}

#[test]
fn test_delete_unknown_aggregates() {
    let mut store = Store::new();

    assert!(matches!(
        lifecycle_ops::delete_cluster(&mut store, &"nope".into()),
        Err(CatalogError::ClusterNotFound { .. })
    ));
    assert!(matches!(
        lifecycle_ops::delete_command(&mut store, &"nope".into()),
        Err(CatalogError::CommandNotFound { .. })
    ));
}

#[test]
fn test_delete_command_with_unknown_cluster_ref_changes_nothing() {
    let (mut store, c1, m1, _, _) = setup_cluster_and_commands();
    let c2 = common::create_test_cluster(&mut store, "c2");
    add_command(&mut store, &c1, &m1).unwrap();
    add_command(&mut store, &c2, &m1).unwrap();

    // Hydrated without c2: m1 still references it
    let mut partial = Store::new();
    partial.insert_cluster(store.get_cluster(&c1).unwrap().clone());
    partial.insert_command(store.get_command(&m1).unwrap().clone());

    let result = lifecycle_ops::delete_command(&mut partial, &m1);

    match result {
        Err(CatalogError::ClusterNotFound { cluster_id }) => assert_eq!(cluster_id, "c2"),
        other => panic!("expected ClusterNotFound, got {:?}", other),
    }
    assert!(partial.contains_command(&m1));
    assert_eq!(commands_of(&partial, &c1), vec![m1.clone()]);
    assert!(back_ref(&partial, &m1, &c1));
    assert!(back_ref(&partial, &m1, &c2));
}
