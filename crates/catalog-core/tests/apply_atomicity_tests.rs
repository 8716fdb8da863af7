//! Apply Atomicity Tests
//!
//! 1. Apply returns new valid state on success
//! 2. Apply fails without partial mutation
//! 3. Apply surfaces typed errors and never panics
//! 4. Lifecycle deletes detach both sides before dropping the aggregate

mod common;

use catalog_core::model::{ClusterId, ClusterStatus, CommandId, CommandStatus};
use catalog_core::ops::NewCluster;
use catalog_core::rules::validation::validate_store;
use catalog_core::{apply, CatalogError, Mutation, Store};
use catalog_core_types::RequestContext;

fn ctx() -> RequestContext {
    RequestContext::new()
}

#[test]
fn test_apply_returns_new_valid_state_on_success() {
    let (store, c1, m1, m2, _) = common::setup_cluster_and_commands();

    let state = apply(
        store,
        Mutation::ReplaceCommands {
            cluster_id: c1.clone(),
            commands: Some(vec![m2.clone(), m1.clone()]),
        },
        &ctx(),
    )
    .unwrap();

    assert_eq!(common::commands_of(&state, &c1), vec![m2, m1]);
    assert!(validate_store(&state).is_ok());
}

#[test]
fn test_apply_fails_without_partial_mutation() {
    let (store, c1, m1, m2, _) = common::setup_cluster_and_commands();
    let store = apply(
        store,
        Mutation::AddCommand {
            cluster_id: c1.clone(),
            command_id: m1.clone(),
        },
        &ctx(),
    )
    .unwrap();
    let original = store.clone();

    let result = apply(
        store,
        Mutation::ReplaceCommands {
            cluster_id: c1.clone(),
            commands: Some(vec![m2.clone(), m2.clone()]),
        },
        &ctx(),
    );

    assert!(matches!(
        result,
        Err(CatalogError::DuplicateCommandsInList { .. })
    ));
    assert_eq!(common::commands_of(&original, &c1), vec![m1.clone()]);
    assert!(common::back_ref(&original, &m1, &c1));
    assert!(!common::back_ref(&original, &m2, &c1));
}

#[test]
fn test_apply_surfaces_typed_errors() {
    let ghost_cluster = ClusterId::from("ghost");
    let ghost_command = CommandId::from("ghost");

    let cases = vec![
        Mutation::AddCommand {
            cluster_id: ghost_cluster.clone(),
            command_id: ghost_command.clone(),
        },
        Mutation::RemoveAllCommands {
            cluster_id: ghost_cluster.clone(),
        },
        Mutation::ClusterDelete {
            cluster_id: ghost_cluster.clone(),
        },
    ];
    for mutation in cases {
        let result = apply(Store::new(), mutation, &ctx());
        assert!(matches!(result, Err(CatalogError::ClusterNotFound { .. })));
    }

    let result = apply(
        Store::new(),
        Mutation::CommandDelete {
            command_id: ghost_command,
        },
        &ctx(),
    );
    assert!(matches!(result, Err(CatalogError::CommandNotFound { .. })));

    let result = apply(
        Store::new(),
        Mutation::ClusterCreate(NewCluster::default()),
        &ctx(),
    );
    assert!(matches!(result, Err(CatalogError::InvalidField { .. })));
}

#[test]
fn test_apply_rejects_store_with_broken_invariants() {
    // A command holding a back-reference to a cluster that was never stored
    let mut store = Store::new();
    let m1 = common::create_test_command(&mut store, "m1");
    let c1 = common::create_test_cluster(&mut store, "c1");
    store = apply(
        store,
        Mutation::AddCommand {
            cluster_id: c1.clone(),
            command_id: m1.clone(),
        },
        &ctx(),
    )
    .unwrap();

    let mut hydrated = Store::new();
    hydrated.insert_command(store.get_command(&m1).unwrap().clone());

    let result = apply(
        hydrated,
        Mutation::CommandSetStatus {
            command_id: m1,
            status: CommandStatus::Deprecated,
        },
        &ctx(),
    );
    assert!(matches!(result, Err(CatalogError::UnknownClusterRef { .. })));
}

#[test]
fn test_cluster_delete_detaches_commands() {
    let (store, c1, m1, m2, _) = common::setup_cluster_and_commands();
    let store = apply(
        store,
        Mutation::ReplaceCommands {
            cluster_id: c1.clone(),
            commands: Some(vec![m1.clone(), m2.clone()]),
        },
        &ctx(),
    )
    .unwrap();

    let store = apply(
        store,
        Mutation::ClusterDelete {
            cluster_id: c1.clone(),
        },
        &ctx(),
    )
    .unwrap();

    assert!(!store.contains_cluster(&c1));
    assert!(store.get_command(&m1).unwrap().clusters().is_empty());
    assert!(store.get_command(&m2).unwrap().clusters().is_empty());
}

#[test]
fn test_command_delete_removes_it_from_every_cluster() {
    let (mut store, c1, m1, m2, _) = common::setup_cluster_and_commands();
    let c2 = common::create_test_cluster(&mut store, "c2");
    for (cluster_id, commands) in [
        (&c1, vec![m1.clone(), m2.clone()]),
        (&c2, vec![m2.clone(), m1.clone()]),
    ] {
        store = apply(
            store,
            Mutation::ReplaceCommands {
                cluster_id: cluster_id.clone(),
                commands: Some(commands),
            },
            &ctx(),
        )
        .unwrap();
    }

    let store = apply(
        store,
        Mutation::CommandDelete {
            command_id: m1.clone(),
        },
        &ctx(),
    )
    .unwrap();

    assert!(!store.contains_command(&m1));
    assert_eq!(common::commands_of(&store, &c1), vec![m2.clone()]);
    assert_eq!(common::commands_of(&store, &c2), vec![m2.clone()]);
}

#[test]
fn test_status_mutations() {
    let (store, c1, m1, _, _) = common::setup_cluster_and_commands();

    let store = apply(
        store,
        Mutation::ClusterSetStatus {
            cluster_id: c1.clone(),
            status: ClusterStatus::OutOfService,
        },
        &ctx(),
    )
    .unwrap();
    let store = apply(
        store,
        Mutation::CommandSetStatus {
            command_id: m1.clone(),
            status: CommandStatus::Inactive,
        },
        &ctx(),
    )
    .unwrap();

    assert_eq!(
        store.get_cluster(&c1).unwrap().status,
        ClusterStatus::OutOfService
    );
    assert_eq!(
        store.get_command(&m1).unwrap().status,
        CommandStatus::Inactive
    );
}
