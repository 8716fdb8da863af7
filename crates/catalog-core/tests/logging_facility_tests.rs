//! Logging facility tests
//!
//! `apply` owns the boundary events of a mutation. All tests share one global
//! capture buffer, so each test filters on its own request id.

mod common;

use catalog_core::logging_facility::{init_test_capture, Profile};
use catalog_core::ops::association_ops;
use catalog_core::{apply, Mutation};
use catalog_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CLUSTER_ID, FIELD_COMMANDS_LEN,
    FIELD_COMMAND_ID, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERROR, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_TRACE_ID,
};
use catalog_core_types::{RequestContext, TraceId};

#[test]
fn test_apply_emits_start_and_end() {
    let capture = init_test_capture();
    let (store, c1, m1, _, _) = common::setup_cluster_and_commands();
    let ctx = RequestContext::new();

    apply(
        store,
        Mutation::AddCommand {
            cluster_id: c1.clone(),
            command_id: m1,
        },
        &ctx,
    )
    .unwrap();

    let events = capture.for_request(ctx.request_id.as_str());
    let names: Vec<_> = events.iter().filter_map(|e| e.event.clone()).collect();
    assert_eq!(names, vec![EVENT_START.to_string(), EVENT_END.to_string()]);
    assert_eq!(events[0].op.as_deref(), Some("add_command"));
    assert_eq!(events[0].field(FIELD_CLUSTER_ID), Some("c1"));
    assert_eq!(events[0].field(FIELD_COMMAND_ID), Some("m1"));
    assert!(events[0].field(FIELD_COMPONENT).is_some());
    assert!(events[0].field(FIELD_TRACE_ID).is_none());
    assert!(events[1].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_apply_error_emits_end_error_with_code() {
    let capture = init_test_capture();
    let (store, c1, m1, _, _) = common::setup_cluster_and_commands();
    let store = apply(
        store,
        Mutation::AddCommand {
            cluster_id: c1.clone(),
            command_id: m1.clone(),
        },
        &RequestContext::new(),
    )
    .unwrap();
    let ctx = RequestContext::new();

    let result = apply(
        store,
        Mutation::AddCommand {
            cluster_id: c1,
            command_id: m1,
        },
        &ctx,
    );
    assert!(result.is_err());

    let events = capture.for_request(ctx.request_id.as_str());
    let error = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("end_error event");
    assert_eq!(error.level, tracing::Level::ERROR);
    assert_eq!(error.field(FIELD_ERR_CODE), Some("ERR_DUPLICATE_ASSOCIATION"));
    assert_eq!(error.field(FIELD_ERR_KIND), Some("DuplicateAssociation"));
    assert!(!events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END)));
}

#[test]
fn test_logged_error_carries_request_and_trace_ids() {
    let capture = init_test_capture();
    let trace_id = TraceId::new();
    let ctx = RequestContext::new().with_trace_id(trace_id.clone());

    let result = apply(
        catalog_core::Store::new(),
        Mutation::RemoveAllCommands {
            cluster_id: "ghost".into(),
        },
        &ctx,
    );
    assert!(result.is_err());

    let events = capture.for_request(ctx.request_id.as_str());
    assert!(events
        .iter()
        .all(|e| e.field(FIELD_TRACE_ID) == Some(trace_id.as_str())));

    let error = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("end_error event");
    let rendered = error.field(FIELD_ERROR).expect("rendered error");
    assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
    assert!(rendered.contains(&format!("(request_id: {})", ctx.request_id)));
    assert!(rendered.contains(&format!("(trace_id: {})", trace_id)));
}

#[test]
fn test_replace_commands_reports_list_size() {
    let capture = init_test_capture();
    let (mut store, _, m1, m2, _) = common::setup_cluster_and_commands();
    let cluster_id = common::create_test_cluster(&mut store, "c-replace-size");

    association_ops::replace_commands(&mut store, &cluster_id, Some(vec![m1, m2])).unwrap();

    assert!(capture.events().iter().any(|e| {
        e.field(FIELD_CLUSTER_ID) == Some(cluster_id.as_str())
            && e.field(FIELD_COMMANDS_LEN) == Some("2")
    }));
}

#[test]
fn test_assert_event_exists_finds_op() {
    let capture = init_test_capture();
    let (store, c1, _, _, _) = common::setup_cluster_and_commands();

    apply(
        store,
        Mutation::RemoveAllCommands { cluster_id: c1 },
        &RequestContext::new(),
    )
    .unwrap();

    capture.assert_event_exists("remove_all_commands", EVENT_END);
}

#[test]
fn test_profile_parsing() {
    assert_eq!("prod".parse::<Profile>(), Ok(Profile::Production));
    assert_eq!(" Development ".parse::<Profile>(), Ok(Profile::Development));
    assert_eq!("test".parse::<Profile>(), Ok(Profile::Test));
    assert!("verbose".parse::<Profile>().is_err());
}
