/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use glue::input::{CreateDatabaseInput, GetDatabaseInput, TagResourceInput};
use glue::model::{
    Column, ConnectionInput, ConnectionPropertyKey, DatabaseInput, Order, S3Target, Table,
    Trigger, TriggerType,
};
use pretty_assertions::assert_eq;
use std::collections::{HashMap, HashSet};

#[test]
fn unset_members_are_none() {
    let table = Table::builder().build().unwrap();
    assert_eq!(table.name(), None);
    assert_eq!(table.retention(), None);
    assert_eq!(table.partition_keys(), None);
    assert_eq!(table.parameters(), None);
    assert_eq!(table.create_time(), None);
    assert_eq!(table, Table::builder().build().unwrap());
}

#[test]
fn setters_chain() {
    let order = Order::builder().column("year").sort_order(1).build();
    assert_eq!(order.column(), Some("year"));
    assert_eq!(order.sort_order(), Some(1));

    let input = GetDatabaseInput::builder()
        .catalog_id("123456789012")
        .name("sales")
        .build();
    assert_eq!(input.catalog_id(), Some("123456789012"));
    assert_eq!(input.name(), Some("sales"));
}

#[test]
fn keyword_members_use_raw_identifiers() {
    let trigger = Trigger::builder()
        .name("nightly")
        .r#type(TriggerType::Scheduled)
        .schedule("cron(0 0 * * ? *)")
        .build();
    assert_eq!(trigger.r#type(), Some(&TriggerType::Scheduled));
    assert_eq!(trigger.r#type, Some(TriggerType::Scheduled));

    let column = Column::builder().name("id").r#type("bigint").build().unwrap();
    assert_eq!(column.r#type(), Some("bigint"));
}

#[test]
fn list_setters_append() {
    let target = S3Target::builder()
        .path("s3://bucket/prefix")
        .exclusions("*.tmp")
        .exclusions("_temporary/**")
        .build();
    assert_eq!(
        target.exclusions(),
        Some(&["*.tmp".to_owned(), "_temporary/**".to_owned()][..])
    );

    let replaced = S3Target::builder()
        .exclusions("*.tmp")
        .set_exclusions(Some(vec!["*.bak".to_owned()]))
        .build();
    assert_eq!(replaced.exclusions(), Some(&["*.bak".to_owned()][..]));
}

#[test]
fn builder_getters_expose_pending_values() {
    let builder = Column::builder().name("id");
    assert_eq!(builder.get_name(), &Some("id".to_owned()));
    assert_eq!(builder.get_comment(), &None);
    assert_eq!(builder.get_parameters(), &None);
}

#[test]
fn map_setters_insert_entries() {
    let column = Column::builder()
        .name("id")
        .parameters("comment", "primary key")
        .parameters("encoding", "utf-8")
        .build()
        .unwrap();
    let mut expected = HashMap::new();
    expected.insert("comment".to_owned(), "primary key".to_owned());
    expected.insert("encoding".to_owned(), "utf-8".to_owned());
    assert_eq!(column.parameters(), Some(&expected));
}

#[test]
fn duplicate_map_keys_fail_the_build() {
    let err = Column::builder()
        .parameters("comment", "first")
        .parameters("comment", "second")
        .build()
        .unwrap_err();
    assert!(err.is_duplicate_map_key());
    assert_eq!(err.field(), "parameters");
    assert_eq!(err.key(), Some("comment"));
    assert_eq!(
        err.to_string(),
        "duplicate key `comment` provided for `parameters`"
    );
}

#[test]
fn first_duplicate_is_reported_and_first_value_kept() {
    let builder = TagResourceInput::builder()
        .resource_arn("arn:aws:glue:us-east-1:123456789012:job/etl")
        .tags_to_add("team", "data")
        .tags_to_add("team", "platform")
        .tags_to_add("env", "prod")
        .tags_to_add("env", "dev");
    let tags = builder.get_tags_to_add().as_ref().unwrap();
    assert_eq!(tags.get("team").map(String::as_str), Some("data"));
    assert_eq!(tags.get("env").map(String::as_str), Some("prod"));

    let err = builder.build().unwrap_err();
    assert_eq!(err.key(), Some("team"));
    assert_eq!(err.field(), "tags_to_add");
}

#[test]
fn set_replaces_map_without_clearing_duplicate_error() {
    let err = Column::builder()
        .parameters("k", "v")
        .parameters("k", "v")
        .set_parameters(None)
        .build()
        .unwrap_err();
    assert_eq!(err.key(), Some("k"));
}

#[test]
fn enum_keyed_maps_reject_duplicates() {
    let err = ConnectionInput::builder()
        .name("warehouse")
        .connection_properties(ConnectionPropertyKey::Host, "db.internal")
        .connection_properties(ConnectionPropertyKey::Host, "db.external")
        .build()
        .unwrap_err();
    assert_eq!(err.field(), "connection_properties");
    assert_eq!(err.key(), Some("HOST"));

    let connection = ConnectionInput::builder()
        .connection_properties(ConnectionPropertyKey::Host, "db.internal")
        .connection_properties(ConnectionPropertyKey::Port, "5432")
        .build()
        .unwrap();
    assert_eq!(
        connection
            .connection_properties()
            .and_then(|props| props.get(&ConnectionPropertyKey::Port))
            .map(String::as_str),
        Some("5432")
    );
}

#[test]
fn nested_structures_compare_by_value() {
    let database = |description: &str| {
        CreateDatabaseInput::builder()
            .database_input(
                DatabaseInput::builder()
                    .name("sales")
                    .description(description)
                    .build()
                    .unwrap(),
            )
            .build()
    };
    assert_eq!(database("raw events"), database("raw events"));
    assert_ne!(database("raw events"), database("curated"));
}

#[test]
fn shapes_without_floats_or_maps_are_hashable() {
    let mut orders = HashSet::new();
    orders.insert(Order::builder().column("year").sort_order(1).build());
    orders.insert(Order::builder().column("year").sort_order(1).build());
    orders.insert(Order::builder().column("month").sort_order(0).build());
    assert_eq!(orders.len(), 2);
}

#[test]
fn appending_matches_setting_the_whole_list() {
    let appended = S3Target::builder()
        .exclusions("a/**")
        .exclusions("b/**")
        .exclusions("c/**")
        .build();
    let set = S3Target::builder()
        .set_exclusions(Some(vec![
            "a/**".to_owned(),
            "b/**".to_owned(),
            "c/**".to_owned(),
        ]))
        .build();
    assert_eq!(appended, set);
}

#[test]
fn equal_shapes_hash_equally() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(order: &Order) -> u64 {
        let mut hasher = DefaultHasher::new();
        order.hash(&mut hasher);
        hasher.finish()
    }

    let a = Order::builder().column("year").sort_order(1).build();
    let b = Order::builder().column("year").sort_order(1).build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, Order::builder().column("year").sort_order(0).build());
    assert_ne!(a, Order::builder().sort_order(1).build());
}
