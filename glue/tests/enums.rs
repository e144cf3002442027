/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use glue::model::{CsvHeaderOption, S3EncryptionMode, TriggerType, WorkerType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn known_values_round_trip() {
    for value in WorkerType::values() {
        assert_eq!(WorkerType::from(*value).as_str(), *value);
        assert!(!matches!(WorkerType::from(*value), WorkerType::Unknown(_)));
    }
    assert_eq!(WorkerType::values(), &["Standard", "G.1X", "G.2X"]);
}

#[test]
fn variant_names() {
    assert_eq!(WorkerType::from("G.1X"), WorkerType::G1x);
    assert_eq!(WorkerType::from("G.2X"), WorkerType::G2x);
    assert_eq!(S3EncryptionMode::from("SSE-KMS"), S3EncryptionMode::Ssekms);
    assert_eq!(TriggerType::from("ON_DEMAND"), TriggerType::OnDemand);
    // keeps clear of the catch-all
    assert_eq!(CsvHeaderOption::from("UNKNOWN"), CsvHeaderOption::UnknownValue);
    assert_eq!(CsvHeaderOption::UnknownValue.as_str(), "UNKNOWN");
}

#[test]
fn unknown_values_are_preserved() {
    let parsed: TriggerType = "EVENT".parse().unwrap();
    assert_eq!(parsed, TriggerType::Unknown("EVENT".to_owned()));
    assert_eq!(parsed.as_ref(), "EVENT");
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"EVENT\"");
}

#[test]
fn values_are_case_sensitive() {
    assert_eq!(
        WorkerType::from("standard"),
        WorkerType::Unknown("standard".to_owned())
    );
}

proptest! {
    #[test]
    fn any_string_round_trips(value in ".*") {
        let parsed = WorkerType::from(value.as_str());
        prop_assert_eq!(parsed.as_str(), value.as_str());
        let json = serde_json::to_string(&parsed).unwrap();
        let back: WorkerType = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, parsed);
    }
}
