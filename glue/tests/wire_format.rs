/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use glue::input::{GetDatabaseInput, StartJobRunInput};
use glue::model::{Column, DynamoDBTarget, JobRun, JobRunState, Predecessor, WorkerType};
use glue::output::GetJobRunOutput;
use glue::Instant;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn unset_members_are_omitted() {
    let input = GetDatabaseInput::builder().name("sales").build();
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "Name": "sales" }));
}

#[test]
fn members_use_wire_names() {
    let input = StartJobRunInput::builder()
        .job_name("etl")
        .arguments("--enable-metrics", "")
        .worker_type(WorkerType::G1x)
        .number_of_workers(10)
        .max_capacity(2.5)
        .build()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "JobName": "etl",
            "Arguments": { "--enable-metrics": "" },
            "WorkerType": "G.1X",
            "NumberOfWorkers": 10,
            "MaxCapacity": 2.5
        })
    );

    let target = DynamoDBTarget::builder()
        .path("orders")
        .scan_all(true)
        .scan_rate(0.5)
        .build();
    assert_eq!(
        serde_json::to_value(&target).unwrap(),
        json!({ "Path": "orders", "scanAll": true, "scanRate": 0.5 })
    );
}

#[test]
fn outputs_deserialize_with_timestamps_and_unknown_values() {
    let output: GetJobRunOutput = serde_json::from_value(json!({
        "JobRun": {
            "Id": "jr_1",
            "JobName": "etl",
            "StartedOn": 1577836800.123,
            "CompletedOn": 1577840400,
            "JobRunState": "PAUSED",
            "PredecessorRuns": [{ "JobName": "extract", "RunId": "jr_0" }],
            "SomethingNew": { "nested": true }
        }
    }))
    .unwrap();
    let run = output.job_run().unwrap();
    assert_eq!(run.id(), Some("jr_1"));
    assert_eq!(
        run.started_on(),
        Some(&Instant::from_epoch_millis(1_577_836_800_123))
    );
    assert_eq!(run.completed_on(), Some(&Instant::from_epoch_seconds(1_577_840_400)));
    assert_eq!(
        run.job_run_state(),
        Some(&JobRunState::Unknown("PAUSED".to_owned()))
    );
    assert_eq!(run.predecessor_runs().map(|runs| runs.len()), Some(1));
    assert_eq!(run.attempt(), None);

    let reserialized = serde_json::to_value(&output).unwrap();
    assert_eq!(reserialized["JobRun"]["JobRunState"], json!("PAUSED"));
    assert_eq!(reserialized["JobRun"]["StartedOn"], json!(1577836800.123));
    assert_eq!(reserialized["JobRun"]["CompletedOn"], json!(1577840400));
}

#[test]
fn null_members_deserialize_as_none() {
    let output: GetJobRunOutput = serde_json::from_str(r#"{"JobRun": null}"#).unwrap();
    assert_eq!(output.job_run(), None);
}

#[test]
fn populated_shapes_survive_a_round_trip() {
    let run = JobRun::builder()
        .id("jr_2")
        .attempt(1)
        .started_on(Instant::from_epoch_millis(1_600_000_000_250))
        .job_run_state(JobRunState::Succeeded)
        .arguments("--job-bookmark-option", "job-bookmark-enable")
        .predecessor_runs(Predecessor::builder().job_name("extract").run_id("jr_1").build())
        .max_capacity(10.0)
        .worker_type(WorkerType::Unknown("G.8X".to_owned()))
        .build()
        .unwrap();
    let json = serde_json::to_string(&run).unwrap();
    let back: JobRun = serde_json::from_str(&json).unwrap();
    assert_eq!(back, run);

    let column = Column::builder()
        .name("id")
        .r#type("bigint")
        .parameters("comment", "primary key")
        .build()
        .unwrap();
    let back: Column = serde_json::from_value(serde_json::to_value(&column).unwrap()).unwrap();
    assert_eq!(back, column);
}
