#![allow(unused)]
//! Directory client integration harness.
//!
//! # What this covers
//!
//! - **HTTP lists**: `HttpDirectory` reads `/contractors`, `/drivers` and
//!   `/vehicles` from a fake directory server.
//! - **End to end**: a parsed booking's hints resolve against the server.
//! - **Only needed lists are fetched**: a record without a vehicle hint never
//!   requests `/vehicles`.
//! - **Failures**: non-2xx status and malformed JSON surface as
//!   `LookupError`s.
//!
//! # Running
//!
//! ```sh
//! cargo test --test directory_harness
//! ```

mod common;
use common::fake_directory_api::FakeDirectoryApi;
use common::*;

use dispatch_core::parse_job_text;
use dispatch_lookup::{
    resolve_hints, Directory, HttpDirectory, LookupError, NamedRef, RefKind, Resolution,
};
use std::time::Duration;

async fn directory_for(api: &FakeDirectoryApi) -> HttpDirectory {
    HttpDirectory::new(&api.base_url(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn lists_are_fetched_over_http() {
    let api = FakeDirectoryApi::start().await.unwrap();
    api.add("drivers", "d1", "Ali Hassan").await;
    api.add("drivers", "d2", "Tan Wei Ming").await;

    let drivers = directory_for(&api).await.list(RefKind::Driver).await.unwrap();
    assert_eq!(
        drivers,
        vec![NamedRef::new("d1", "Ali Hassan"), NamedRef::new("d2", "Tan Wei Ming")]
    );
}

#[tokio::test]
async fn parsed_booking_hints_resolve_end_to_end() {
    let api = FakeDirectoryApi::start().await.unwrap();
    api.add("contractors", "c1", "Lim Transport").await;
    api.add("drivers", "d1", "Ali Hassan").await;
    api.add("vehicles", "v1", "SGX1234A").await;

    let record = assert_parsed!(parse_job_text(BOOKING_FULL));
    let hints = resolve_hints(&directory_for(&api).await, &record).await.unwrap();

    assert_eq!(hints.contractor, Some(Resolution::Resolved(NamedRef::new("c1", "Lim Transport"))));
    assert_eq!(hints.driver, Some(Resolution::Resolved(NamedRef::new("d1", "Ali Hassan"))));
    assert_eq!(hints.vehicle, Some(Resolution::Resolved(NamedRef::new("v1", "SGX1234A"))));
}

#[tokio::test]
async fn missing_hints_are_not_fetched() {
    let api = FakeDirectoryApi::start().await.unwrap();
    api.add("drivers", "d1", "Ali Hassan").await;

    let text = BookingBuilder::minimal().line("Driver", "Ali").build();
    let record = assert_parsed!(parse_job_text(&text));
    let hints = resolve_hints(&directory_for(&api).await, &record).await.unwrap();

    assert!(hints.driver.is_some());
    assert_eq!(hints.vehicle, None);
    assert_eq!(api.hits("drivers").await, 1);
    assert_eq!(api.hits("vehicles").await, 0);
    assert_eq!(api.hits("contractors").await, 0);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let api = FakeDirectoryApi::start().await.unwrap();

    let err = directory_for(&api).await.list(RefKind::Vehicle).await.unwrap_err();
    match err {
        LookupError::Status { status, path } => {
            assert_eq!(status, 404);
            assert_eq!(path, "vehicles");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let api = FakeDirectoryApi::start().await.unwrap();
    api.break_list("contractors").await;

    let err = directory_for(&api).await.list(RefKind::Contractor).await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)), "got {err:?}");
}
