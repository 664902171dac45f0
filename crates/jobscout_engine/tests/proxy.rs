use std::sync::Arc;

use jobscout_core::{
    StoreRequest, StoreResponse, CLEARED_MESSAGE, MALFORMED_MESSAGE, READ_FAILED_MESSAGE,
    STORED_MESSAGE, STORE_FAILED_MESSAGE,
};
use jobscout_engine::{KeyValueStore, MemoryStore, StoreError, StoreProxy};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

struct BrokenStore;

#[async_trait::async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unavailable("backend offline".into()))
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".into()))
    }
}

struct PanickingStore;

#[async_trait::async_trait]
impl KeyValueStore for PanickingStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        panic!("get exploded")
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        panic!("set exploded")
    }

    async fn clear(&self) -> Result<(), StoreError> {
        panic!("clear exploded")
    }
}

fn init_logging() {
    jobscout_logging::initialize_for_tests();
}

fn memory_proxy() -> StoreProxy {
    StoreProxy::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn store_then_get_returns_value() {
    init_logging();
    let proxy = memory_proxy();

    let stored = proxy
        .handle_value(json!({"action": "storeData", "key": "k", "value": "v"}))
        .await;
    assert_eq!(stored.success, true);
    assert_eq!(stored.message, Some(json!(STORED_MESSAGE)));

    let read = proxy
        .handle_value(json!({"action": "getData", "key": "k"}))
        .await;
    assert_eq!(read, StoreResponse::read(Some(json!("v"))));
}

#[tokio::test]
async fn store_overwrites_existing_key() {
    init_logging();
    let proxy = memory_proxy();
    for value in [json!({"n": 1}), json!({"n": 2})] {
        proxy
            .handle(StoreRequest::StoreData {
                key: "job".into(),
                value,
            })
            .await;
    }

    let read = proxy.handle(StoreRequest::GetData { key: "job".into() }).await;
    assert_eq!(read.message, Some(json!({"n": 2})));
}

#[tokio::test]
async fn missing_key_is_a_successful_empty_read() {
    init_logging();
    let read = memory_proxy()
        .handle(StoreRequest::GetData {
            key: "missing".into(),
        })
        .await;
    assert_eq!(read.success, true);
    assert_eq!(read.message, None);
    assert_eq!(read.error, None);
}

#[tokio::test]
async fn clear_responds_and_removes_keys() {
    init_logging();
    let proxy = memory_proxy();
    proxy
        .handle(StoreRequest::StoreData {
            key: "k".into(),
            value: json!(1),
        })
        .await;

    let cleared = proxy.handle(StoreRequest::ClearAllData).await;
    assert_eq!(cleared.success, true);
    assert_eq!(cleared.message, Some(json!(CLEARED_MESSAGE)));

    let read = proxy.handle(StoreRequest::GetData { key: "k".into() }).await;
    assert_eq!(read, StoreResponse::read(None));
}

#[tokio::test]
async fn store_failures_become_error_responses() {
    init_logging();
    let proxy = StoreProxy::new(Arc::new(BrokenStore));

    let stored = proxy
        .handle(StoreRequest::StoreData {
            key: "k".into(),
            value: json!(true),
        })
        .await;
    assert_eq!(
        stored,
        StoreResponse::failed(STORE_FAILED_MESSAGE, "store unavailable: quota exceeded")
    );

    let read = proxy.handle(StoreRequest::GetData { key: "k".into() }).await;
    assert_eq!(read.success, false);
    assert_eq!(read.message, Some(json!(READ_FAILED_MESSAGE)));

    let cleared = proxy.handle(StoreRequest::ClearAllData).await;
    assert_eq!(cleared.success, false);
    assert!(cleared.error.unwrap().contains("backend offline"));
}

#[tokio::test]
async fn panicking_store_still_gets_a_response() {
    init_logging();
    let proxy = StoreProxy::new(Arc::new(PanickingStore));

    for request in [
        StoreRequest::StoreData {
            key: "k".into(),
            value: json!(1),
        },
        StoreRequest::GetData { key: "k".into() },
        StoreRequest::ClearAllData,
    ] {
        let response = proxy.handle(request).await;
        assert_eq!(response.success, false);
        assert_eq!(response.error.as_deref(), Some("store operation panicked"));
    }
}

#[tokio::test]
async fn malformed_request_gets_a_response() {
    init_logging();
    let proxy = memory_proxy();

    for raw in [
        json!({"action": "nope"}),
        json!({"action": "getData"}),
        json!({"key": "k"}),
        json!("storeData"),
    ] {
        let response = proxy.handle_value(raw).await;
        assert_eq!(response.success, false);
        assert_eq!(response.message, Some(json!(MALFORMED_MESSAGE)));
        assert!(response.error.is_some());
    }
}
