use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use jobscout_core::{
    StoreRequest, StoreResponse, CLEAR_FAILED_MESSAGE, READ_FAILED_MESSAGE, STORE_FAILED_MESSAGE,
};
use jobscout_logging::{scout_debug, scout_error, scout_info, scout_warn};
use serde_json::Value;

use crate::KeyValueStore;

/// Request/response facade over a [`KeyValueStore`].
///
/// Every request yields exactly one response: store errors, malformed input
/// and panicking store implementations all come back as `success: false`.
pub struct StoreProxy {
    store: Arc<dyn KeyValueStore>,
}

impl StoreProxy {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Decodes a raw inbound message and handles it.
    pub async fn handle_value(&self, raw: Value) -> StoreResponse {
        match StoreRequest::from_value(raw) {
            Ok(request) => self.handle(request).await,
            Err(err) => {
                scout_warn!("Rejected store request: {}", err);
                StoreResponse::malformed(&err)
            }
        }
    }

    pub async fn handle(&self, request: StoreRequest) -> StoreResponse {
        let action = request.action();
        scout_debug!(
            "Store request received action={} key={:?}",
            action,
            request.key()
        );

        let failure_message = failure_message(&request);
        let response = match AssertUnwindSafe(self.process(request)).catch_unwind().await {
            Ok(response) => response,
            Err(_) => {
                scout_error!("Store panicked while handling {}", action);
                StoreResponse::failed(failure_message, "store operation panicked")
            }
        };

        scout_debug!(
            "Store request responded action={} success={}",
            action,
            response.success
        );
        response
    }

    async fn process(&self, request: StoreRequest) -> StoreResponse {
        match request {
            StoreRequest::StoreData { key, value } => match self.store.set(&key, value).await {
                Ok(()) => StoreResponse::stored(),
                Err(err) => {
                    scout_error!("Error storing data key={}: {}", key, err);
                    StoreResponse::failed(STORE_FAILED_MESSAGE, err.to_string())
                }
            },
            StoreRequest::GetData { key } => match self.store.get(&key).await {
                Ok(value) => StoreResponse::read(value),
                Err(err) => {
                    scout_error!("Error getting data key={}: {}", key, err);
                    StoreResponse::failed(READ_FAILED_MESSAGE, err.to_string())
                }
            },
            StoreRequest::ClearAllData => match self.store.clear().await {
                Ok(()) => {
                    scout_info!("Cleared store");
                    StoreResponse::cleared()
                }
                Err(err) => {
                    scout_error!("Error clearing data: {}", err);
                    StoreResponse::failed(CLEAR_FAILED_MESSAGE, err.to_string())
                }
            },
        }
    }
}

fn failure_message(request: &StoreRequest) -> &'static str {
    match request {
        StoreRequest::StoreData { .. } => STORE_FAILED_MESSAGE,
        StoreRequest::GetData { .. } => READ_FAILED_MESSAGE,
        StoreRequest::ClearAllData => CLEAR_FAILED_MESSAGE,
    }
}
